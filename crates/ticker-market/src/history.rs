//! OHLCV history export as CSV text

use crate::provider::{Bar, MarketData};

/// Period used when the caller does not supply one
pub const DEFAULT_PERIOD: &str = "1d";

const CSV_HEADER: &str = "Date,Open,High,Low,Close,Volume";

/// Export the price history for a symbol as CSV text
///
/// Rows keep the provider's chronological order. An empty series and a
/// provider failure each produce a descriptive sentence instead of CSV;
/// this function never errors.
pub async fn history_csv(provider: &dyn MarketData, symbol: &str, period: &str) -> String {
    match provider.history(symbol, period).await {
        Ok(bars) if bars.is_empty() => format!("No historical data available for {symbol}"),
        Ok(bars) => render_csv(&bars),
        Err(e) => format!("Error fetching historical data for {symbol}: {e}"),
    }
}

fn render_csv(bars: &[Bar]) -> String {
    let mut lines = Vec::with_capacity(bars.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for bar in bars {
        lines.push(format!(
            "{},{},{},{},{},{}",
            bar.timestamp.format("%Y-%m-%d"),
            bar.open,
            bar.high,
            bar.low,
            bar.close,
            bar.volume
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarketError;
    use crate::provider::{MockMarketData, bar};
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_csv_header_and_row_count() {
        let mut provider = MockMarketData::new();
        provider
            .expect_history()
            .with(eq("AAPL"), eq("1mo"))
            .returning(|_, _| Ok(vec![bar(2, 100.0), bar(1, 101.5), bar(0, 99.25)]));

        let csv = history_csv(&provider, "AAPL", "1mo").await;
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Date,Open,High,Low,Close,Volume");
        assert_eq!(lines.len(), 4);
    }

    #[tokio::test]
    async fn test_rows_keep_provider_order() {
        let mut provider = MockMarketData::new();
        provider
            .expect_history()
            .returning(|_, _| Ok(vec![bar(2, 100.0), bar(1, 101.5), bar(0, 99.25)]));

        let csv = history_csv(&provider, "AAPL", "5d").await;
        let closes: Vec<&str> = csv
            .lines()
            .skip(1)
            .map(|line| line.split(',').nth(4).unwrap())
            .collect();

        assert_eq!(closes, vec!["100", "101.5", "99.25"]);
    }

    #[tokio::test]
    async fn test_row_shape() {
        let mut provider = MockMarketData::new();
        provider
            .expect_history()
            .returning(|_, _| Ok(vec![bar(0, 99.25)]));

        let csv = history_csv(&provider, "AAPL", "1d").await;
        let row = csv.lines().nth(1).unwrap();

        assert_eq!(row.split(',').count(), 6);
        assert!(row.ends_with(",1000"));
    }

    #[tokio::test]
    async fn test_empty_series_sentence() {
        let mut provider = MockMarketData::new();
        provider.expect_history().returning(|_, _| Ok(Vec::new()));

        let csv = history_csv(&provider, "GONE", "1mo").await;
        assert_eq!(csv, "No historical data available for GONE");
    }

    #[tokio::test]
    async fn test_provider_failure_sentence() {
        let mut provider = MockMarketData::new();
        provider
            .expect_history()
            .returning(|_, _| Err(MarketError::Yahoo("bad range".to_string())));

        let csv = history_csv(&provider, "AAPL", "99y").await;
        assert_eq!(
            csv,
            "Error fetching historical data for AAPL: Yahoo Finance error: bad range"
        );
    }
}
