//! Market data provider abstraction

use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One OHLCV row of a price series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Provider seam for market data
///
/// Period tokens are opaque to this trait and forwarded to the provider
/// as-is; row ordering is whatever the provider returned.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketData: Send + Sync {
    /// Fetch the most recent single trading day of history
    async fn latest_day(&self, symbol: &str) -> Result<Vec<Bar>>;

    /// Fetch history over a provider-defined period token (e.g. "1mo")
    async fn history(&self, symbol: &str, period: &str) -> Result<Vec<Bar>>;

    /// Fetch the provider's `regularMarketPrice` field, when present
    async fn market_price(&self, symbol: &str) -> Result<Option<f64>>;
}

#[cfg(test)]
pub(crate) fn bar(days_ago: i64, close: f64) -> Bar {
    // Deterministic timestamps for test series: midnight UTC, N days back
    // from a fixed date.
    let base = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
    Bar {
        timestamp: base - chrono::Duration::days(days_ago),
        open: close - 1.0,
        high: close + 1.0,
        low: close - 2.0,
        close,
        volume: 1_000,
    }
}
