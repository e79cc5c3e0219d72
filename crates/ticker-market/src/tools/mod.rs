//! Tool implementations for the market operations

pub mod compare;
pub mod history;
pub mod price;

pub use compare::CompareStocksTool;
pub use history::PriceHistoryTool;
pub use price::StockPriceTool;

use ticker_core::{Error, Result};

/// Validate a symbol argument: trimmed and non-empty
///
/// Anything further (casing, listing status) is the provider's concern.
fn checked_symbol(raw: &str, field: &str) -> Result<String> {
    let symbol = raw.trim();
    if symbol.is_empty() {
        return Err(Error::InvalidParams(format!("{field} must not be empty")));
    }
    Ok(symbol.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_symbol() {
        assert_eq!(checked_symbol("  AAPL ", "symbol").unwrap(), "AAPL");
        assert!(checked_symbol("   ", "symbol").is_err());
    }
}
