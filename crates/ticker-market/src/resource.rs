//! Stock price as a read-style resource

use crate::price::{PriceResolution, resolve_price};
use crate::provider::MarketData;
use std::sync::Arc;

/// URI template the server advertises for stock price resources
pub const URI_TEMPLATE: &str = "stock://{symbol}";

const URI_PREFIX: &str = "stock://";

/// Presents the resolved price of a symbol as an addressable resource
///
/// Thin facade over [`resolve_price`]: a resolved price is rendered into
/// the presentation sentence, and non-price resolutions pass their own
/// sentence through unchanged.
pub struct StockResource {
    provider: Arc<dyn MarketData>,
}

impl StockResource {
    /// Create a new stock resource over a market data provider
    pub fn new(provider: Arc<dyn MarketData>) -> Self {
        Self { provider }
    }

    /// Extract the symbol from a `stock://{symbol}` URI
    pub fn symbol_from_uri(uri: &str) -> Option<&str> {
        uri.strip_prefix(URI_PREFIX).filter(|rest| !rest.is_empty())
    }

    /// Read the resource for a symbol
    pub async fn read(&self, symbol: &str) -> String {
        match resolve_price(self.provider.as_ref(), symbol).await {
            PriceResolution::Price(price) => {
                format!("The current stock price for {symbol} is ${price:.2}")
            }
            PriceResolution::Unavailable(msg) | PriceResolution::Failed(msg) => msg,
        }
    }
}
