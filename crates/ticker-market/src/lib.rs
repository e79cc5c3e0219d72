//! Market data access and stock tools
//!
//! This crate covers the market side of the server:
//!
//! - [`MarketData`]: the provider seam, implemented for Yahoo Finance
//! - [`resolve_price`]: current-price lookup with the info-record fallback
//! - [`history_csv`]: OHLCV history serialized as CSV text
//! - [`compare_prices`]: two-symbol comparison sentence
//! - [`StockResource`]: the `stock://{symbol}` read-style resource
//! - [`tools`]: the `Tool` implementations the server registers
//!
//! Lookups never fail across the tool boundary. A price resolves to a
//! [`PriceResolution`], and the tool layer renders that as either a JSON
//! number or the descriptive sentence the host expects.

pub mod compare;
pub mod error;
pub mod history;
pub mod price;
pub mod provider;
pub mod resource;
pub mod tools;
pub mod yahoo;

pub use compare::compare_prices;
pub use error::{MarketError, Result};
pub use history::{DEFAULT_PERIOD, history_csv};
pub use price::{PriceResolution, resolve_price};
pub use provider::{Bar, MarketData};
pub use resource::StockResource;
pub use yahoo::YahooMarketData;
