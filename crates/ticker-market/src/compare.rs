//! Two-symbol price comparison

use crate::price::resolve_price;
use crate::provider::MarketData;

/// Compare the current prices of two symbols
///
/// Both symbols resolve concurrently. When either resolution is
/// non-numeric the result is a combined error sentence naming both
/// symbols; otherwise the sentence ranks the two prices, formatted to two
/// decimal places.
pub async fn compare_prices(provider: &dyn MarketData, symbol1: &str, symbol2: &str) -> String {
    let (first, second) = futures::join!(
        resolve_price(provider, symbol1),
        resolve_price(provider, symbol2)
    );

    match (first.price(), second.price()) {
        (Some(price1), Some(price2)) => {
            if price1 > price2 {
                format!("{symbol1} ${price1:.2} is higher than {symbol2} ${price2:.2}.")
            } else if price1 < price2 {
                format!("{symbol1} ${price1:.2} is lower than {symbol2} ${price2:.2}.")
            } else {
                format!("Both {symbol1} and {symbol2} have the same price ${price1:.2}.")
            }
        }
        _ => format!(
            "Error: Could not retrieve data for comparison of '{symbol1}' and '{symbol2}'."
        ),
    }
}
