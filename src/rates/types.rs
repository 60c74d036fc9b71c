//! Exchange-rate record.

use serde::{Deserialize, Serialize};

/// One quote as reported by the upstream provider.
///
/// Every field is kept as the provider's text: `time` is not reparsed and
/// `bid`/`ask` keep their full decimal precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    pub time: String,
    pub from_currency: String,
    pub to_currency: String,
    pub bid: String,
    pub ask: String,
}

/// Wire form served to clients. Field order and the `", "` separators are
/// part of the response format.
impl std::fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            r#"{{"time":"{}", "fromCurrency":"{}", "toCurrency":"{}", "bid":"{}", "ask":"{}"}}"#,
            self.time, self.from_currency, self.to_currency, self.bid, self.ask
        )
    }
}

/// Render records as a JSON array in the given order.
pub fn render_rates(rates: &[ExchangeRate]) -> String {
    let items: Vec<String> = rates.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(","))
}
