//! Field extraction from the provider's payload.

use crate::json::{self, DecodeError, JsonObject, JsonValue};
use crate::rates::types::ExchangeRate;

/// Key of the nested object carrying the quote.
pub const RATE_SECTION: &str = "Realtime Currency Exchange Rate";

pub const LAST_REFRESHED: &str = "6. Last Refreshed";
pub const FROM_CURRENCY: &str = "1. From_Currency Code";
pub const TO_CURRENCY: &str = "3. To_Currency Code";
pub const BID_PRICE: &str = "8. Bid Price";
pub const ASK_PRICE: &str = "9. Ask Price";

/// Decode a raw upstream body into a record.
pub fn decode_exchange_rate(body: &str) -> Result<ExchangeRate, DecodeError> {
    let root = json::parse_object(body)?;
    extract_exchange_rate(&root)
}

/// Read the five quote fields out of a decoded root object.
pub fn extract_exchange_rate(root: &JsonObject) -> Result<ExchangeRate, DecodeError> {
    let section = match root.get(RATE_SECTION) {
        Some(JsonValue::Object(section)) => section,
        Some(_) => return Err(DecodeError::NotAnObject(RATE_SECTION)),
        None => {
            // provider errors and throttling notes come back as 200s
            tracing::debug!(keys = ?root.keys().collect::<Vec<_>>(), "Rate section missing");
            return Err(DecodeError::MissingField(RATE_SECTION));
        }
    };

    Ok(ExchangeRate {
        time: text_field(section, LAST_REFRESHED)?,
        from_currency: text_field(section, FROM_CURRENCY)?,
        to_currency: text_field(section, TO_CURRENCY)?,
        bid: text_field(section, BID_PRICE)?,
        ask: text_field(section, ASK_PRICE)?,
    })
}

fn text_field(section: &JsonObject, key: &'static str) -> Result<String, DecodeError> {
    match section.get(key) {
        Some(JsonValue::String(s)) => Ok(s.clone()),
        Some(JsonValue::Number(n)) => Ok(n.to_string()),
        Some(_) => Err(DecodeError::UnexpectedType(key)),
        None => Err(DecodeError::MissingField(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
    "Realtime Currency Exchange Rate": {
        "1. From_Currency Code": "USD",
        "2. From_Currency Name": "United States Dollar",
        "3. To_Currency Code": "RUB",
        "4. To_Currency Name": "Russian Ruble",
        "5. Exchange Rate": "90.12340000",
        "6. Last Refreshed": "2024-01-01 12:00:01",
        "7. Time Zone": "UTC",
        "8. Bid Price": "90.12300000",
        "9. Ask Price": "90.12400000"
    }
}"#;

    #[test]
    fn extracts_the_five_fields() {
        let rate = decode_exchange_rate(PAYLOAD).unwrap();
        assert_eq!(
            rate,
            ExchangeRate {
                time: "2024-01-01 12:00:01".into(),
                from_currency: "USD".into(),
                to_currency: "RUB".into(),
                bid: "90.12300000".into(),
                ask: "90.12400000".into(),
            }
        );
    }

    #[test]
    fn surrounding_keys_and_order_do_not_matter() {
        let shuffled = r#"{"Meta": {"a": [1, 2]}, "Realtime Currency Exchange Rate": {
            "9. Ask Price": "2", "extra": "x", "8. Bid Price": "1",
            "3. To_Currency Code": "RUB", "6. Last Refreshed": "t",
            "1. From_Currency Code": "BTC"}, "Trailer": "z"}"#;

        let rate = decode_exchange_rate(shuffled).unwrap();
        assert_eq!(rate.from_currency, "BTC");
        assert_eq!(rate.time, "t");
        assert_eq!(rate.bid, "1");
        assert_eq!(rate.ask, "2");
    }

    #[test]
    fn provider_error_body_is_missing_section() {
        let body = r#"{"Error Message": "Invalid API call."}"#;
        assert_eq!(
            decode_exchange_rate(body),
            Err(DecodeError::MissingField(RATE_SECTION))
        );
    }

    #[test]
    fn missing_field_is_named() {
        let body = PAYLOAD.replace("\"9. Ask Price\"", "\"9. Something Else\"");
        assert_eq!(
            decode_exchange_rate(&body),
            Err(DecodeError::MissingField(ASK_PRICE))
        );
    }

    #[test]
    fn section_must_be_an_object() {
        let body = r#"{"Realtime Currency Exchange Rate": "none"}"#;
        assert_eq!(
            decode_exchange_rate(body),
            Err(DecodeError::NotAnObject(RATE_SECTION))
        );
    }

    #[test]
    fn numeric_field_is_rendered_as_text() {
        let body = PAYLOAD.replace("\"2024-01-01 12:00:01\"", "1704110401");
        let err_or_rate = decode_exchange_rate(&body);
        // 1704110401 fits in i32
        assert_eq!(err_or_rate.unwrap().time, "1704110401");
    }

    #[test]
    fn nested_value_is_unexpected_type() {
        let body = PAYLOAD.replace("\"90.12300000\"", "[\"90\"]");
        assert_eq!(
            decode_exchange_rate(&body),
            Err(DecodeError::UnexpectedType(BID_PRICE))
        );
    }
}
