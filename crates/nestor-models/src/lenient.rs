//! Lenient numeric deserialization
//!
//! Draft documents in the store can carry cost fields as strings or nulls,
//! or omit them entirely. The read path coerces these to numbers instead of
//! failing the whole document.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a currency/quantity field, coercing non-numeric input to 0.0
pub fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(coerce_f64(Value::deserialize(deserializer)?).unwrap_or(0.0))
}

/// Deserialize an optional numeric field; non-numeric input becomes `None`
pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(coerce_f64(Value::deserialize(deserializer)?))
}

fn coerce_f64(value: Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Line {
        #[serde(default, deserialize_with = "super::opt_f64")]
        quantity: Option<f64>,
        #[serde(default, deserialize_with = "super::f64_or_zero")]
        unit_price: f64,
    }

    #[test]
    fn test_numbers_pass_through() {
        let line: Line = serde_json::from_str(r#"{"quantity": 2, "unitPrice": 10.5}"#).unwrap();
        assert_eq!(line.quantity, Some(2.0));
        assert_eq!(line.unit_price, 10.5);
    }

    #[test]
    fn test_numeric_strings_coerce() {
        let line: Line =
            serde_json::from_str(r#"{"quantity": " 3 ", "unitPrice": "12.5"}"#).unwrap();
        assert_eq!(line.quantity, Some(3.0));
        assert_eq!(line.unit_price, 12.5);
    }

    #[test]
    fn test_garbage_coerces_to_zero() {
        let line: Line =
            serde_json::from_str(r#"{"quantity": "n/a", "unitPrice": null}"#).unwrap();
        assert_eq!(line.quantity, None);
        assert_eq!(line.unit_price, 0.0);
    }

    #[test]
    fn test_missing_fields_default() {
        let line: Line = serde_json::from_str("{}").unwrap();
        assert_eq!(line.quantity, None);
        assert_eq!(line.unit_price, 0.0);
    }
}
