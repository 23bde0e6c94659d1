//! Custom serde helpers for the legacy Bitstamp serialization formats.
//!
//! The legacy API returns most numbers as JSON strings (decimals are handled
//! by `rust_decimal`'s `serde-with-str` feature) and timestamps as
//! string-encoded integers; these helpers cover the remaining quirks.

use serde::{Deserialize, Deserializer, de};

/// Deserialize a `u64` from either a JSON string (`"1700000000"`) or a bare
/// number (`1700000000`).
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use bitstamp_api_client::types::serde_helpers::u64_from_string;
///
/// #[derive(Deserialize)]
/// struct Timestamped {
///     #[serde(deserialize_with = "u64_from_string")]
///     timestamp: u64,
/// }
///
/// let t: Timestamped = serde_json::from_str(r#"{"timestamp": "1700000000"}"#).unwrap();
/// assert_eq!(t.timestamp, 1700000000);
/// ```
pub fn u64_from_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| de::Error::custom(format!("not an unsigned integer: {n}"))),
        serde_json::Value::String(s) => s.parse().map_err(de::Error::custom),
        other => Err(de::Error::custom(format!(
            "expected an unsigned integer or a string containing one, got {other}"
        ))),
    }
}

/// Deserialize an optional `u64` with the same string-or-number leniency as
/// [`u64_from_string`], mapping JSON `null` to `None`.
pub fn maybe_u64_from_string<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(n) => n
            .as_u64()
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("not an unsigned integer: {n}"))),
        serde_json::Value::String(s) => s.parse().map(Some).map_err(de::Error::custom),
        other => Err(de::Error::custom(format!(
            "expected an unsigned integer, a string containing one, or null, got {other}"
        ))),
    }
}
