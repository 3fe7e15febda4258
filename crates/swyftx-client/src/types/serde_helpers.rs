/*
[INPUT]:  Loosely typed JSON decimals (strings, numbers, null, "")
[OUTPUT]: rust_decimal values with zero as the absent default
[POS]:    Data layer - serde adapters shared by payload types
[UPDATE]: When Swyftx changes how it encodes amounts
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;
use std::str::FromStr;

/// Serialize as a JSON string, read from string or number
pub mod decimal_str {
    use super::*;

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        rust_decimal::serde::str::serialize(value, serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_decimal_or_zero(deserializer)
    }
}

/// Serialize as a JSON number carrying the exact decimal digits, read from string or number
pub mod decimal_num {
    use super::*;

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        rust_decimal::serde::arbitrary_precision::serialize(value, serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_decimal_or_zero(deserializer)
    }
}

pub fn deserialize_decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(Decimal::ZERO);
    }

    if let Some(raw) = value.as_str() {
        if raw.trim().is_empty() {
            return Ok(Decimal::ZERO);
        }
        return Decimal::from_str(raw.trim()).map_err(serde::de::Error::custom);
    }

    if value.is_number() {
        let raw = value.to_string();
        return Decimal::from_str(&raw)
            .or_else(|_| Decimal::from_scientific(&raw))
            .map_err(serde::de::Error::custom);
    }

    Err(serde::de::Error::custom("invalid decimal value"))
}
