/*
[INPUT]:  Fractional Unix-epoch seconds as JSON numbers or numeric strings
[OUTPUT]: SwyftxTime wrapping a UTC instant
[POS]:    Data layer - timestamp codec used by response records
[UPDATE]: When Swyftx changes its timestamp encoding
*/

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use chrono::{DateTime, TimeZone, Utc};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// Instant decoded from Swyftx's fractional epoch-seconds encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SwyftxTime(pub DateTime<Utc>);

impl SwyftxTime {
    pub fn from_unix(secs: i64, nanos: u32) -> Option<Self> {
        Utc.timestamp_opt(secs, nanos).single().map(Self)
    }

    /// Build from float seconds, splitting integer and fractional parts
    pub fn from_unix_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let secs = value.floor();
        let mut nanos = ((value - secs) * NANOS_PER_SEC as f64).round() as i64;
        let mut secs = secs as i64;
        if nanos >= NANOS_PER_SEC {
            secs += 1;
            nanos -= NANOS_PER_SEC;
        }
        Self::from_unix(secs, nanos as u32)
    }

    pub fn into_inner(self) -> DateTime<Utc> {
        self.0
    }
}

impl Default for SwyftxTime {
    fn default() -> Self {
        Self(DateTime::<Utc>::UNIX_EPOCH)
    }
}

impl Deref for SwyftxTime {
    type Target = DateTime<Utc>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<DateTime<Utc>> for SwyftxTime {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

/// Error parsing a textual epoch timestamp
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid swyftx timestamp: {0:?}")]
pub struct ParseTimeError(String);

impl FromStr for SwyftxTime {
    type Err = ParseTimeError;

    /// Parse decimal seconds exactly; digits past nanosecond precision are truncated.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseTimeError(raw.to_string());
        let trimmed = raw.trim();

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (unsigned, ""),
        };

        let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (int_part.is_empty() && frac_part.is_empty()) || !is_digits(int_part) || !is_digits(frac_part)
        {
            // exponent forms and the like
            return trimmed
                .parse::<f64>()
                .ok()
                .and_then(Self::from_unix_f64)
                .ok_or_else(invalid);
        }

        let secs: i64 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| invalid())?
        };
        let mut nanos: i64 = 0;
        for (i, digit) in frac_part.bytes().take(9).enumerate() {
            nanos += i64::from(digit - b'0') * 10_i64.pow(8 - i as u32);
        }

        let (secs, nanos) = if negative && nanos > 0 {
            (-secs - 1, NANOS_PER_SEC - nanos)
        } else if negative {
            (-secs, 0)
        } else {
            (secs, nanos)
        };

        Self::from_unix(secs, nanos as u32).ok_or_else(invalid)
    }
}

impl fmt::Display for SwyftxTime {
    /// Epoch seconds with the fractional part trimmed of trailing zeros
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.0.timestamp();
        let nanos = self.0.timestamp_subsec_nanos();
        if nanos == 0 {
            return write!(f, "{secs}");
        }
        let frac = format!("{nanos:09}");
        write!(f, "{secs}.{}", frac.trim_end_matches('0'))
    }
}

impl Serialize for SwyftxTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SwyftxTime {
    /// Numbers are parsed from their JSON text.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Number(number) => number.to_string().parse().map_err(de::Error::custom),
            Value::String(raw) => raw.parse().map_err(de::Error::custom),
            other => Err(de::Error::custom(format!(
                "expected unix seconds as a number or numeric string, found {other}"
            ))),
        }
    }
}
