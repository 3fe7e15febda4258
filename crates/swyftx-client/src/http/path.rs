/*
[INPUT]:  Fixed endpoint segments and caller identifiers
[OUTPUT]: Relative request paths and identifier checks
[POS]:    HTTP layer - path helpers shared by resource services
[UPDATE]: When identifier rules change
*/

use crate::http::{Result, SwyftxError};

/// Concatenate segments verbatim. Identifiers are not URL encoded.
pub(crate) fn build(segments: &[&str]) -> String {
    segments.concat()
}

/// Fail with [`SwyftxError::MissingIdentifier`] when `value` is empty
pub(crate) fn require<'a>(value: &'a str, name: &'static str) -> Result<&'a str> {
    if value.is_empty() {
        Err(SwyftxError::missing(name))
    } else {
        Ok(value)
    }
}
