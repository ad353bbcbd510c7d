//! Strict parsing of numeric fields.

use crate::error::{Result, VectorError};

/// Parses an `f32` field.
///
/// Fails on any character the float grammar does not accept, and on finite
/// text whose magnitude does not fit in an `f32` (`1e39`). Explicit infinity
/// literals are accepted.
pub(super) fn parse_float(text: &str) -> Result<f32> {
    let value: f32 = text
        .parse()
        .map_err(|e| VectorError::from_float(text, &e))?;
    if value.is_infinite() && !is_infinity_literal(text) {
        return Err(VectorError::NumberOutOfRange(text.to_string()));
    }
    Ok(value)
}

/// Parses an `int4` field.
pub(super) fn parse_int(text: &str) -> Result<i32> {
    text.parse().map_err(|e| VectorError::from_int(text, &e))
}

fn is_infinity_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
