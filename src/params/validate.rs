//! Numeric coercion rules for query values

use crate::error::{Error, Result};
use std::num::IntErrorKind;

/// Validate an optional raw query value as a non-negative integer.
///
/// - `None` stays `None` so the caller can supply its own default.
/// - Surrounding whitespace is ignored, but an empty or blank value is
///   [`Error::InvalidNumber`].
/// - Plain integers (`"7"`, `"+7"`), integral decimal or exponent forms
///   (`"5.0"`, `"1e2"`) and `0x`/`0o`/`0b` literals are accepted.
/// - Values beyond `u64::MAX` saturate.
/// - Anything else, including `"true"`, fractions and `Infinity`, is
///   [`Error::InvalidNumber`].
/// - Values below zero are [`Error::NegativeNumber`].
pub fn validate_number(raw: Option<&str>) -> Result<Option<u64>> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_number(raw));
    }

    if let Some(value) = parse_radix_literal(trimmed) {
        return value.map(Some).ok_or_else(|| Error::invalid_number(raw));
    }

    if let Ok(n) = trimmed.parse::<u64>() {
        return Ok(Some(n));
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return if n < 0 {
            Err(Error::negative_number(raw))
        } else {
            Ok(Some(n.unsigned_abs()))
        };
    }

    // Integral floats such as "5.0", "1e2" or integers wider than i64
    let value: f64 = trimmed.parse().map_err(|_| Error::invalid_number(raw))?;
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(Error::invalid_number(raw));
    }
    if value < 0.0 {
        return Err(Error::negative_number(raw));
    }

    // `as` saturates at u64::MAX
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let n = value as u64;
    Ok(Some(n))
}

/// `Some(parsed)` for a `0x`/`0o`/`0b` literal, `None` for any other form.
///
/// The inner `None` marks a literal with bad digits.
fn parse_radix_literal(s: &str) -> Option<Option<u64>> {
    let prefix = s.get(..2)?.to_ascii_lowercase();
    let radix = match prefix.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };

    let digits = &s[2..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Some(None);
    }

    Some(match u64::from_str_radix(digits, radix) {
        Ok(n) => Some(n),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(u64::MAX),
        Err(_) => None,
    })
}
