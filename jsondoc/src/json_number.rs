// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

use crate::int_parser::{from_ascii_i64, from_ascii_u64};

/// A parsed JSON number in the narrowest lossless representation.
///
/// This is the numeric view handed out by [`Value::as_number`](crate::Value::as_number):
/// it keeps integers and floating point values apart so that callers never
/// lose precision by accident.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JsonNumber {
    /// Integer literal that fits in `i64`.
    Int(i64),
    /// Positive integer literal above `i64::MAX` that fits in `u64`.
    ///
    /// Only produced when the parser is configured with
    /// [`ParserConfig::big_integers_as_u64`](crate::ParserConfig::big_integers_as_u64).
    UInt(u64),
    /// Literal with a fraction or exponent, or an integer too large for the
    /// integer variants.
    Float(f64),
}

impl JsonNumber {
    /// Classify a literal that already passed the JSON number grammar.
    ///
    /// `is_integer` tells whether the literal has neither a fraction nor an
    /// exponent.
    pub(crate) fn from_literal(bytes: &[u8], is_integer: bool, big_as_u64: bool) -> Self {
        if is_integer {
            if let Ok(val) = from_ascii_i64(bytes) {
                return JsonNumber::Int(val);
            }
            if big_as_u64 {
                if let Ok(val) = from_ascii_u64(bytes) {
                    return JsonNumber::UInt(val);
                }
            }
        }
        JsonNumber::Float(parse_float(bytes))
    }

    /// True for `Int` and `UInt`.
    pub fn is_integer(&self) -> bool {
        matches!(self, JsonNumber::Int(_) | JsonNumber::UInt(_))
    }

    /// True for `Float`.
    pub fn is_float(&self) -> bool {
        matches!(self, JsonNumber::Float(_))
    }

    /// The value as `i64` if it is stored as an integer that fits.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            JsonNumber::Int(val) => Some(val),
            JsonNumber::UInt(val) => i64::try_from(val).ok(),
            JsonNumber::Float(_) => None,
        }
    }

    /// The value as `u64` if it is stored as a non-negative integer.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            JsonNumber::Int(val) => u64::try_from(val).ok(),
            JsonNumber::UInt(val) => Some(val),
            JsonNumber::Float(_) => None,
        }
    }

    /// The value as `f64`. Integers beyond 2^53 are rounded.
    pub fn as_f64(&self) -> f64 {
        match *self {
            JsonNumber::Int(val) => val as f64,
            JsonNumber::UInt(val) => val as f64,
            JsonNumber::Float(val) => val,
        }
    }
}

impl core::fmt::Display for JsonNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            JsonNumber::Int(val) => write!(f, "{val}"),
            JsonNumber::UInt(val) => write!(f, "{val}"),
            JsonNumber::Float(val) => write!(f, "{val}"),
        }
    }
}

impl From<i64> for JsonNumber {
    fn from(val: i64) -> Self {
        JsonNumber::Int(val)
    }
}

impl From<u64> for JsonNumber {
    fn from(val: u64) -> Self {
        match i64::try_from(val) {
            Ok(small) => JsonNumber::Int(small),
            Err(_) => JsonNumber::UInt(val),
        }
    }
}

impl From<f64> for JsonNumber {
    fn from(val: f64) -> Self {
        JsonNumber::Float(val)
    }
}

/// Parse a grammar-checked literal with standard double rounding.
/// Out-of-range magnitudes come back as infinities; the caller decides
/// whether those are acceptable.
fn parse_float(bytes: &[u8]) -> f64 {
    // JSON number literals are pure ASCII
    match core::str::from_utf8(bytes) {
        Ok(s) => f64::from_str(s).unwrap_or(f64::NAN),
        Err(_) => f64::NAN,
    }
}
