// SPDX-License-Identifier: Apache-2.0

// Checked base-10 parsing over already-validated JSON integer literals.

/// Why an integer literal could not be converted.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ConstParseIntegerError {
    /// The input byte slice was empty.
    Empty,
    /// The input consisted only of a `-` sign.
    SignOnly,
    /// A byte that is not a base-10 digit was found.
    InvalidDigit,
    /// The value does not fit the target integer type.
    Overflow,
}

/// Creates a panic-free, const base-10 parser for an integer type.
///
/// Negative literals are accumulated downwards so that `MIN` round-trips;
/// for unsigned targets any non-zero negative literal reports `Overflow`.
macro_rules! define_const_parser {
    ($fn_name:ident, $int_ty:ty) => {
        /// Parses a byte slice into a(n) `
        #[doc = stringify!($int_ty)]
        /// ` in a `const` context.
        pub const fn $fn_name(src: &[u8]) -> Result<$int_ty, ConstParseIntegerError> {
            let (is_negative, mut digits) = match src {
                [] => return Err(ConstParseIntegerError::Empty),
                [b'-', rest @ ..] => (true, rest),
                _ => (false, src),
            };

            if digits.is_empty() {
                return Err(ConstParseIntegerError::SignOnly);
            }

            let mut result: $int_ty = 0;

            while let Some((&byte, rest)) = digits.split_first() {
                let digit = match byte {
                    b'0'..=b'9' => (byte - b'0') as $int_ty,
                    _ => return Err(ConstParseIntegerError::InvalidDigit),
                };

                result = match result.checked_mul(10) {
                    Some(val) => val,
                    None => return Err(ConstParseIntegerError::Overflow),
                };

                result = if is_negative {
                    match result.checked_sub(digit) {
                        Some(val) => val,
                        None => return Err(ConstParseIntegerError::Overflow),
                    }
                } else {
                    match result.checked_add(digit) {
                        Some(val) => val,
                        None => return Err(ConstParseIntegerError::Overflow),
                    }
                };

                digits = rest;
            }

            Ok(result)
        }
    };
}

define_const_parser!(from_ascii_i64, i64);
define_const_parser!(from_ascii_u64, u64);
