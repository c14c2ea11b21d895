// SPDX-License-Identifier: Apache-2.0

use crate::slice_input_buffer::SliceInputBuffer;

/// A number literal that passed the JSON number grammar.
#[derive(Debug, PartialEq)]
pub struct NumberSpan<'a> {
    /// The literal bytes, sign included.
    pub raw: &'a [u8],
    /// Offset of the first byte of the literal.
    pub start: usize,
    /// No fraction and no exponent.
    pub is_integer: bool,
}

/// Grammar violation inside a number literal.
#[derive(Debug, PartialEq)]
pub struct NumberSyntaxError {
    pub offset: usize,
    pub message: &'static str,
}

impl NumberSyntaxError {
    fn at(offset: usize, message: &'static str) -> Self {
        Self { offset, message }
    }
}

/// Scan `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?` starting at
/// the cursor, leaving the cursor on the first byte after the literal.
///
/// Scanning stops at the first byte that cannot continue the literal; what
/// follows is the caller's business (`1.5.3` scans as `1.5`).
pub fn scan_number<'a>(
    input: &mut SliceInputBuffer<'a>,
) -> Result<NumberSpan<'a>, NumberSyntaxError> {
    let start = input.current_pos();
    let mut is_integer = true;

    if input.peek() == Some(b'-') {
        input.advance();
    }

    match input.peek() {
        Some(b'0') => {
            input.advance();
            if matches!(input.peek(), Some(b'0'..=b'9')) {
                return Err(NumberSyntaxError::at(
                    input.current_pos(),
                    "leading zeros are not allowed",
                ));
            }
        }
        Some(b'1'..=b'9') => {
            input.skip_while(|b| b.is_ascii_digit());
        }
        Some(b'.') => {
            return Err(NumberSyntaxError::at(
                input.current_pos(),
                "missing integer part before decimal point",
            ));
        }
        _ => {
            return Err(NumberSyntaxError::at(
                input.current_pos(),
                "expected digit",
            ));
        }
    }

    if input.peek() == Some(b'.') {
        input.advance();
        is_integer = false;
        if input.skip_while(|b| b.is_ascii_digit()) == 0 {
            return Err(NumberSyntaxError::at(
                input.current_pos(),
                "expected digit after decimal point",
            ));
        }
    }

    if matches!(input.peek(), Some(b'e' | b'E')) {
        input.advance();
        is_integer = false;
        if matches!(input.peek(), Some(b'+' | b'-')) {
            input.advance();
        }
        if input.skip_while(|b| b.is_ascii_digit()) == 0 {
            return Err(NumberSyntaxError::at(
                input.current_pos(),
                "expected digit in exponent",
            ));
        }
    }

    let raw = input
        .slice(start, input.current_pos())
        .map_err(|_| NumberSyntaxError::at(start, "number out of input bounds"))?;

    Ok(NumberSpan {
        raw,
        start,
        is_integer,
    })
}
