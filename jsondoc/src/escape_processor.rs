// SPDX-License-Identifier: Apache-2.0

/// Why an escape sequence was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EscapeError {
    /// Character after the backslash is not a JSON escape.
    InvalidEscapeSequence,
    /// `\u` not followed by four hex digits.
    InvalidUnicodeHex,
    /// High surrogate without a following low surrogate, or the reverse.
    UnpairedSurrogate,
}

impl EscapeError {
    pub(crate) const fn message(self) -> &'static str {
        match self {
            EscapeError::InvalidEscapeSequence => "invalid escape sequence",
            EscapeError::InvalidUnicodeHex => "expected four hex digits after \\u",
            EscapeError::UnpairedSurrogate => "unpaired UTF-16 surrogate in \\u escape",
        }
    }
}

/// Pure helpers for decoding JSON escape sequences.
pub(crate) struct EscapeProcessor;

impl EscapeProcessor {
    /// Process a simple escape sequence character and return the unescaped character.
    ///
    /// # Arguments
    /// * `escape_char` - The byte following the backslash
    ///
    /// `u` is not a simple escape and is rejected here.
    pub fn process_simple_escape(escape_char: u8) -> Result<char, EscapeError> {
        match escape_char {
            b'n' => Ok('\n'),
            b't' => Ok('\t'),
            b'r' => Ok('\r'),
            b'\\' => Ok('\\'),
            b'"' => Ok('"'),
            b'/' => Ok('/'),
            b'b' => Ok('\u{08}'), // Backspace
            b'f' => Ok('\u{0C}'), // Form feed
            _ => Err(EscapeError::InvalidEscapeSequence),
        }
    }

    /// Numeric value (0-15) of a hexadecimal digit.
    pub fn validate_hex_digit(byte: u8) -> Result<u32, EscapeError> {
        match byte {
            b'0'..=b'9' => Ok(u32::from(byte - b'0')),
            b'a'..=b'f' => Ok(u32::from(byte - b'a') + 10),
            b'A'..=b'F' => Ok(u32::from(byte - b'A') + 10),
            _ => Err(EscapeError::InvalidUnicodeHex),
        }
    }

    /// Decode the four hex digits of a `\uXXXX` escape into a UTF-16 code unit.
    pub fn decode_hex4(hex_slice: &[u8]) -> Result<u32, EscapeError> {
        if hex_slice.len() != 4 {
            return Err(EscapeError::InvalidUnicodeHex);
        }
        hex_slice.iter().try_fold(0u32, |acc, &byte| {
            Ok((acc << 4) | Self::validate_hex_digit(byte)?)
        })
    }

    /// Check if a code unit is a high surrogate (0xD800-0xDBFF)
    pub fn is_high_surrogate(codepoint: u32) -> bool {
        (0xD800..=0xDBFF).contains(&codepoint)
    }

    /// Check if a code unit is a low surrogate (0xDC00-0xDFFF)
    pub fn is_low_surrogate(codepoint: u32) -> bool {
        (0xDC00..=0xDFFF).contains(&codepoint)
    }

    /// Combine a high and low surrogate pair into a single Unicode codepoint
    pub fn combine_surrogate_pair(high: u32, low: u32) -> Result<u32, EscapeError> {
        if !Self::is_high_surrogate(high) || !Self::is_low_surrogate(low) {
            return Err(EscapeError::UnpairedSurrogate);
        }
        Ok(0x10000 + ((high & 0x3FF) << 10) + (low & 0x3FF))
    }

    /// Process one `\uXXXX` escape with surrogate pair support.
    ///
    /// Returns the decoded character, or `None` together with the high
    /// surrogate to hold when the escape opens a pair. A pending high
    /// surrogate must be completed by the very next escape.
    pub fn process_unicode_escape(
        hex_slice: &[u8],
        pending_high_surrogate: Option<u32>,
    ) -> Result<(Option<char>, Option<u32>), EscapeError> {
        let codepoint = Self::decode_hex4(hex_slice)?;

        match pending_high_surrogate {
            Some(high) => {
                let combined = Self::combine_surrogate_pair(high, codepoint)?;
                let ch = char::from_u32(combined).ok_or(EscapeError::UnpairedSurrogate)?;
                Ok((Some(ch), None))
            }
            None if Self::is_high_surrogate(codepoint) => Ok((None, Some(codepoint))),
            None if Self::is_low_surrogate(codepoint) => Err(EscapeError::UnpairedSurrogate),
            None => {
                let ch = char::from_u32(codepoint).ok_or(EscapeError::UnpairedSurrogate)?;
                Ok((Some(ch), None))
            }
        }
    }
}
