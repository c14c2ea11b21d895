// SPDX-License-Identifier: Apache-2.0

use crate::shared::Position;

/// Category of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Unexpected byte or token, including empty input and trailing commas.
    SyntaxError,
    /// Input ended before the closing quote of a string.
    UnterminatedString,
    /// Unknown escape character, bad `\u` hex digits or an unpaired surrogate.
    InvalidEscape,
    /// Number literal that does not follow the JSON number grammar.
    InvalidNumber,
    /// Non-whitespace bytes after the root value.
    TrailingData,
    /// Containers nested deeper than the configured maximum.
    NestingTooDeep,
    /// Raw control character (below 0x20) inside a string.
    UnescapedControlCharacter,
    /// String content that is not valid UTF-8.
    InvalidUtf8,
    /// Malformed or unterminated comment (only when comments are allowed).
    InvalidComment,
}

impl ParseErrorKind {
    /// Short lowercase description used in `Display`.
    pub const fn as_str(self) -> &'static str {
        match self {
            ParseErrorKind::SyntaxError => "syntax error",
            ParseErrorKind::UnterminatedString => "unterminated string",
            ParseErrorKind::InvalidEscape => "invalid escape",
            ParseErrorKind::InvalidNumber => "invalid number",
            ParseErrorKind::TrailingData => "trailing data",
            ParseErrorKind::NestingTooDeep => "nesting too deep",
            ParseErrorKind::UnescapedControlCharacter => "unescaped control character",
            ParseErrorKind::InvalidUtf8 => "invalid UTF-8",
            ParseErrorKind::InvalidComment => "invalid comment",
        }
    }
}

/// Error returned when the input is not an acceptable JSON document.
///
/// Parsing stops at the first error; no partial tree is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: ParseErrorKind,
    position: Position,
    message: &'static str,
}

impl ParseError {
    pub(crate) fn new(
        kind: ParseErrorKind,
        message: &'static str,
        input: &[u8],
        offset: usize,
    ) -> Self {
        Self {
            kind,
            position: Position::locate(input, offset),
            message,
        }
    }

    /// The error category.
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Byte offset of the offending input.
    pub fn offset(&self) -> usize {
        self.position.offset
    }

    /// 1-based line of the offending input.
    pub fn line(&self) -> usize {
        self.position.line
    }

    /// 1-based byte column of the offending input.
    pub fn column(&self) -> usize {
        self.position.column
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Human-readable detail, e.g. `"trailing comma"`.
    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: {} at line {} column {} (byte {})",
            self.kind.as_str(),
            self.message,
            self.position.line,
            self.position.column,
            self.position.offset
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_carries_position() {
        let input = b"[1,\n 2,]";
        let error = ParseError::new(ParseErrorKind::SyntaxError, "trailing comma", input, 6);
        assert_eq!(error.kind(), ParseErrorKind::SyntaxError);
        assert_eq!(error.offset(), 6);
        assert_eq!(error.line(), 2);
        assert_eq!(error.column(), 3);
        assert_eq!(error.message(), "trailing comma");
    }

    #[test]
    fn test_display_format() {
        let error = ParseError::new(
            ParseErrorKind::TrailingData,
            "unexpected content after document",
            b"{} x",
            3,
        );
        assert_eq!(
            error.to_string(),
            "trailing data: unexpected content after document at line 1 column 4 (byte 3)"
        );
    }

    #[test]
    fn test_kind_names_are_distinct() {
        let kinds = [
            ParseErrorKind::SyntaxError,
            ParseErrorKind::UnterminatedString,
            ParseErrorKind::InvalidEscape,
            ParseErrorKind::InvalidNumber,
            ParseErrorKind::TrailingData,
            ParseErrorKind::NestingTooDeep,
            ParseErrorKind::UnescapedControlCharacter,
            ParseErrorKind::InvalidUtf8,
            ParseErrorKind::InvalidComment,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in kinds.iter().skip(i + 1) {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }
}
