// SPDX-License-Identifier: Apache-2.0

//! Recursive-descent parser that builds a [`Value`] tree.
//!
//! The parser makes one forward pass over the input with no backtracking.
//! Each grammar rule is a method returning `Result`, and the first error
//! unwinds the whole call: no partial tree escapes. Recursion depth equals
//! container nesting, which [`ParserConfig::max_depth`] bounds.

use alloc::string::String;
use alloc::vec::Vec;

use log::{debug, trace};

use crate::escape_processor::{EscapeError, EscapeProcessor};
use crate::number_parser::{scan_number, NumberSyntaxError};
use crate::parse_error::{ParseError, ParseErrorKind};
use crate::shared::from_utf8;
use crate::slice_input_buffer::SliceInputBuffer;
use crate::{Document, JsonNumber, ParserConfig, Value};

/// Parser state for one call; never shared between calls.
pub(crate) struct TreeParser<'a, 'c> {
    input: SliceInputBuffer<'a>,
    config: &'c ParserConfig,
    depth: usize,
}

impl<'a, 'c> TreeParser<'a, 'c> {
    pub fn new(data: &'a [u8], config: &'c ParserConfig) -> Self {
        Self {
            input: SliceInputBuffer::new(data),
            config,
            depth: 0,
        }
    }

    /// Parse exactly one document, enforcing the trailing data policy.
    pub fn parse_document(mut self) -> Result<Document, ParseError> {
        let result = self.parse_root();
        match &result {
            Ok(document) => debug!(
                "parsed {:?} document from {} of {} bytes",
                document.root().type_of(),
                document.bytes_read(),
                self.input.data().len()
            ),
            Err(err) => debug!("parse failed: {err}"),
        }
        result
    }

    fn parse_root(&mut self) -> Result<Document, ParseError> {
        self.skip_insignificant()?;
        if self.input.is_empty() {
            return Err(self.error_here(
                ParseErrorKind::SyntaxError,
                "no JSON value present in input",
            ));
        }

        let root = self.parse_value()?;
        let bytes_read = self.input.current_pos();

        if !self.config.is_stop_when_done() {
            self.skip_insignificant()?;
            if !self.input.is_empty() {
                return Err(self.error_here(
                    ParseErrorKind::TrailingData,
                    "unexpected content after document",
                ));
            }
        }

        Ok(Document::new(root, bytes_read))
    }

    fn error_at(&self, kind: ParseErrorKind, message: &'static str, offset: usize) -> ParseError {
        ParseError::new(kind, message, self.input.data(), offset)
    }

    fn error_here(&self, kind: ParseErrorKind, message: &'static str) -> ParseError {
        self.error_at(kind, message, self.input.current_pos())
    }

    fn unexpected_end(&self, message: &'static str) -> ParseError {
        self.error_here(ParseErrorKind::SyntaxError, message)
    }

    /// Skip whitespace and, when enabled, comments.
    fn skip_insignificant(&mut self) -> Result<(), ParseError> {
        loop {
            self.input
                .skip_while(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'));
            if !(self.config.is_allow_comments() && self.input.peek() == Some(b'/')) {
                return Ok(());
            }
            self.skip_comment()?;
        }
    }

    fn skip_comment(&mut self) -> Result<(), ParseError> {
        let start = self.input.current_pos();
        match self.input.peek_at(1) {
            Some(b'/') => {
                self.input.advance_by(2);
                self.input.skip_while(|b| b != b'\n');
                Ok(())
            }
            Some(b'*') => {
                self.input.advance_by(2);
                loop {
                    self.input.skip_while(|b| b != b'*');
                    if self.input.is_empty() {
                        return Err(self.error_at(
                            ParseErrorKind::InvalidComment,
                            "unterminated block comment",
                            start,
                        ));
                    }
                    self.input.advance();
                    if self.input.peek() == Some(b'/') {
                        self.input.advance();
                        return Ok(());
                    }
                }
            }
            _ => Err(self.error_at(
                ParseErrorKind::InvalidComment,
                "expected '//' or '/*' comment",
                start,
            )),
        }
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let Some(byte) = self.input.peek() else {
            return Err(self.unexpected_end("unexpected end of input, expected a value"));
        };
        let special_floats = self.config.is_allow_inf_and_nan();

        match byte {
            b'{' => self.parse_object(),
            b'[' => self.parse_array(),
            b'"' => self.parse_string().map(Value::String),
            b't' => self.parse_literal(b"true", Value::Bool(true)),
            b'f' => self.parse_literal(b"false", Value::Bool(false)),
            b'n' if self.input.starts_with(b"null") || !special_floats => {
                self.parse_literal(b"null", Value::Null)
            }
            b'-' | b'+'
                if special_floats
                    && matches!(self.input.peek_at(1), Some(b'I' | b'i' | b'N' | b'n')) =>
            {
                self.parse_special_float()
            }
            b'-' | b'0'..=b'9' | b'.' => self.parse_number(),
            b'n' | b'N' | b'i' | b'I' if special_floats => self.parse_special_float(),
            _ => Err(self.error_here(ParseErrorKind::SyntaxError, "unexpected character")),
        }
    }

    fn parse_literal(&mut self, literal: &[u8], value: Value) -> Result<Value, ParseError> {
        if !self.input.starts_with(literal) {
            return Err(self.error_here(ParseErrorKind::SyntaxError, "invalid literal"));
        }
        self.input.advance_by(literal.len());
        Ok(value)
    }

    /// `NaN`, `Infinity` and `inf`, optionally signed; case-insensitive.
    fn parse_special_float(&mut self) -> Result<Value, ParseError> {
        let start = self.input.current_pos();
        let sign = self.input.peek();
        let negative = sign == Some(b'-');
        if matches!(sign, Some(b'-' | b'+')) {
            self.input.advance();
        }

        let (len, magnitude) = if self.input.starts_with_ignore_ascii_case(b"infinity") {
            (8, f64::INFINITY)
        } else if self.input.starts_with_ignore_ascii_case(b"inf") {
            (3, f64::INFINITY)
        } else if self.input.starts_with_ignore_ascii_case(b"nan") {
            (3, f64::NAN)
        } else {
            return Err(self.error_at(ParseErrorKind::SyntaxError, "invalid literal", start));
        };
        self.input.advance_by(len);

        let value = if negative { -magnitude } else { magnitude };
        Ok(Value::Number(JsonNumber::Float(value)))
    }

    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let span = scan_number(&mut self.input).map_err(|NumberSyntaxError { offset, message }| {
            self.error_at(ParseErrorKind::InvalidNumber, message, offset)
        })?;

        let number = JsonNumber::from_literal(
            span.raw,
            span.is_integer,
            self.config.is_big_integers_as_u64(),
        );
        if let JsonNumber::Float(val) = number {
            if !val.is_finite() && !self.config.is_allow_inf_and_nan() {
                return Err(self.error_at(
                    ParseErrorKind::InvalidNumber,
                    "number out of range",
                    span.start,
                ));
            }
        }
        Ok(Value::Number(number))
    }

    /// Parse a quoted string with the cursor on the opening quote.
    ///
    /// Unescaped runs are validated as UTF-8 and copied in bulk; a run can
    /// never split a multi-byte sequence because it ends on an ASCII `"` or `\`.
    fn parse_string(&mut self) -> Result<String, ParseError> {
        let open = self.input.current_pos();
        self.input.advance();

        let mut out = String::new();
        // High surrogate waiting for its pair, with the offset of its escape
        let mut pending_high: Option<(u32, usize)> = None;

        loop {
            let run_start = self.input.current_pos();
            self.input
                .skip_while(|b| b != b'"' && b != b'\\' && b >= 0x20);
            let run_end = self.input.current_pos();

            if run_end > run_start {
                if let Some((_, escape_at)) = pending_high {
                    return Err(self.unpaired_surrogate(escape_at));
                }
                let run = self
                    .input
                    .slice(run_start, run_end)
                    .map_err(|_| self.unexpected_end("string out of input bounds"))?;
                let text = from_utf8(run).map_err(|valid_up_to| {
                    self.error_at(
                        ParseErrorKind::InvalidUtf8,
                        "invalid UTF-8 in string",
                        run_start.saturating_add(valid_up_to),
                    )
                })?;
                out.push_str(text);
            }

            let Ok(byte) = self.input.consume_byte() else {
                return Err(self.error_at(
                    ParseErrorKind::UnterminatedString,
                    "missing closing quote",
                    open,
                ));
            };

            match byte {
                b'"' => {
                    if let Some((_, escape_at)) = pending_high {
                        return Err(self.unpaired_surrogate(escape_at));
                    }
                    return Ok(out);
                }
                b'\\' => {
                    let escape_at = run_end;
                    pending_high = self.parse_escape(&mut out, escape_at, open, pending_high)?;
                }
                _ => {
                    return Err(self.error_at(
                        ParseErrorKind::UnescapedControlCharacter,
                        "control character must be escaped",
                        run_end,
                    ));
                }
            }
        }
    }

    /// Decode one escape after its backslash, returning the new pending
    /// high surrogate state.
    fn parse_escape(
        &mut self,
        out: &mut String,
        escape_at: usize,
        open: usize,
        pending_high: Option<(u32, usize)>,
    ) -> Result<Option<(u32, usize)>, ParseError> {
        let Ok(escape_char) = self.input.consume_byte() else {
            return Err(self.error_at(
                ParseErrorKind::UnterminatedString,
                "missing closing quote",
                open,
            ));
        };

        if escape_char != b'u' {
            if let Some((_, high_at)) = pending_high {
                return Err(self.unpaired_surrogate(high_at));
            }
            let ch = EscapeProcessor::process_simple_escape(escape_char)
                .map_err(|e| self.escape_error(e, escape_at))?;
            out.push(ch);
            return Ok(None);
        }

        let remaining = self.input.remaining();
        let hex = remaining.get(..4).unwrap_or(remaining);
        if hex.len() < 4 && hex.iter().all(|b| b.is_ascii_hexdigit()) {
            return Err(self.error_at(
                ParseErrorKind::UnterminatedString,
                "missing closing quote",
                open,
            ));
        }

        let (ch, high) =
            EscapeProcessor::process_unicode_escape(hex, pending_high.map(|(high, _)| high))
                .map_err(|e| {
                    let at = match (e, pending_high) {
                        (EscapeError::UnpairedSurrogate, Some((_, high_at))) => high_at,
                        _ => escape_at,
                    };
                    self.escape_error(e, at)
                })?;
        self.input.advance_by(4);

        if let Some(ch) = ch {
            out.push(ch);
        }
        Ok(high.map(|high| (high, escape_at)))
    }

    fn escape_error(&self, error: EscapeError, offset: usize) -> ParseError {
        self.error_at(ParseErrorKind::InvalidEscape, error.message(), offset)
    }

    fn unpaired_surrogate(&self, offset: usize) -> ParseError {
        self.escape_error(EscapeError::UnpairedSurrogate, offset)
    }

    fn enter_container(&mut self, open: u8) -> Result<(), ParseError> {
        if self.depth >= self.config.max_depth() {
            return Err(self.error_here(
                ParseErrorKind::NestingTooDeep,
                "maximum nesting depth exceeded",
            ));
        }
        self.depth += 1;
        trace!(
            "enter '{}' at {} (depth {})",
            open as char,
            self.input.current_pos(),
            self.depth
        );
        self.input.advance();
        Ok(())
    }

    fn exit_container(&mut self, close: u8) {
        trace!(
            "exit '{}' at {} (depth {})",
            close as char,
            self.input.current_pos(),
            self.depth
        );
        self.depth = self.depth.saturating_sub(1);
        self.input.advance();
    }

    /// After a comma: decide whether `close` ends the container here.
    ///
    /// Returns `Ok(true)` for an accepted trailing comma.
    fn trailing_comma(&self, close: u8, comma_at: usize) -> Result<bool, ParseError> {
        if self.input.peek() != Some(close) {
            return Ok(false);
        }
        if self.config.is_allow_trailing_commas() {
            Ok(true)
        } else {
            Err(self.error_at(ParseErrorKind::SyntaxError, "trailing comma", comma_at))
        }
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.enter_container(b'[')?;
        let mut items = Vec::new();

        self.skip_insignificant()?;
        if self.input.peek() == Some(b']') {
            self.exit_container(b']');
            return Ok(Value::Array(items));
        }

        loop {
            self.skip_insignificant()?;
            items.push(self.parse_value()?);
            self.skip_insignificant()?;

            match self.input.peek() {
                Some(b',') => {
                    let comma_at = self.input.current_pos();
                    self.input.advance();
                    self.skip_insignificant()?;
                    if self.trailing_comma(b']', comma_at)? {
                        break;
                    }
                }
                Some(b']') => break,
                Some(_) => {
                    return Err(self.error_here(
                        ParseErrorKind::SyntaxError,
                        "expected ',' or ']' after array element",
                    ))
                }
                None => {
                    return Err(self.unexpected_end("unexpected end of input inside array"))
                }
            }
        }

        self.exit_container(b']');
        Ok(Value::Array(items))
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.enter_container(b'{')?;
        let mut members = Vec::new();

        self.skip_insignificant()?;
        if self.input.peek() == Some(b'}') {
            self.exit_container(b'}');
            return Ok(Value::Object(members));
        }

        loop {
            self.skip_insignificant()?;
            let key = match self.input.peek() {
                Some(b'"') => self.parse_string()?,
                Some(_) => {
                    return Err(
                        self.error_here(ParseErrorKind::SyntaxError, "expected string key")
                    )
                }
                None => {
                    return Err(self.unexpected_end("unexpected end of input inside object"))
                }
            };

            self.skip_insignificant()?;
            match self.input.peek() {
                Some(b':') => self.input.advance(),
                Some(_) => {
                    return Err(self.error_here(
                        ParseErrorKind::SyntaxError,
                        "expected ':' after object key",
                    ))
                }
                None => {
                    return Err(self.unexpected_end("unexpected end of input inside object"))
                }
            }

            self.skip_insignificant()?;
            let value = self.parse_value()?;
            members.push((key, value));
            self.skip_insignificant()?;

            match self.input.peek() {
                Some(b',') => {
                    let comma_at = self.input.current_pos();
                    self.input.advance();
                    self.skip_insignificant()?;
                    if self.trailing_comma(b'}', comma_at)? {
                        break;
                    }
                }
                Some(b'}') => break,
                Some(_) => {
                    return Err(self.error_here(
                        ParseErrorKind::SyntaxError,
                        "expected ',' or '}' after object member",
                    ))
                }
                None => {
                    return Err(self.unexpected_end("unexpected end of input inside object"))
                }
            }
        }

        self.exit_container(b'}');
        Ok(Value::Object(members))
    }
}
