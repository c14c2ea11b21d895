// SPDX-License-Identifier: Apache-2.0

//! A small JSON reader that parses a complete byte slice into an owned,
//! immutable [`Value`] tree.
//!
//! ```
//! let doc = jsondoc::parse(br#"{"title": "T", "entries": [{"title": "x"}]}"#).unwrap();
//! assert_eq!(doc.get("title").and_then(|t| t.as_str().ok()), Some("T"));
//!
//! for entry in doc.get("entries").unwrap().array_iter().unwrap() {
//!     assert_eq!(entry.get("title").unwrap().as_str(), Ok("x"));
//! }
//! ```
//!
//! Errors carry a byte offset and a line/column pair. Access on the tree is
//! checked: asking a string for its array length is an [`AccessError`], not a
//! panic.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

mod access_error;
pub use access_error::AccessError;

mod config;
pub use config::{ParserConfig, DEFAULT_MAX_DEPTH};

mod document;
pub use document::Document;
#[cfg(feature = "std")]
pub use document::{read_file, read_file_with_config, ReadError};

mod escape_processor;

mod int_parser;

mod json_number;
pub use json_number::JsonNumber;

mod number_parser;

mod parse_error;
pub use parse_error::{ParseError, ParseErrorKind};

mod parser;

mod shared;
pub use shared::Position;

mod slice_input_buffer;

mod value;
pub use value::{Kind, Pairs, Value};

/// Parse one complete document with the default strict configuration.
///
/// Leading and trailing whitespace is allowed; anything else after the root
/// value is [`ParseErrorKind::TrailingData`].
pub fn parse(input: &[u8]) -> Result<Value, ParseError> {
    Document::parse(input).map(Document::into_root)
}

/// Parse with an explicit configuration, keeping read statistics.
pub fn parse_with_config(input: &[u8], config: &ParserConfig) -> Result<Document, ParseError> {
    Document::parse_with_config(input, config)
}
