// SPDX-License-Identifier: Apache-2.0

use crate::parser::TreeParser;
use crate::{ParseError, ParserConfig, Value};

/// The result of one parse call: the root value plus read statistics.
///
/// Dropping a `Document` releases the whole tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
    bytes_read: usize,
}

impl Document {
    pub(crate) fn new(root: Value, bytes_read: usize) -> Self {
        Self { root, bytes_read }
    }

    /// Parse `input` with the default strict configuration.
    pub fn parse(input: &[u8]) -> Result<Self, ParseError> {
        Self::parse_with_config(input, &ParserConfig::default())
    }

    /// Parse `input` with an explicit configuration.
    pub fn parse_with_config(input: &[u8], config: &ParserConfig) -> Result<Self, ParseError> {
        TreeParser::new(input, config).parse_document()
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn into_root(self) -> Value {
        self.root
    }

    /// Offset just past the root value.
    ///
    /// Equals the input length for a normal parse (minus trailing
    /// whitespace); with [`ParserConfig::stop_when_done`] it marks where the
    /// next document may begin.
    pub fn bytes_read(&self) -> usize {
        self.bytes_read
    }
}

#[cfg(feature = "std")]
pub use self::file::{read_file, read_file_with_config, ReadError};

#[cfg(feature = "std")]
mod file {
    use std::path::Path;

    use super::Document;
    use crate::{ParseError, ParserConfig};

    /// Failure to load a document from disk.
    #[derive(Debug)]
    pub enum ReadError {
        /// The file could not be opened or read.
        Io(std::io::Error),
        /// The file contents are not an acceptable document.
        Parse(ParseError),
    }

    impl core::fmt::Display for ReadError {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            match self {
                ReadError::Io(e) => write!(f, "failed to read file: {e}"),
                ReadError::Parse(e) => write!(f, "{e}"),
            }
        }
    }

    impl std::error::Error for ReadError {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            match self {
                ReadError::Io(e) => Some(e),
                ReadError::Parse(e) => Some(e),
            }
        }
    }

    impl From<std::io::Error> for ReadError {
        fn from(err: std::io::Error) -> Self {
            ReadError::Io(err)
        }
    }

    impl From<ParseError> for ReadError {
        fn from(err: ParseError) -> Self {
            ReadError::Parse(err)
        }
    }

    /// Read a whole file and parse it with the default configuration.
    pub fn read_file(path: impl AsRef<Path>) -> Result<Document, ReadError> {
        read_file_with_config(path, &ParserConfig::default())
    }

    /// Read a whole file and parse it with `config`.
    pub fn read_file_with_config(
        path: impl AsRef<Path>,
        config: &ParserConfig,
    ) -> Result<Document, ReadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        log::debug!("read {} bytes from {}", bytes.len(), path.display());
        Ok(Document::parse_with_config(&bytes, config)?)
    }
}
