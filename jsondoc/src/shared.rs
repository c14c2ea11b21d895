// SPDX-License-Identifier: Apache-2.0

//! Shared position tracking for parse errors.

/// Location of a byte within the parser input.
///
/// `line` and `column` are 1-based; `column` counts bytes, not characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Byte offset from the start of the input.
    pub offset: usize,
    /// Line number, counting `\n` bytes before `offset`.
    pub line: usize,
    /// Byte column within the line.
    pub column: usize,
}

impl Position {
    /// Compute the line and column of `offset` by counting newlines scanned
    /// so far. Offsets past the end of `input` are clamped for the line
    /// computation but reported unchanged.
    pub fn locate(input: &[u8], offset: usize) -> Self {
        let end = offset.min(input.len());
        let scanned = input.get(..end).unwrap_or(input);
        let line = scanned
            .iter()
            .filter(|&&b| b == b'\n')
            .count()
            .saturating_add(1);
        let line_start = scanned
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |nl| nl.saturating_add(1));
        Self {
            offset,
            line,
            column: end.saturating_sub(line_start).saturating_add(1),
        }
    }
}

/// Validate a run of string bytes, returning the offending byte index on failure.
pub(crate) fn from_utf8(v: &[u8]) -> Result<&str, usize> {
    core::str::from_utf8(v).map_err(|e| e.valid_up_to())
}
