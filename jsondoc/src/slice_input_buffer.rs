// SPDX-License-Identifier: Apache-2.0

/// Error type for SliceInputBuffer operations.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Reached the end of input data.
    ReachedEnd,
    /// Invalid slice bounds provided.
    InvalidSliceBounds,
}

/// A forward-only cursor over the parser input.
/// This encapsulates the data slice and position that are always used together.
#[derive(Debug)]
pub struct SliceInputBuffer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceInputBuffer<'a> {
    /// Creates a new SliceInputBuffer with the given data.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn current_pos(&self) -> usize {
        self.pos
    }

    /// The complete input, used for error positions.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// The byte under the cursor, if any.
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// The byte `ahead` positions past the cursor, if any.
    pub fn peek_at(&self, ahead: usize) -> Option<u8> {
        self.data.get(self.pos.checked_add(ahead)?).copied()
    }

    /// Move the cursor forward by one byte, saturating at the end.
    pub fn advance(&mut self) {
        self.advance_by(1);
    }

    /// Move the cursor forward by `count` bytes, saturating at the end.
    pub fn advance_by(&mut self, count: usize) {
        self.pos = self.pos.saturating_add(count).min(self.data.len());
    }

    pub fn consume_byte(&mut self) -> Result<u8, Error> {
        let byte = self.peek().ok_or(Error::ReachedEnd)?;
        self.advance();
        Ok(byte)
    }

    /// Everything from the cursor to the end of input.
    pub fn remaining(&self) -> &'a [u8] {
        self.data.get(self.pos..).unwrap_or(&[])
    }

    /// Gets a slice of the data from start to end positions, with bounds checking.
    pub fn slice(&self, start: usize, end: usize) -> Result<&'a [u8], Error> {
        self.data.get(start..end).ok_or(Error::InvalidSliceBounds)
    }

    /// Whether the remaining input begins with `literal`.
    pub fn starts_with(&self, literal: &[u8]) -> bool {
        self.remaining().starts_with(literal)
    }

    /// Whether the remaining input begins with `literal`, ignoring ASCII case.
    pub fn starts_with_ignore_ascii_case(&self, literal: &[u8]) -> bool {
        self.remaining()
            .get(..literal.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(literal))
    }

    /// Advance past every byte matching `pred`, returning how many were skipped.
    pub fn skip_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let skipped = self.remaining().iter().take_while(|&&b| pred(b)).count();
        self.advance_by(skipped);
        skipped
    }
}
