// SPDX-License-Identifier: Apache-2.0

use crate::Kind;

/// Raised when the caller's assumed shape disagrees with the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    /// The value is not of the requested variant.
    TypeMismatch { expected: Kind, found: Kind },
    /// Array index at or past the end.
    IndexOutOfRange { index: usize, len: usize },
}

impl core::fmt::Display for AccessError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AccessError::TypeMismatch { expected, found } => {
                write!(f, "type mismatch: expected {expected}, found {found}")
            }
            AccessError::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for array of length {len}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AccessError {}
