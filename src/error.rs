// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type shared by the array, the text buffer and the grid.
//!
//! Every fallible operation validates before it mutates, so an `Err` always
//! means the container is exactly as it was before the call. Variants carry
//! the offending values; [`ArrayError::kind`] collapses them into the four
//! categories callers usually branch on.

use std::fmt;

/// Result alias used throughout the crate.
pub type Result<T, E = ArrayError> = std::result::Result<T, E>;

/// Coarse error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An index or cursor lies outside the live range.
    OutOfRange,
    /// A `(first, last)` pair with `first > last`.
    InvalidRange,
    /// A structurally illegal request.
    InvalidOperation,
    /// Storage could not be obtained. Not recoverable by the container.
    AllocationFailure,
}

/// Error type for container operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// Element access at `index` with only `len` live elements.
    IndexOutOfRange { index: usize, len: usize },
    /// Cursor position outside `[0, bound]`.
    PositionOutOfRange { position: usize, bound: usize },
    /// Removal from an empty container.
    Empty { op: &'static str },
    /// Range whose start lies after its end.
    InvalidRange { first: usize, last: usize },
    /// `resize` below the current length.
    ShrinkBelowLength { requested: usize, len: usize },
    /// Distance requested from a later cursor to an earlier one.
    NegativeDistance { from: usize, to: usize },
    /// Text input with a NUL byte before its end.
    InteriorNul { position: usize },
    /// Grid construction from zero lines.
    EmptyGrid,
    /// Grid line whose width differs from the first line.
    RaggedLine {
        line: usize,
        width: usize,
        expected: usize,
    },
    /// Side-by-side join of grids with different heights.
    HeightMismatch { left: usize, right: usize },
    /// Capacity arithmetic overflowed or the allocator refused.
    AllocationFailure { requested: usize },
}

impl ArrayError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArrayError::IndexOutOfRange { .. }
            | ArrayError::PositionOutOfRange { .. }
            | ArrayError::Empty { .. } => ErrorKind::OutOfRange,
            ArrayError::InvalidRange { .. } => ErrorKind::InvalidRange,
            ArrayError::ShrinkBelowLength { .. }
            | ArrayError::NegativeDistance { .. }
            | ArrayError::InteriorNul { .. }
            | ArrayError::EmptyGrid
            | ArrayError::RaggedLine { .. }
            | ArrayError::HeightMismatch { .. } => ErrorKind::InvalidOperation,
            ArrayError::AllocationFailure { .. } => ErrorKind::AllocationFailure,
        }
    }

    /// Whether a caller can reasonably retry with corrected input.
    pub fn is_recoverable(&self) -> bool {
        self.kind() != ErrorKind::AllocationFailure
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::OutOfRange => "out of range",
            ErrorKind::InvalidRange => "invalid range",
            ErrorKind::InvalidOperation => "invalid operation",
            ErrorKind::AllocationFailure => "allocation failure",
        };
        f.write_str(name)
    }
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for length {}", index, len)
            }
            ArrayError::PositionOutOfRange { position, bound } => {
                write!(f, "position {} outside [0, {}]", position, bound)
            }
            ArrayError::Empty { op } => write!(f, "{} on an empty container", op),
            ArrayError::InvalidRange { first, last } => {
                write!(f, "invalid range: first {} > last {}", first, last)
            }
            ArrayError::ShrinkBelowLength { requested, len } => {
                write!(
                    f,
                    "cannot resize to capacity {} below length {}",
                    requested, len
                )
            }
            ArrayError::NegativeDistance { from, to } => {
                write!(f, "cursor {} precedes cursor {}", to, from)
            }
            ArrayError::InteriorNul { position } => {
                write!(f, "interior NUL byte at position {}", position)
            }
            ArrayError::EmptyGrid => write!(f, "grid needs at least one line"),
            ArrayError::RaggedLine {
                line,
                width,
                expected,
            } => {
                write!(
                    f,
                    "line {} has width {} but the grid width is {}",
                    line, width, expected
                )
            }
            ArrayError::HeightMismatch { left, right } => {
                write!(f, "grid heights differ: {} vs {}", left, right)
            }
            ArrayError::AllocationFailure { requested } => {
                write!(f, "failed to allocate {} slots", requested)
            }
        }
    }
}

impl std::error::Error for ArrayError {}

/// Escalate an error that the caller has no way to receive.
///
/// Operator impls (`+`, `+=`) cannot return a `Result`; the only error they
/// can hit is an allocation failure, which is unrecoverable anyway.
#[cold]
pub(crate) fn unrecoverable(err: ArrayError) -> ! {
    tracing::error!(error = %err, "unrecoverable container error");
    panic!("{}", err)
}
