// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debug-mode assertions for the invariants of the array, its cursors, the
//! text buffer and the grid.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract function          | Invariant                                      |
//! |----------------------------|------------------------------------------------|
//! | `check_array_well_formed`  | `len <= capacity`                              |
//! | `check_cursor_origin`      | cursor was handed out by the array it is used on |
//! | `check_terminated`         | exactly one NUL, in the last slot              |
//! | `check_uniform_width`      | every grid line has the grid's width           |

use crate::array::{ArrayId, Cursor, DynamicArray};

// ============================================================================
// ARRAY CONTRACTS
// ============================================================================

/// Check that the live length fits in the buffer.
///
/// # Panics (debug builds only)
/// Panics if `len > capacity`.
#[inline]
pub fn check_array_well_formed<T>(array: &DynamicArray<T>) {
    debug_assert!(
        array.len() <= array.capacity(),
        "Contract violation: DynamicArray.WellFormed - len {} > capacity {}",
        array.len(),
        array.capacity()
    );
}

/// Check that a cursor is used on the array that produced it.
///
/// Comparing or applying a cursor from another array silently addresses the
/// wrong elements; this catches it during development.
///
/// # Panics (debug builds only)
/// Panics if the cursor's origin differs from `array`.
#[inline]
pub fn check_cursor_origin<T>(cursor: &Cursor<T>, array: ArrayId) {
    debug_assert_eq!(
        cursor.origin(),
        array,
        "Contract violation: Cursor.Origin - cursor at {} belongs to {:?}, used on {:?}",
        cursor.index(),
        cursor.origin(),
        array
    );
}

// ============================================================================
// TEXT CONTRACTS
// ============================================================================

/// Check the terminator invariant of a text buffer's raw bytes.
///
/// # Panics (debug builds only)
/// Panics if the last byte is not NUL or a NUL appears earlier.
#[inline]
pub fn check_terminated(raw: &[u8]) {
    debug_assert_eq!(
        raw.last(),
        Some(&0),
        "Contract violation: TextBuffer.Terminated - last byte is {:?}",
        raw.last()
    );
    debug_assert!(
        !raw[..raw.len().saturating_sub(1)].contains(&0),
        "Contract violation: TextBuffer.Terminated - interior NUL at {:?}",
        raw.iter().position(|&b| b == 0)
    );
}

// ============================================================================
// GRID CONTRACTS
// ============================================================================

/// Check that all line widths equal `width`.
///
/// # Panics (debug builds only)
/// Panics at the first line of a different width.
#[inline]
pub fn check_uniform_width<I>(width: usize, line_widths: I)
where
    I: IntoIterator<Item = usize>,
{
    if cfg!(debug_assertions) {
        for (line, actual) in line_widths.into_iter().enumerate() {
            debug_assert_eq!(
                actual, width,
                "Contract violation: TextGrid.Uniform - line {} has width {} (expected {})",
                line, actual, width
            );
        }
    }
}
