// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Random-access cursor into a [`DynamicArray`].
//!
//! A cursor is a position handle: an index plus the identity of the array
//! that handed it out. It never borrows the array, so it can be held across
//! mutations the way a raw pointer can. Unlike a raw pointer, a stale or
//! out-of-range cursor is caught by the next operation that uses it and
//! reported as [`ArrayError::PositionOutOfRange`] or
//! [`ArrayError::IndexOutOfRange`].
//!
//! Comparison only looks at the index. Comparing cursors of two different
//! arrays gives a meaningless answer; array operations that accept a cursor
//! assert its origin in debug builds (see `verify::contracts`).

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use super::DynamicArray;
use crate::error::{ArrayError, Result};

static NEXT_ARRAY_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one array's buffer, carried by the cursors it hands out.
///
/// Copies get a fresh identity. Moves carry the identity to the destination
/// and hand the emptied source a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArrayId(u64);

impl ArrayId {
    pub(crate) fn fresh() -> Self {
        ArrayId(NEXT_ARRAY_ID.fetch_add(1, AtomicOrdering::Relaxed))
    }
}

/// Position handle into a [`DynamicArray<T>`].
pub struct Cursor<T> {
    index: usize,
    origin: ArrayId,
    _marker: PhantomData<fn() -> T>,
}

// Manual impls: derives would demand `T: Clone`/`T: Copy`.
impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<T> {}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("origin", &self.origin)
            .finish()
    }
}

impl<T> Cursor<T> {
    pub(crate) fn new(index: usize, origin: ArrayId) -> Self {
        Self {
            index,
            origin,
            _marker: PhantomData,
        }
    }

    /// Offset from the start of the array.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Identity of the array this cursor came from.
    pub fn origin(&self) -> ArrayId {
        self.origin
    }

    /// Cursor `n` positions further. Unchecked, like pointer arithmetic.
    #[must_use]
    pub fn advance(self, n: usize) -> Self {
        Self::new(self.index.wrapping_add(n), self.origin)
    }

    /// Cursor `n` positions back. Unchecked, like pointer arithmetic.
    #[must_use]
    pub fn retreat(self, n: usize) -> Self {
        Self::new(self.index.wrapping_sub(n), self.origin)
    }

    /// Move one position forward.
    pub fn increment(&mut self) -> &mut Self {
        self.index = self.index.wrapping_add(1);
        self
    }

    /// Move one position back.
    pub fn decrement(&mut self) -> &mut Self {
        self.index = self.index.wrapping_sub(1);
        self
    }

    /// Number of elements from `self` up to `other`.
    ///
    /// Only forward distances are legal: fails with
    /// [`ArrayError::NegativeDistance`] when `other` precedes `self`.
    pub fn distance_to(&self, other: &Self) -> Result<usize> {
        if other.index < self.index {
            return Err(ArrayError::NegativeDistance {
                from: self.index,
                to: other.index,
            });
        }
        Ok(other.index - self.index)
    }

    /// Element under the cursor.
    pub fn dereference<'a>(&self, array: &'a DynamicArray<T>) -> Result<&'a T> {
        crate::verify::contracts::check_cursor_origin(self, array.id());
        array.at(self.index)
    }

    /// Mutable element under the cursor.
    pub fn dereference_mut<'a>(&self, array: &'a mut DynamicArray<T>) -> Result<&'a mut T> {
        crate::verify::contracts::check_cursor_origin(self, array.id());
        array.at_mut(self.index)
    }
}

impl<T> PartialEq for Cursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for Cursor<T> {}

impl<T> PartialOrd for Cursor<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Cursor<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}
