// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Growable contiguous array with checked positional operations.
//!
//! `DynamicArray<T>` owns one boxed buffer of `capacity` slots. The first
//! `len` slots hold live elements; the rest hold `T::default()` filler that
//! is never observable through the API. Growth doubles the capacity, which
//! keeps `append` amortized O(1).
//!
//! # Invariants
//!
//! - `len <= capacity` after every call, successful or not.
//! - Slots `[0, len)` are the elements, in insertion order.
//! - A failed call leaves `len`, `capacity` and every element untouched:
//!   each operation validates all of its inputs before the first write.
//!
//! # Positions
//!
//! Positional operations take [`Cursor`]s obtained from [`begin`] /
//! [`end`]. Insert and erase shift the tail with slice rotations, so
//! overlapping moves cannot clobber elements.
//!
//! [`begin`]: DynamicArray::begin
//! [`end`]: DynamicArray::end

mod cursor;
pub mod growth;
mod iter;

pub use cursor::{ArrayId, Cursor};
pub use iter::{IntoIter, Iter, IterMut};

use std::fmt;
use std::mem;

use crate::error::{unrecoverable, ArrayError, Result};
use crate::verify::contracts;
use growth::{grown_capacity, required_len, INITIAL_CAPACITY};

/// Owned, contiguous, growable array.
pub struct DynamicArray<T> {
    slots: Box<[T]>,
    len: usize,
    id: ArrayId,
}

/// Fresh buffer of `capacity` filler slots.
///
/// Reservation is fallible so that allocator refusal surfaces as
/// [`ArrayError::AllocationFailure`] rather than an abort.
fn allocate_slots<T: Default>(capacity: usize) -> Result<Box<[T]>> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| ArrayError::AllocationFailure {
            requested: capacity,
        })?;
    slots.resize_with(capacity, T::default);
    Ok(slots.into_boxed_slice())
}

fn empty_slots<T>() -> Box<[T]> {
    Vec::new().into_boxed_slice()
}

// ============================================================================
// QUERIES (no bounds on T)
// ============================================================================

impl<T> DynamicArray<T> {
    /// Identity carried by this array's cursors.
    pub fn id(&self) -> ArrayId {
        self.id
    }

    /// Number of live elements.
    pub fn size(&self) -> usize {
        self.len
    }

    /// Alias of [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocated slot count.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.slots[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots[..self.len]
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_slice())
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.as_mut_slice())
    }

    /// Bounds-checked element access.
    pub fn at(&self, index: usize) -> Result<&T> {
        self.as_slice()
            .get(index)
            .ok_or(ArrayError::IndexOutOfRange {
                index,
                len: self.len,
            })
    }

    /// Bounds-checked mutable element access.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ArrayError::IndexOutOfRange { index, len })
    }

    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Cursor at the first element.
    pub fn begin(&self) -> Cursor<T> {
        Cursor::new(0, self.id)
    }

    /// Cursor one past the last element.
    pub fn end(&self) -> Cursor<T> {
        Cursor::new(self.len, self.id)
    }

    /// Cursor at the first element matching `pred`, or [`end`](Self::end).
    pub fn find<P>(&self, pred: P) -> Cursor<T>
    where
        P: FnMut(&T) -> bool,
    {
        let index = self.as_slice().iter().position(pred).unwrap_or(self.len);
        Cursor::new(index, self.id)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(value)
    }

    /// Move the contents out, leaving `self` empty with capacity 0.
    ///
    /// The returned array keeps this array's identity, so cursors taken
    /// before the move stay valid against it. `self` gets a fresh identity.
    #[must_use = "the moved-out contents are dropped if unused"]
    pub fn take(&mut self) -> Self {
        let moved = Self {
            slots: mem::replace(&mut self.slots, empty_slots()),
            len: mem::replace(&mut self.len, 0),
            id: mem::replace(&mut self.id, ArrayId::fresh()),
        };
        tracing::debug!(len = moved.len, capacity = moved.capacity(), "moved array contents");
        contracts::check_array_well_formed(self);
        contracts::check_array_well_formed(&moved);
        moved
    }

    pub(crate) fn into_raw_parts(self) -> (Box<[T]>, usize) {
        (self.slots, self.len)
    }

    /// Index of `position` if it lies in `[0, bound]`.
    fn checked_position(&self, position: Cursor<T>, bound: usize) -> Result<usize> {
        contracts::check_cursor_origin(&position, self.id);
        if position.index() > bound {
            return Err(ArrayError::PositionOutOfRange {
                position: position.index(),
                bound,
            });
        }
        Ok(position.index())
    }

    /// Indices of `[first, last)` if it is ordered and within `[0, len]`.
    fn checked_range(&self, first: Cursor<T>, last: Cursor<T>) -> Result<(usize, usize)> {
        if first > last {
            return Err(ArrayError::InvalidRange {
                first: first.index(),
                last: last.index(),
            });
        }
        let end = self.checked_position(last, self.len)?;
        let start = self.checked_position(first, self.len)?;
        Ok((start, end))
    }
}

// ============================================================================
// MUTATION (growth fills new slots with T::default())
// ============================================================================

impl<T: Default> DynamicArray<T> {
    /// Empty array with capacity 1.
    ///
    /// # Panics
    /// Panics if the allocator refuses the single slot. Use
    /// [`with_capacity`](Self::with_capacity) to get that failure as an error.
    pub fn new() -> Self {
        let slots = allocate_slots(INITIAL_CAPACITY).unwrap_or_else(|err| unrecoverable(err));
        Self {
            slots,
            len: 0,
            id: ArrayId::fresh(),
        }
    }

    /// Empty array with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            slots: allocate_slots(capacity)?,
            len: 0,
            id: ArrayId::fresh(),
        })
    }

    /// `len` default elements; capacity equals `len`.
    pub fn with_len(len: usize) -> Result<Self> {
        Ok(Self {
            slots: allocate_slots(len)?,
            len,
            id: ArrayId::fresh(),
        })
    }

    /// `len` clones of `value`, with twice that capacity.
    pub fn filled(len: usize, value: T) -> Result<Self>
    where
        T: Clone,
    {
        let capacity = len
            .checked_mul(growth::GROWTH_FACTOR)
            .ok_or(ArrayError::AllocationFailure { requested: len })?;
        let mut slots = allocate_slots(capacity)?;
        slots[..len].fill(value);
        Ok(Self {
            slots,
            len,
            id: ArrayId::fresh(),
        })
    }

    /// Move the live elements into a fresh buffer of `new_capacity` slots.
    ///
    /// Callers guarantee `new_capacity >= len`. On allocation failure the
    /// old buffer is kept as is.
    fn reallocate(&mut self, new_capacity: usize) -> Result<()> {
        let mut fresh = allocate_slots(new_capacity)?;
        fresh[..self.len].swap_with_slice(&mut self.slots[..self.len]);
        tracing::trace!(
            from = self.capacity(),
            to = new_capacity,
            len = self.len,
            "reallocated buffer"
        );
        self.slots = fresh;
        Ok(())
    }

    /// Grow by doubling until `required` slots fit, in one reallocation.
    fn ensure_capacity(&mut self, required: usize) -> Result<()> {
        if required > self.capacity() {
            let next = grown_capacity(self.capacity(), required)?;
            self.reallocate(next)?;
        }
        Ok(())
    }

    /// Add `value` after the last element. Amortized O(1).
    pub fn append(&mut self, value: T) -> Result<()> {
        self.ensure_capacity(required_len(self.len, 1)?)?;
        self.slots[self.len] = value;
        self.len += 1;
        contracts::check_array_well_formed(self);
        Ok(())
    }

    /// Add `value` before the first element. O(n).
    pub fn prepend(&mut self, value: T) -> Result<()> {
        self.ensure_capacity(required_len(self.len, 1)?)?;
        self.slots[self.len] = value;
        self.slots[..=self.len].rotate_right(1);
        self.len += 1;
        contracts::check_array_well_formed(self);
        Ok(())
    }

    /// Remove and return the last element.
    pub fn remove_last(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(ArrayError::Empty { op: "remove_last" });
        }
        self.len -= 1;
        let removed = mem::take(&mut self.slots[self.len]);
        contracts::check_array_well_formed(self);
        Ok(removed)
    }

    /// Remove and return the first element. O(n).
    pub fn remove_first(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(ArrayError::Empty { op: "remove_first" });
        }
        let removed = mem::take(&mut self.slots[0]);
        self.slots[..self.len].rotate_left(1);
        self.len -= 1;
        contracts::check_array_well_formed(self);
        Ok(removed)
    }

    /// Insert `value` at `position` (which may be [`end`](Self::end)).
    ///
    /// Returns a cursor to the inserted element.
    pub fn insert_at(&mut self, position: Cursor<T>, value: T) -> Result<Cursor<T>> {
        let index = self.checked_position(position, self.len)?;
        self.ensure_capacity(required_len(self.len, 1)?)?;

        self.slots[self.len] = value;
        self.slots[index..=self.len].rotate_right(1);
        self.len += 1;

        contracts::check_array_well_formed(self);
        Ok(Cursor::new(index, self.id))
    }

    /// Insert clones of `items` at `position`.
    ///
    /// Returns a cursor to the first inserted element.
    pub fn insert_slice(&mut self, position: Cursor<T>, items: &[T]) -> Result<Cursor<T>>
    where
        T: Clone,
    {
        let index = self.checked_position(position, self.len)?;
        let new_len = required_len(self.len, items.len())?;
        self.ensure_capacity(new_len)?;

        // Write into the filler region, then rotate the block into place.
        self.slots[self.len..new_len].clone_from_slice(items);
        self.slots[index..new_len].rotate_right(items.len());
        self.len = new_len;

        contracts::check_array_well_formed(self);
        Ok(Cursor::new(index, self.id))
    }

    /// Insert clones of `source[first..last]` at `position`.
    ///
    /// Fails with [`ArrayError::InvalidRange`] when `first > last` and with
    /// [`ArrayError::PositionOutOfRange`] when `position` or the source range
    /// falls outside its array.
    pub fn insert_range(
        &mut self,
        position: Cursor<T>,
        source: &DynamicArray<T>,
        first: Cursor<T>,
        last: Cursor<T>,
    ) -> Result<Cursor<T>>
    where
        T: Clone,
    {
        let (start, end) = source.checked_range(first, last)?;
        self.insert_slice(position, &source.as_slice()[start..end])
    }

    /// Remove the element at `position`.
    ///
    /// Returns a cursor to the element that moved into its slot, or
    /// [`end`](Self::end) if the last element was erased.
    pub fn erase_at(&mut self, position: Cursor<T>) -> Result<Cursor<T>> {
        contracts::check_cursor_origin(&position, self.id);
        let index = position.index();
        if index >= self.len {
            return Err(ArrayError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }

        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;
        self.slots[self.len] = T::default();

        contracts::check_array_well_formed(self);
        Ok(Cursor::new(index, self.id))
    }

    /// Remove every element in `[first, last)`.
    ///
    /// Returns a cursor to the element now at `first`.
    pub fn erase_range(&mut self, first: Cursor<T>, last: Cursor<T>) -> Result<Cursor<T>> {
        let (start, end) = self.checked_range(first, last)?;
        let count = end - start;

        self.slots[start..self.len].rotate_left(count);
        let new_len = self.len - count;
        for slot in &mut self.slots[new_len..self.len] {
            *slot = T::default();
        }
        self.len = new_len;

        contracts::check_array_well_formed(self);
        Ok(Cursor::new(start, self.id))
    }

    /// Reallocate to exactly `new_capacity` slots.
    ///
    /// Shrinking below the current length is rejected with
    /// [`ArrayError::ShrinkBelowLength`], never truncated.
    pub fn resize(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity < self.len {
            return Err(ArrayError::ShrinkBelowLength {
                requested: new_capacity,
                len: self.len,
            });
        }
        if new_capacity != self.capacity() {
            self.reallocate(new_capacity)?;
        }
        contracts::check_array_well_formed(self);
        Ok(())
    }

    /// Copy `items` in as the new contents, keeping the larger capacity.
    ///
    /// The copy is built in a fresh buffer; the old one is released when the
    /// copy replaces it. On failure the array is left as it was.
    pub fn assign_slice(&mut self, items: &[T]) -> Result<()>
    where
        T: Clone,
    {
        let capacity = self.capacity().max(items.len());
        let mut fresh = allocate_slots(capacity)?;
        fresh[..items.len()].clone_from_slice(items);

        self.slots = fresh;
        self.len = items.len();
        self.id = ArrayId::fresh();
        contracts::check_array_well_formed(self);
        Ok(())
    }

    /// Deep copy with the same capacity and a fresh identity.
    ///
    /// Fallible counterpart of [`Clone::clone`].
    pub fn try_clone(&self) -> Result<Self>
    where
        T: Clone,
    {
        let mut slots = allocate_slots(self.capacity())?;
        slots[..self.len].clone_from_slice(self.as_slice());
        Ok(Self {
            slots,
            len: self.len,
            id: ArrayId::fresh(),
        })
    }
}

// ============================================================================
// TRAITS
// ============================================================================

/// The unallocated state: capacity 0, as left behind by [`DynamicArray::take`].
impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self {
            slots: empty_slots(),
            len: 0,
            id: ArrayId::fresh(),
        }
    }
}

/// Deep copy with the same capacity and a fresh identity.
///
/// `Clone` cannot report errors, so an allocation failure panics after
/// being logged. [`DynamicArray::try_clone`] returns it instead.
impl<T: Clone + Default> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        self.try_clone().unwrap_or_else(|err| unrecoverable(err))
    }

    fn clone_from(&mut self, source: &Self) {
        // Release the old buffer before building the copy.
        self.slots = empty_slots();
        self.len = 0;
        *self = source.clone();
        contracts::check_array_well_formed(self);
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

/// Takes the vector's buffer as is; capacity equals its length.
impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(items: Vec<T>) -> Self {
        let len = items.len();
        Self {
            slots: items.into_boxed_slice(),
            len,
            id: ArrayId::fresh(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(items: [T; N]) -> Self {
        Self::from(Vec::from(items))
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(items: &[T]) -> Self {
        Self::from(items.to_vec())
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::DynamicArray;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<T: Serialize> Serialize for DynamicArray<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.as_slice())
        }
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for DynamicArray<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            Vec::<T>::deserialize(deserializer).map(DynamicArray::from)
        }
    }
}
