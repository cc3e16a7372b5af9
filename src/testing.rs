//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::array::DynamicArray;
use crate::grid::TextGrid;
use crate::text::TextBuffer;

/// Build an array by appending each value in order, the way callers do.
///
/// Unlike `DynamicArray::from`, this goes through the doubling growth path,
/// so capacities match what a sequence of `append` calls produces.
pub fn array_of<T: Clone + Default>(values: &[T]) -> DynamicArray<T> {
    let mut array = DynamicArray::new();
    for value in values {
        array
            .append(value.clone())
            .unwrap_or_else(|err| panic!("append failed while building a test array: {}", err));
    }
    array
}

/// Text buffer from a string literal without NUL bytes.
pub fn text(s: &str) -> TextBuffer {
    match TextBuffer::try_from(s) {
        Ok(text) => text,
        Err(err) => panic!("invalid test text {:?}: {}", s, err),
    }
}

/// Grid from string literals of equal width.
pub fn grid(lines: &[&str]) -> TextGrid {
    match TextGrid::from_strs(lines) {
        Ok(grid) => grid,
        Err(err) => panic!("invalid test grid {:?}: {}", lines, err),
    }
}

/// Capacity an array reaches after `n` appends starting from `new()`.
pub fn capacity_after_appends(n: usize) -> usize {
    n.max(1).next_power_of_two()
}
