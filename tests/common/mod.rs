//! Shared test utilities and fixtures.

#![allow(dead_code)]

use growbuf::{DynamicArray, TextBuffer};

// Re-export canonical test utilities from growbuf::testing
pub use growbuf::testing::{array_of, capacity_after_appends, grid, text};

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Check every observable invariant of an array against the expected contents.
pub fn assert_array_matches<T>(array: &DynamicArray<T>, expected: &[T])
where
    T: PartialEq + std::fmt::Debug,
{
    assert_eq!(array.as_slice(), expected, "contents differ");
    assert_eq!(array.size(), expected.len(), "size differs");
    assert_eq!(array.is_empty(), expected.is_empty());
    assert!(
        array.size() <= array.capacity(),
        "size {} exceeds capacity {}",
        array.size(),
        array.capacity()
    );
    assert_eq!(array.end().index(), array.size());
    assert_eq!(array.begin().distance_to(&array.end()).unwrap(), array.size());
}

/// Check the terminator invariant and the text contents.
pub fn assert_text(buffer: &TextBuffer, expected: &[u8]) {
    assert_eq!(buffer.as_bytes(), expected);
    assert_eq!(buffer.length(), expected.len());

    let raw = buffer.raw_view();
    assert_eq!(raw.len(), expected.len() + 1);
    assert_eq!(raw.last(), Some(&0), "missing terminator");
    assert!(!raw[..raw.len() - 1].contains(&0), "interior NUL");
}
