//! Cursor arithmetic, comparison and dereference.

use super::common::array_of;
use growbuf::{ArrayError, DynamicArray, ErrorKind};

#[test]
fn test_arithmetic_moves_by_offset() {
    let array = array_of(&[10, 20, 30, 40]);
    let mut cursor = array.begin().advance(3);
    assert_eq!(*cursor.dereference(&array).unwrap(), 40);

    cursor = cursor.retreat(2);
    assert_eq!(*cursor.dereference(&array).unwrap(), 20);

    cursor.increment().increment();
    assert_eq!(cursor.index(), 3);
    cursor.decrement();
    assert_eq!(cursor.index(), 2);
}

#[test]
fn test_distance_is_forward_only() {
    let array = array_of(&[1, 2, 3, 4, 5]);
    let first = array.begin().advance(1);
    let last = array.begin().advance(4);

    assert_eq!(first.distance_to(&last).unwrap(), 3);
    assert_eq!(first.distance_to(&first).unwrap(), 0);

    let err = last.distance_to(&first).unwrap_err();
    assert_eq!(err, ArrayError::NegativeDistance { from: 4, to: 1 });
    assert_eq!(err.kind(), ErrorKind::InvalidOperation);
}

#[test]
fn test_ordering_compares_positions() {
    let array = array_of(&['a', 'b']);
    assert!(array.begin() < array.end());
    assert!(array.end() > array.begin().advance(1));
    assert_eq!(array.begin().advance(2), array.end());
    assert_ne!(array.begin(), array.end());
}

#[test]
fn test_dereference_out_of_range_is_error() {
    let array = array_of(&[1, 2]);
    let err = array.end().dereference(&array).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);

    // Retreating from begin wraps around instead of underflowing.
    let before = array.begin().retreat(1);
    assert!(before.dereference(&array).is_err());
}

#[test]
fn test_dereference_mut_writes_through() {
    let mut array = array_of(&[1, 2, 3]);
    let middle = array.begin().advance(1);
    *middle.dereference_mut(&mut array).unwrap() = 20;
    assert_eq!(array.as_slice(), &[1, 20, 3]);
}

#[test]
fn test_cursor_survives_reallocation_by_index() {
    let mut array = array_of(&[1, 2]);
    let second = array.begin().advance(1);
    for v in 3..=20 {
        array.append(v).unwrap();
    }
    assert!(array.capacity() >= 20);
    assert_eq!(*second.dereference(&array).unwrap(), 2);
}

#[test]
fn test_cursor_carries_origin() {
    let left = array_of(&[1]);
    let right = array_of(&[1]);
    assert_eq!(left.begin().origin(), left.id());
    assert_ne!(left.begin().origin(), right.begin().origin());
    // Index-only comparison: equal positions in different arrays compare equal.
    assert_eq!(left.begin(), right.begin());
}

#[test]
fn test_find_then_insert_before_match() {
    let mut array: DynamicArray<i32> = array_of(&[1, 2, 4, 5]);
    let at = array.find(|&v| v > 3);
    array.insert_at(at, 3).unwrap();
    assert_eq!(array.as_slice(), &[1, 2, 3, 4, 5]);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "Contract violation: Cursor.Origin")]
fn test_foreign_cursor_panics_in_debug() {
    let mut left = array_of(&[1, 2]);
    let right = array_of(&[3, 4]);
    let _ = left.insert_at(right.begin(), 0);
}
