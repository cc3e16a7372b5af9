//! Structural properties of DynamicArray.

use super::common::{array_of, assert_array_matches, capacity_after_appends};
use growbuf::{DynamicArray, ErrorKind};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

fn values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..48)
}

fn non_empty_values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 1..48)
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Appends keep order and grow capacity to the next power of two.
    #[test]
    fn prop_append_count_and_order(values in values()) {
        let array = array_of(&values);
        assert_array_matches(&array, &values);
        prop_assert_eq!(array.capacity(), capacity_after_appends(values.len()));
    }

    /// insert_at puts the value at the position and shifts the tail by one.
    #[test]
    fn prop_insert_at_shifts_tail(values in values(), pos in 0usize..48, v: i32) {
        let pos = pos.min(values.len());
        let mut array = array_of(&values);
        array.insert_at(array.begin().advance(pos), v).unwrap();

        prop_assert_eq!(array.size(), values.len() + 1);
        prop_assert_eq!(*array.at(pos).unwrap(), v);
        prop_assert_eq!(&array.as_slice()[..pos], &values[..pos]);
        prop_assert_eq!(&array.as_slice()[pos + 1..], &values[pos..]);
    }

    /// erase_at pulls the successor into the erased slot.
    #[test]
    fn prop_erase_at_pulls_successor(values in non_empty_values(), pos in 0usize..48) {
        let pos = pos % values.len();
        let mut array = array_of(&values);
        let at = array.erase_at(array.begin().advance(pos)).unwrap();

        prop_assert_eq!(array.size(), values.len() - 1);
        if pos + 1 < values.len() {
            prop_assert_eq!(*at.dereference(&array).unwrap(), values[pos + 1]);
        } else {
            prop_assert_eq!(at, array.end());
        }
    }

    /// Mutating a clone never touches the original.
    #[test]
    fn prop_clone_is_isolated(values in non_empty_values(), extra: i32) {
        let original = array_of(&values);
        let mut copy = original.clone();
        copy.append(extra).unwrap();
        let bumped = copy.at(0).unwrap().wrapping_add(1);
        *copy.at_mut(0).unwrap() = bumped;
        copy.remove_last().unwrap();

        assert_array_matches(&original, &values);
        prop_assert_ne!(copy.as_slice(), original.as_slice());
    }

    /// A move leaves the source empty and unallocated.
    #[test]
    fn prop_take_transfers_everything(values in values()) {
        let mut source = array_of(&values);
        let capacity = source.capacity();
        let moved = source.take();

        prop_assert_eq!(moved.capacity(), capacity);
        assert_array_matches(&moved, &values);
        prop_assert_eq!(source.capacity(), 0);
        prop_assert!(source.is_empty());
    }

    /// Shrinking below the length fails and changes nothing.
    #[test]
    fn prop_resize_below_len_rejected(values in non_empty_values(), shrink in 1usize..48) {
        let mut array = array_of(&values);
        let capacity = array.capacity();
        let target = values.len().saturating_sub(shrink.min(values.len()));

        let err = array.resize(target).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidOperation);
        prop_assert_eq!(array.capacity(), capacity);
        assert_array_matches(&array, &values);
    }

    /// Growing with resize keeps the contents.
    #[test]
    fn prop_resize_up_keeps_contents(values in values(), extra in 0usize..64) {
        let mut array = array_of(&values);
        array.resize(values.len() + extra).unwrap();
        prop_assert_eq!(array.capacity(), values.len() + extra);
        assert_array_matches(&array, &values);
    }

    /// Distance from begin to any in-range cursor is its index.
    #[test]
    fn prop_distance_matches_index(values in values(), offset in 0usize..48) {
        let array: DynamicArray<i32> = DynamicArray::from(values.clone());
        let offset = offset.min(values.len());
        let cursor = array.begin().advance(offset);
        prop_assert_eq!(array.begin().distance_to(&cursor).unwrap(), offset);
        prop_assert_eq!(cursor.distance_to(&array.end()).unwrap(), values.len() - offset);
    }
}
