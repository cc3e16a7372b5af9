// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for DynamicArray operation scripts.
//!
//! Runs arbitrary insert/erase/resize sequences against the array and a
//! `Vec` side by side. Any disagreement, any panic, or any failed call that
//! changed the contents is a bug.

#![no_main]

use arbitrary::Arbitrary;
use growbuf::DynamicArray;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Append(u8),
    Prepend(u8),
    Insert { at: u8, value: u8 },
    InsertSlice { at: u8, values: Vec<u8> },
    Erase { at: u8 },
    EraseRange { first: u8, last: u8 },
    RemoveLast,
    RemoveFirst,
    Resize { capacity: u8 },
    Take,
}

fuzz_target!(|ops: Vec<Op>| {
    let mut array: DynamicArray<u8> = DynamicArray::new();
    let mut oracle: Vec<u8> = Vec::new();

    for op in ops.iter().take(256) {
        let before = oracle.clone();
        let begin = array.begin();
        let len = oracle.len();

        match op {
            Op::Append(v) => {
                array.append(*v).unwrap();
                oracle.push(*v);
            }
            Op::Prepend(v) => {
                array.prepend(*v).unwrap();
                oracle.insert(0, *v);
            }
            Op::Insert { at, value } => {
                let at = usize::from(*at);
                let result = array.insert_at(begin.advance(at), *value);
                assert_eq!(result.is_ok(), at <= len);
                if at <= len {
                    oracle.insert(at, *value);
                }
            }
            Op::InsertSlice { at, values } => {
                let at = usize::from(*at);
                let result = array.insert_slice(begin.advance(at), values);
                assert_eq!(result.is_ok(), at <= len);
                if at <= len {
                    oracle.splice(at..at, values.iter().copied());
                }
            }
            Op::Erase { at } => {
                let at = usize::from(*at);
                let result = array.erase_at(begin.advance(at));
                assert_eq!(result.is_ok(), at < len);
                if at < len {
                    oracle.remove(at);
                }
            }
            Op::EraseRange { first, last } => {
                let (first, last) = (usize::from(*first), usize::from(*last));
                let result = array.erase_range(begin.advance(first), begin.advance(last));
                let valid = first <= last && last <= len;
                assert_eq!(result.is_ok(), valid);
                if valid {
                    oracle.drain(first..last);
                }
            }
            Op::RemoveLast => {
                assert_eq!(array.remove_last().ok(), oracle.pop());
            }
            Op::RemoveFirst => {
                let expected = (!oracle.is_empty()).then(|| oracle.remove(0));
                assert_eq!(array.remove_first().ok(), expected);
            }
            Op::Resize { capacity } => {
                let capacity = usize::from(*capacity);
                let result = array.resize(capacity);
                assert_eq!(result.is_ok(), capacity >= len);
                if result.is_ok() {
                    assert_eq!(array.capacity(), capacity);
                }
            }
            Op::Take => {
                let moved = array.take();
                assert_eq!(moved.as_slice(), oracle.as_slice());
                assert_eq!(array.capacity(), 0);
                array = moved;
            }
        }

        assert_eq!(array.as_slice(), oracle.as_slice(), "after {:?} on {:?}", op, before);
        assert!(array.size() <= array.capacity());
    }
});
