//! Differential testing: DynamicArray against `Vec` as the oracle.
//!
//! Each generated script runs on both containers. Where the oracle's
//! precondition holds the array must succeed with the same result; where it
//! does not, the array must fail with the matching error kind and leave its
//! contents unchanged.

use growbuf::{DynamicArray, ErrorKind};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Append(i16),
    Prepend(i16),
    Insert(usize, i16),
    InsertSlice(usize, Vec<i16>),
    Erase(usize),
    EraseRange(usize, usize),
    RemoveLast,
    RemoveFirst,
    Resize(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i16>().prop_map(Op::Append),
        2 => any::<i16>().prop_map(Op::Prepend),
        2 => (0usize..24, any::<i16>()).prop_map(|(i, v)| Op::Insert(i, v)),
        1 => (0usize..24, prop::collection::vec(any::<i16>(), 0..6))
            .prop_map(|(i, vs)| Op::InsertSlice(i, vs)),
        2 => (0usize..24).prop_map(Op::Erase),
        1 => (0usize..24, 0usize..24).prop_map(|(a, b)| Op::EraseRange(a, b)),
        1 => Just(Op::RemoveLast),
        1 => Just(Op::RemoveFirst),
        1 => (0usize..48).prop_map(Op::Resize),
    ]
}

/// Expected error kind for `op` on an oracle of length `len`, or `None` if it
/// must succeed.
fn oracle_rejects(op: &Op, len: usize) -> Option<ErrorKind> {
    match *op {
        Op::Append(_) | Op::Prepend(_) => None,
        Op::Insert(i, _) | Op::InsertSlice(i, _) => (i > len).then_some(ErrorKind::OutOfRange),
        Op::Erase(i) => (i >= len).then_some(ErrorKind::OutOfRange),
        Op::EraseRange(a, b) if a > b => Some(ErrorKind::InvalidRange),
        Op::EraseRange(_, b) => (b > len).then_some(ErrorKind::OutOfRange),
        Op::RemoveLast | Op::RemoveFirst => (len == 0).then_some(ErrorKind::OutOfRange),
        Op::Resize(n) => (n < len).then_some(ErrorKind::InvalidOperation),
    }
}

/// Apply `op` to the oracle. Only called when `oracle_rejects` is `None`.
fn apply_oracle(op: &Op, oracle: &mut Vec<i16>) -> Option<i16> {
    match op {
        Op::Append(v) => oracle.push(*v),
        Op::Prepend(v) => oracle.insert(0, *v),
        Op::Insert(i, v) => oracle.insert(*i, *v),
        Op::InsertSlice(i, vs) => {
            oracle.splice(*i..*i, vs.iter().copied());
        }
        Op::Erase(i) => {
            oracle.remove(*i);
        }
        Op::EraseRange(a, b) => {
            oracle.drain(*a..*b);
        }
        Op::RemoveLast => return oracle.pop(),
        Op::RemoveFirst => return Some(oracle.remove(0)),
        Op::Resize(_) => {}
    }
    None
}

fn apply_array(op: &Op, array: &mut DynamicArray<i16>) -> growbuf::Result<Option<i16>> {
    let begin = array.begin();
    match op {
        Op::Append(v) => array.append(*v)?,
        Op::Prepend(v) => array.prepend(*v)?,
        Op::Insert(i, v) => {
            array.insert_at(begin.advance(*i), *v)?;
        }
        Op::InsertSlice(i, vs) => {
            array.insert_slice(begin.advance(*i), vs)?;
        }
        Op::Erase(i) => {
            array.erase_at(begin.advance(*i))?;
        }
        Op::EraseRange(a, b) => {
            array.erase_range(begin.advance(*a), begin.advance(*b))?;
        }
        Op::RemoveLast => return array.remove_last().map(Some),
        Op::RemoveFirst => return array.remove_first().map(Some),
        Op::Resize(n) => array.resize(*n)?,
    }
    Ok(None)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Differential test: every op agrees with Vec, failures included.
    #[test]
    fn diff_ops_against_vec(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut array = DynamicArray::new();
        let mut oracle: Vec<i16> = Vec::new();

        for op in &ops {
            let capacity = array.capacity();
            let result = apply_array(op, &mut array);

            match oracle_rejects(op, oracle.len()) {
                Some(kind) => {
                    let err = result.unwrap_err();
                    prop_assert_eq!(err.kind(), kind, "wrong error for {:?}", op);
                    prop_assert_eq!(array.capacity(), capacity, "{:?} reallocated on failure", op);
                }
                None => {
                    let removed = result.unwrap();
                    prop_assert_eq!(removed, apply_oracle(op, &mut oracle), "{:?}", op);
                }
            }

            prop_assert_eq!(array.as_slice(), oracle.as_slice(), "after {:?}", op);
            prop_assert!(array.size() <= array.capacity());
        }
    }

    /// Differential test: owning iteration yields exactly the oracle.
    #[test]
    fn diff_into_iter(values in prop::collection::vec(any::<i16>(), 0..40)) {
        let array: DynamicArray<i16> = values.iter().copied().collect();
        let forward: Vec<i16> = array.clone().into_iter().collect();
        let backward: Vec<i16> = array.into_iter().rev().collect();

        prop_assert_eq!(&forward, &values);
        prop_assert_eq!(backward, values.iter().rev().copied().collect::<Vec<_>>());
    }
}
