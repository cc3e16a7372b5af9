// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Capacity arithmetic.
//!
//! Kept free of any storage so the same functions can be model-checked in
//! `kani-proofs/` and property-tested without building an array.

use crate::error::{ArrayError, Result};

/// Multiplier applied whenever the buffer is full.
pub const GROWTH_FACTOR: usize = 2;

/// Capacity of a freshly constructed empty array.
pub const INITIAL_CAPACITY: usize = 1;

/// Smallest doubling of `capacity` that holds `required` slots.
///
/// Returns `capacity` unchanged when it already suffices. A zero capacity
/// (moved-from array) restarts at [`INITIAL_CAPACITY`].
pub fn grown_capacity(capacity: usize, required: usize) -> Result<usize> {
    let mut next = capacity;
    while next < required {
        next = if next == 0 {
            INITIAL_CAPACITY
        } else {
            next.checked_mul(GROWTH_FACTOR)
                .ok_or(ArrayError::AllocationFailure { requested: required })?
        };
    }
    Ok(next)
}

/// `len + additional` without overflow.
pub fn required_len(len: usize, additional: usize) -> Result<usize> {
    len.checked_add(additional)
        .ok_or(ArrayError::AllocationFailure { requested: usize::MAX })
}
