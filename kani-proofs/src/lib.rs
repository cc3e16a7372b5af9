// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for growbuf's capacity arithmetic and the
//! tail shifts used by insert and erase.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: `grown_capacity` and `required_len` never panic
//! 2. **Sufficiency**: a grown capacity always holds the requested length
//! 3. **Minimality**: it is the smallest doubling that does
//! 4. **Shifts**: insert-then-erase at the same index restores the buffer

pub const GROWTH_FACTOR: usize = 2;
pub const INITIAL_CAPACITY: usize = 1;

// ============================================================================
// CAPACITY ARITHMETIC (mirrors src/array/growth.rs)
// ============================================================================

/// Smallest doubling of `capacity` holding `required`, or `None` on overflow.
pub fn grown_capacity(capacity: usize, required: usize) -> Option<usize> {
    let mut next = capacity;
    while next < required {
        next = if next == 0 {
            INITIAL_CAPACITY
        } else {
            next.checked_mul(GROWTH_FACTOR)?
        };
    }
    Some(next)
}

pub fn required_len(len: usize, additional: usize) -> Option<usize> {
    len.checked_add(additional)
}

// ============================================================================
// TAIL SHIFTS (mirrors insert_at / erase_at in src/array/mod.rs)
// ============================================================================

/// Place `value` in the first free slot, then rotate it down to `index`.
pub fn insert_shift(slots: &mut [u8], len: usize, index: usize, value: u8) {
    slots[len] = value;
    slots[index..=len].rotate_right(1);
}

/// Rotate the slot at `index` to the end of the live range and take it out.
pub fn erase_shift(slots: &mut [u8], len: usize, index: usize) -> u8 {
    slots[index..len].rotate_left(1);
    std::mem::take(&mut slots[len - 1])
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Growth never panics, and a success always fits the request.
    #[kani::proof]
    #[kani::unwind(66)] // at most 64 doublings plus the zero restart
    fn verify_grown_capacity_sufficient() {
        let capacity: usize = kani::any();
        let required: usize = kani::any();

        if let Some(next) = grown_capacity(capacity, required) {
            kani::assert(next >= required, "grown capacity must hold the request");
            kani::assert(next >= capacity, "growth never shrinks");
        }
    }

    /// The result is the smallest doubling: halving it would not fit.
    #[kani::proof]
    #[kani::unwind(66)]
    fn verify_grown_capacity_minimal() {
        let capacity: usize = kani::any_where(|&c| c > 0);
        let required: usize = kani::any();

        if let Some(next) = grown_capacity(capacity, required) {
            if next > capacity {
                kani::assert(next / GROWTH_FACTOR < required, "one doubling too many");
                kani::assert(next % capacity == 0, "result must be a doubling");
            }
        }
    }

    /// A moved-from array (capacity 0) restarts at one slot.
    #[kani::proof]
    #[kani::unwind(3)]
    fn verify_zero_capacity_restart() {
        kani::assert(grown_capacity(0, 1) == Some(1), "restart at one slot");
        kani::assert(grown_capacity(0, 0) == Some(0), "no growth when nothing needed");
    }

    /// Length arithmetic reports overflow instead of wrapping.
    #[kani::proof]
    fn verify_required_len_checked() {
        let len: usize = kani::any();
        let additional: usize = kani::any();
        match required_len(len, additional) {
            Some(total) => kani::assert(total >= len, "no wrap-around"),
            None => kani::assert(len > usize::MAX - additional, "overflow only when it must"),
        }
    }

    /// Insert then erase at the same index restores the live slots.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_insert_erase_inverse() {
        const CAP: usize = 4;
        let mut slots: [u8; CAP] = kani::any();
        let len: usize = kani::any_where(|&l| l < CAP);
        let index: usize = kani::any_where(|&i| i <= len);
        let value: u8 = kani::any();
        let before = slots;

        insert_shift(&mut slots, len, index, value);
        kani::assert(slots[index] == value, "value lands at index");

        let removed = erase_shift(&mut slots, len + 1, index);
        kani::assert(removed == value, "erase returns the inserted value");
        kani::assert(slots[len] == 0, "vacated slot is cleared");
        kani::assert(slots[..len] == before[..len], "live slots restored");
    }
}
