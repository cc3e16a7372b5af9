// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: runtime contracts for the container invariants.
//!
//! Every mutating operation ends with a contract call. The checks are
//! `debug_assert!`s, so they cost nothing in release builds but turn a
//! broken invariant into an immediate panic while tests run, close to the
//! operation that broke it.

pub mod contracts;
