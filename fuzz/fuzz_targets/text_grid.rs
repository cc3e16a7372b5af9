// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for TextGrid width validation.
//!
//! A grid must be accepted exactly when there is at least one line and every
//! line has the first line's width. Building the same grid line by line
//! from an empty one must agree.

#![no_main]

use growbuf::{TextBuffer, TextGrid};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|lines: Vec<String>| {
    let lines: Vec<String> = lines.into_iter().map(|l| l.replace('\0', "")).collect();
    let strs: Vec<&str> = lines.iter().map(String::as_str).collect();

    let uniform = !strs.is_empty() && strs.iter().all(|l| l.len() == strs[0].len());

    match TextGrid::from_strs(&strs) {
        Ok(grid) => {
            assert!(uniform);
            assert_eq!(grid.height(), strs.len());
            assert_eq!(grid.width(), strs[0].len());
            assert_eq!(grid.to_string(), strs.join("\n"));
        }
        Err(_) => assert!(!uniform),
    }

    // Pushing from empty accepts the same line lists, minus the empty one.
    let mut pushed = TextGrid::new();
    let all_pushed = strs.iter().all(|l| match TextBuffer::try_from(*l) {
        Ok(text) => pushed.push_line(text).is_ok(),
        Err(_) => false,
    });
    assert_eq!(all_pushed, uniform || strs.is_empty());
    if uniform {
        assert_eq!(Ok(pushed), TextGrid::from_strs(&strs));
    }
});
