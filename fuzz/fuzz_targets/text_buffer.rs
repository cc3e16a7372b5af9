// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for TextBuffer construction and concatenation.
//!
//! Raw input may contain NUL bytes anywhere. The buffer must cut at the
//! first one, always end in exactly one terminator, and concatenate as plain
//! byte concatenation.

#![no_main]

use arbitrary::Arbitrary;
use growbuf::TextBuffer;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct TextInput {
    left: Vec<u8>,
    right: Vec<u8>,
}

fn strlen(raw: &[u8]) -> &[u8] {
    let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
    &raw[..end]
}

fn assert_terminated(buffer: &TextBuffer) {
    let raw = buffer.raw_view();
    assert_eq!(raw.last(), Some(&0));
    assert_eq!(raw.iter().filter(|&&b| b == 0).count(), 1);
    assert_eq!(buffer.length(), raw.len() - 1);
}

fuzz_target!(|input: TextInput| {
    let left = TextBuffer::from_raw(&input.left).unwrap();
    let right = TextBuffer::from_raw(&input.right).unwrap();
    assert_terminated(&left);
    assert_terminated(&right);
    assert_eq!(left.as_bytes(), strlen(&input.left));

    let joined = &left + &right;
    assert_terminated(&joined);
    assert_eq!(joined.length(), left.length() + right.length());
    assert!(joined.as_bytes().starts_with(left.as_bytes()));
    assert!(joined.as_bytes().ends_with(right.as_bytes()));

    let mut in_place = left.clone();
    in_place += &right;
    assert_eq!(in_place, joined);

    if let Ok(text) = std::str::from_utf8(&input.left) {
        match TextBuffer::try_from(text) {
            Ok(parsed) => assert_eq!(parsed.as_bytes(), text.as_bytes()),
            Err(_) => assert!(text.contains('\0')),
        }
    }
});
