// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Null-terminated byte string on top of [`DynamicArray<u8>`].
//!
//! The stored length always counts one trailing NUL, so the text length is
//! `stored - 1` and [`TextBuffer::raw_view`] can be handed to anything that
//! expects a C string. Every edit goes through the array's own operations
//! (`insert_slice`, `insert_range`, `resize`) and then re-checks the
//! terminator in debug builds.
//!
//! A NUL byte can never get inside the text: raw input is cut at its first
//! NUL, and `&str` input containing one is rejected.

use std::borrow::Cow;
use std::ffi::CStr;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use crate::array::growth::required_len;
use crate::array::DynamicArray;
use crate::error::{unrecoverable, ArrayError, Result};
use crate::verify::contracts;

const NUL: u8 = 0;

/// Growable, always null-terminated byte string.
#[derive(Clone, PartialEq, Eq)]
pub struct TextBuffer {
    bytes: DynamicArray<u8>,
}

impl TextBuffer {
    /// Empty text: a lone terminator.
    pub fn new() -> Self {
        Self {
            bytes: DynamicArray::from(vec![NUL]),
        }
    }

    /// Copy a C-style string: everything up to the first NUL, or the whole
    /// slice if it has none.
    pub fn from_raw(raw: &[u8]) -> Result<Self> {
        let len = raw.iter().position(|&b| b == NUL).unwrap_or(raw.len());

        let mut bytes = DynamicArray::with_capacity(required_len(len, 1)?)?;
        bytes.insert_slice(bytes.end(), &raw[..len])?;
        bytes.append(NUL)?;

        let text = Self { bytes };
        contracts::check_terminated(text.raw_view());
        Ok(text)
    }

    pub fn from_c_str(raw: &CStr) -> Result<Self> {
        Self::from_raw(raw.to_bytes())
    }

    /// Text length, excluding the terminator.
    pub fn length(&self) -> usize {
        self.bytes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Allocated byte slots, terminator included.
    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    /// Bytes including the trailing NUL.
    pub fn raw_view(&self) -> &[u8] {
        self.bytes.as_slice()
    }

    /// Bytes without the trailing NUL.
    pub fn as_bytes(&self) -> &[u8] {
        &self.raw_view()[..self.length()]
    }

    pub fn as_c_str(&self) -> &CStr {
        CStr::from_bytes_until_nul(self.raw_view()).unwrap_or_default()
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }

    /// Append `other`'s text in place.
    ///
    /// The buffer grows by exactly `other.length()` when it is full. The new
    /// bytes go in front of the existing terminator, so a failure leaves the
    /// text unchanged.
    pub fn append(&mut self, other: &TextBuffer) -> Result<()> {
        let needed = required_len(self.bytes.len(), other.length())?;
        if needed > self.bytes.capacity() {
            self.bytes.resize(needed)?;
        }

        let terminator = self.bytes.end().retreat(1);
        let source_end = other.bytes.end().retreat(1);
        self.bytes
            .insert_range(terminator, &other.bytes, other.bytes.begin(), source_end)?;

        contracts::check_terminated(self.raw_view());
        Ok(())
    }

    /// New text holding `self` followed by `other`.
    pub fn concat(&self, other: &TextBuffer) -> Result<TextBuffer> {
        let mut result = self.clone();
        result.append(other)?;
        Ok(result)
    }

    /// Replace the contents with a copy of a C-style string.
    pub fn assign_raw(&mut self, raw: &[u8]) -> Result<()> {
        *self = Self::from_raw(raw)?;
        Ok(())
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<&str> for TextBuffer {
    type Error = ArrayError;

    /// Rejects text containing a NUL byte instead of silently cutting it.
    fn try_from(text: &str) -> Result<Self> {
        if let Some(position) = text.bytes().position(|b| b == NUL) {
            return Err(ArrayError::InteriorNul { position });
        }
        Self::from_raw(text.as_bytes())
    }
}

impl FromStr for TextBuffer {
    type Err = ArrayError;

    fn from_str(text: &str) -> Result<Self> {
        Self::try_from(text)
    }
}

impl Add<&TextBuffer> for &TextBuffer {
    type Output = TextBuffer;

    /// # Panics
    /// Panics if storage for the result cannot be allocated.
    fn add(self, rhs: &TextBuffer) -> TextBuffer {
        self.concat(rhs).unwrap_or_else(|err| unrecoverable(err))
    }
}

impl Add<&TextBuffer> for TextBuffer {
    type Output = TextBuffer;

    /// # Panics
    /// Panics if storage for the result cannot be allocated.
    fn add(mut self, rhs: &TextBuffer) -> TextBuffer {
        self += rhs;
        self
    }
}

impl AddAssign<&TextBuffer> for TextBuffer {
    /// # Panics
    /// Panics if storage for the result cannot be allocated.
    fn add_assign(&mut self, rhs: &TextBuffer) {
        if let Err(err) = self.append(rhs) {
            unrecoverable(err);
        }
    }
}

impl PartialEq<str> for TextBuffer {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for TextBuffer {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Hash for TextBuffer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextBuffer")
            .field(&self.to_string_lossy())
            .finish()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::TextBuffer;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for TextBuffer {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_string_lossy())
        }
    }

    impl<'de> Deserialize<'de> for TextBuffer {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let text = String::deserialize(deserializer)?;
            TextBuffer::try_from(text.as_str()).map_err(D::Error::custom)
        }
    }
}
