// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rectangular block of text lines.
//!
//! A `TextGrid` is a [`DynamicArray`] of [`TextBuffer`] lines that all have
//! the same width. Construction checks that EVERY line matches the first
//! one; a single matching line is not enough.
//!
//! A grid can also start empty and grow with [`TextGrid::push_line`]. The
//! first line pushed sets the width.

use std::fmt;

use crate::array::DynamicArray;
use crate::error::{ArrayError, Result};
use crate::text::TextBuffer;
use crate::verify::contracts;

/// List of equal-width lines.
#[derive(Clone, PartialEq, Eq)]
pub struct TextGrid {
    lines: DynamicArray<TextBuffer>,
}

/// First line whose width differs from `width`, as an error.
fn find_ragged<'a, I>(width: usize, lines: I) -> Option<ArrayError>
where
    I: IntoIterator<Item = &'a TextBuffer>,
{
    lines
        .into_iter()
        .enumerate()
        .find(|(_, line)| line.length() != width)
        .map(|(line, text)| ArrayError::RaggedLine {
            line,
            width: text.length(),
            expected: width,
        })
}

impl TextGrid {
    /// Empty grid of height and width 0.
    pub fn new() -> Self {
        Self {
            lines: DynamicArray::new(),
        }
    }

    /// Build a grid, rejecting an empty list or any line of a different width.
    pub fn from_lines(lines: DynamicArray<TextBuffer>) -> Result<Self> {
        let width = lines.first().ok_or(ArrayError::EmptyGrid)?.length();
        if let Some(err) = find_ragged(width, &lines) {
            return Err(err);
        }
        Ok(Self { lines })
    }

    /// Build a grid from string slices.
    pub fn from_strs(lines: &[&str]) -> Result<Self> {
        let mut texts = DynamicArray::with_capacity(lines.len())?;
        for line in lines {
            texts.append(TextBuffer::try_from(*line)?)?;
        }
        Self::from_lines(texts)
    }

    /// Common width of every line; 0 for an empty grid.
    pub fn width(&self) -> usize {
        self.lines.first().map_or(0, TextBuffer::length)
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &DynamicArray<TextBuffer> {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add a line at the bottom.
    ///
    /// The line must match the grid's width, unless the grid is empty.
    pub fn push_line(&mut self, line: TextBuffer) -> Result<()> {
        let expected = if self.is_empty() {
            line.length()
        } else {
            self.width()
        };
        if line.length() != expected {
            return Err(ArrayError::RaggedLine {
                line: self.height(),
                width: line.length(),
                expected,
            });
        }
        self.lines.append(line)?;
        contracts::check_uniform_width(expected, self.lines.iter().map(TextBuffer::length));
        Ok(())
    }

    /// New grid with `other`'s lines appended to this grid's, row by row.
    pub fn beside(&self, other: &TextGrid) -> Result<TextGrid> {
        if self.height() != other.height() {
            return Err(ArrayError::HeightMismatch {
                left: self.height(),
                right: other.height(),
            });
        }

        let mut lines = DynamicArray::with_capacity(self.height())?;
        for (left, right) in self.lines.iter().zip(other.lines.iter()) {
            lines.append(left.concat(right)?)?;
        }

        let grid = TextGrid { lines };
        contracts::check_uniform_width(grid.width(), grid.lines.iter().map(TextBuffer::length));
        Ok(grid)
    }
}

impl Default for TextGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TextGrid {
    /// Lines joined by `\n`, without a trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl fmt::Debug for TextGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextGrid")
            .field("width", &self.width())
            .field("lines", &self.lines)
            .finish()
    }
}
