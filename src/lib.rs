//! Growable contiguous array with checked cursors, plus a null-terminated
//! text buffer built on it.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────┐     ┌──────────────────┐
//! │  array/growth.rs │────▶│   array/mod.rs   │────▶│     text.rs      │
//! │ (doubling, checks│     │  (DynamicArray,  │     │   (TextBuffer)   │
//! │  for overflow)   │     │  insert / erase) │     │                  │
//! └──────────────────┘     └──────────────────┘     └──────────────────┘
//!                                   │                        │
//!                                   ▼                        ▼
//!                          ┌──────────────────┐     ┌──────────────────┐
//!                          │ array/cursor.rs  │     │     grid.rs      │
//!                          │ (Cursor, ArrayId)│     │    (TextGrid)    │
//!                          └──────────────────┘     └──────────────────┘
//!        │                          │                        │
//!        ▼                          ▼                        ▼
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         verify/contracts.rs                         │
//! │  (length <= capacity, cursor origin, terminator, uniform width)     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Error model
//!
//! Every fallible operation returns [`Result`]. Inputs are validated before
//! the first write, so an `Err` leaves the container unchanged. See
//! [`ErrorKind`] for the four categories.
//!
//! # Usage
//!
//! ```
//! use growbuf::{DynamicArray, TextBuffer};
//!
//! let mut numbers = DynamicArray::new();
//! for n in 1..=5 {
//!     numbers.append(n)?;
//! }
//! numbers.erase_at(numbers.begin().advance(2))?;
//! numbers.insert_at(numbers.begin().advance(1), 9)?;
//! assert_eq!(numbers.as_slice(), &[1, 9, 2, 4, 5]);
//!
//! let greeting = &TextBuffer::from_raw(b"Hello")? + &TextBuffer::from_raw(b", world!")?;
//! assert_eq!(greeting.raw_view(), b"Hello, world!\0");
//! # Ok::<(), growbuf::ArrayError>(())
//! ```

pub mod array;
mod error;
pub mod grid;
pub mod text;
pub mod verify;

#[doc(hidden)]
pub mod testing;

pub use array::{ArrayId, Cursor, DynamicArray, IntoIter, Iter, IterMut};
pub use error::{ArrayError, ErrorKind, Result};
pub use grid::TextGrid;
pub use text::TextBuffer;
