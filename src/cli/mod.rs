// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the growbuf command-line interface.
//!
//! Three subcommands exercise the library from a shell: `ops` runs an
//! operation script against an integer array and shows the buffer after
//! every step, `concat` joins text buffers, and `grid` validates a block of
//! equal-width lines.

pub mod display;
pub mod script;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "growbuf",
    about = "Growable array and null-terminated text buffer playground",
    version
)]
pub struct Cli {
    /// Log every reallocation and move (same as RUST_LOG=trace)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply an operation script to an empty integer array
    ///
    /// Operations: append:V, prepend:V, insert:I:V, erase:I,
    /// erase-range:A:B, remove-last, remove-first, resize:N.
    /// Execution stops at the first failing operation.
    Ops {
        /// Operations, applied left to right
        #[arg(required = true)]
        ops: Vec<String>,
    },

    /// Concatenate text parts into one buffer
    Concat {
        /// Parts to join, in order
        #[arg(required = true)]
        parts: Vec<String>,
    },

    /// Check that lines form a uniform-width grid and print it
    Grid {
        /// Lines of the grid, top to bottom
        #[arg(required = true)]
        lines: Vec<String>,

        /// Print the grid this many times side by side
        #[arg(long, default_value = "1")]
        repeat: usize,
    },
}
