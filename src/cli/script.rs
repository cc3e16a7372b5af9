// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Operation scripts for `growbuf ops`.
//!
//! Each argument is one operation, `name` or `name:arg[:arg]`:
//!
//! | Op                | Effect                                  |
//! |-------------------|-----------------------------------------|
//! | `append:V`        | add `V` at the end                      |
//! | `prepend:V`       | add `V` at the front                    |
//! | `insert:I:V`      | insert `V` before index `I`             |
//! | `erase:I`         | remove the element at `I`               |
//! | `erase-range:A:B` | remove `[A, B)`                         |
//! | `remove-last`     | pop from the end                        |
//! | `remove-first`    | pop from the front                      |
//! | `resize:N`        | reallocate to capacity `N`              |

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context};
use growbuf::DynamicArray;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Append(i64),
    Prepend(i64),
    Insert { index: usize, value: i64 },
    Erase(usize),
    EraseRange { first: usize, last: usize },
    RemoveLast,
    RemoveFirst,
    Resize(usize),
}

/// What an op produced besides its effect on the array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Removed(i64),
}

fn arg<T: FromStr>(op: &str, args: &[&str], at: usize) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = args
        .get(at)
        .ok_or_else(|| anyhow!("`{}` is missing argument {}", op, at + 1))?;
    raw.parse()
        .with_context(|| format!("bad argument `{}` for `{}`", raw, op))
}

impl FromStr for Op {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let mut parts = s.split(':');
        let name = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        let (op, arity) = match name {
            "append" => (Op::Append(arg(name, &args, 0)?), 1),
            "prepend" => (Op::Prepend(arg(name, &args, 0)?), 1),
            "insert" => (
                Op::Insert {
                    index: arg(name, &args, 0)?,
                    value: arg(name, &args, 1)?,
                },
                2,
            ),
            "erase" => (Op::Erase(arg(name, &args, 0)?), 1),
            "erase-range" => (
                Op::EraseRange {
                    first: arg(name, &args, 0)?,
                    last: arg(name, &args, 1)?,
                },
                2,
            ),
            "remove-last" => (Op::RemoveLast, 0),
            "remove-first" => (Op::RemoveFirst, 0),
            "resize" => (Op::Resize(arg(name, &args, 0)?), 1),
            other => bail!("unknown operation `{}`", other),
        };

        if args.len() > arity {
            bail!("`{}` takes {} argument(s), got {}", name, arity, args.len());
        }
        Ok(op)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Append(v) => write!(f, "append:{}", v),
            Op::Prepend(v) => write!(f, "prepend:{}", v),
            Op::Insert { index, value } => write!(f, "insert:{}:{}", index, value),
            Op::Erase(i) => write!(f, "erase:{}", i),
            Op::EraseRange { first, last } => write!(f, "erase-range:{}:{}", first, last),
            Op::RemoveLast => f.write_str("remove-last"),
            Op::RemoveFirst => f.write_str("remove-first"),
            Op::Resize(n) => write!(f, "resize:{}", n),
        }
    }
}

impl Op {
    /// Run this op against `array`. Indices become cursors from `begin()`.
    pub fn apply(self, array: &mut DynamicArray<i64>) -> growbuf::Result<Outcome> {
        match self {
            Op::Append(v) => array.append(v)?,
            Op::Prepend(v) => array.prepend(v)?,
            Op::Insert { index, value } => {
                array.insert_at(array.begin().advance(index), value)?;
            }
            Op::Erase(index) => {
                array.erase_at(array.begin().advance(index))?;
            }
            Op::EraseRange { first, last } => {
                let begin = array.begin();
                array.erase_range(begin.advance(first), begin.advance(last))?;
            }
            Op::RemoveLast => return array.remove_last().map(Outcome::Removed),
            Op::RemoveFirst => return array.remove_first().map(Outcome::Removed),
            Op::Resize(n) => array.resize(n)?,
        }
        Ok(Outcome::Done)
    }
}

/// Parse every argument up front so a typo fails before anything runs.
pub fn parse_script(raw: &[String]) -> anyhow::Result<Vec<Op>> {
    raw.iter()
        .enumerate()
        .map(|(i, s)| {
            s.parse::<Op>()
                .with_context(|| format!("operation {} (`{}`)", i + 1, s))
        })
        .collect()
}
