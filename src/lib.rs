//! `seqkit` is a toolkit of generic operations over ordered sequences: filter,
//! map, fold, reduce, generate, join, unique, remove, resize, search, swap,
//! count, frequency, compare, and conversions between numbers and strings.
//!
//! Conventions:
//! * Sequences come in as slices (`&[T]`) and go out as new `Vec`s. The only
//!   function that changes its argument is `swap`, which takes `&mut [T]`.
//! * Order is preserved: `filter`, `map`, `unique`, `remove`, `sub_slice`,
//!   `copy`, and `join` keep elements in the order they were given.
//! * A search that misses returns the length of the sequence searched.
//! * Bad indexes panic. Text that doesn't parse as a number is a
//!   [`ConvertError`].
//!
//! The `args` and `calculate` modules are the command-line front end used by
//! the `seqkit` binary.

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![deny(missing_docs)]

pub mod args;
pub mod calculate;
pub mod convert;
mod error;
mod search;
mod seq;
mod set;
mod slice;
mod tally;

pub use error::{ConvertError, Result};
pub use search::{compare, contains, equal, search, search_sub_slice};
pub use seq::{filter, fold, generate, map, reduce, to_index_map};
pub use set::{remove, remove_all, unique};
pub use slice::{copy, join, resize, sub_slice, swap};
pub use tally::{count, freq, Frequencies};
