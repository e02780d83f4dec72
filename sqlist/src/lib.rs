#![doc = crate::doc_macro::with_diagrams!(
//! # `sqlist`
//! A fixed-capacity sequential list.
//!
//! 1. [Summary](#summary)
//! 1. [Examples](#examples)
//! 1. [Positions](#positions)
//! 1. [Errors](#errors)
//! 1. [Logging](#logging)
//! 1. [Feature flags](#feature-flags)
//!
//! # Summary
//!
//! [`SqList<T, C>`] is an ordered sequence of at most `C` elements, stored inline in a
//! fixed-size array with a length counter. It never allocates. Elements are addressed by
//! 1-based *position*, and every operation that can fail says so in its return type
//! instead of panicking.
//!
//! | Operation        | Method                                 | Cost  |
//! |------------------|----------------------------------------|-------|
//! | Initialize       | [`SqList::new`]                        | O(1)  |
//! | Insert at        | [`SqList::insert`], [`SqList::push`]   | O(n)  |
//! | Delete at        | [`SqList::delete`]                     | O(n)  |
//! | Get at           | [`SqList::get`], [`SqList::get_mut`]   | O(1)  |
//! | Update at        | [`SqList::replace`]                    | O(1)  |
//! | Find by value    | [`SqList::locate`], [`SqList::find`]   | O(n)  |
//! | Enumerate        | [`SqList::iter`], `into_iter()`        | O(n)  |
//! | Print            | [`Display`][core::fmt::Display]        | O(n)  |
//!
//! # Examples
//!
//! ```
//! use sqlist::prelude::*;
//!
//! let mut list: SqList<i32> = SqList::new();
//! list.insert(1, 10)?;
//! list.insert(2, 20)?;
//! list.insert(3, 30)?;
//! list.insert(2, 99)?;
//! assert_eq!(list.to_string(), "10 99 20 30");
//!
//! assert_eq!(list.delete(3)?, 20);
//! assert_eq!(list.to_string(), "10 99 30");
//! assert_eq!(list.locate(&99), 2);
//! assert_eq!(list.get(2)?, &99);
//! # Ok::<(), sqlist::Error>(())
//! ```
//!
//! With the `macro` feature, lists can be written as literals. An explicit capacity is
//! checked against the number of elements at compile time:
//!
//! ```
//! # #[cfg(feature = "macro")]
//! # {
//! use sqlist::prelude::*;
//! let list: SqList<&str, 4> = sqlist!["a", "b", "c"; capacity = 4];
//! assert_eq!(list.locate(&"c"), 3);
//! # }
//! ```
//!
//! # Positions
//!
//! Position `p` refers to the element at storage index `p - 1`. Inserting at `p` shifts
//! the elements from `p` onward towards the tail, walking from the tail backwards so
//! that nothing is overwritten before it has moved:
//!
//! ```svgbob
//! "insert(2, 99)"
//!
//!   +----+----+----+----+
//!   | 10 | 20 | 30 |    |
//!   +----+----+----+----+
//!          |    |    ^
//!          |    '----'  "1: move 30"
//!          |    ^
//!          '----'       "2: move 20"
//!
//!   +----+----+----+----+
//!   | 10 | 99 | 20 | 30 |   "3: write 99"
//!   +----+----+----+----+
//! ```
//!
//! Deleting at `p` shifts the elements after `p` towards the head. Valid positions are
//! `1..=len + 1` for insert and `1..=len` for everything else.
//!
//! # Errors
//!
//! Failures are reported as an [`Error`]:
//!
//! * [`Error::CapacityExceeded`]: insert on a full list.
//! * [`Error::InvalidPosition`]: position outside the operation's valid range.
//! * [`Error::EmptyList`]: delete on an empty list.
//!
//! Operations that take a value by move report an [`InsertError<T>`], which hands the
//! value back. A failed call never modifies the list.
//!
//! # Logging
//!
//! Rejected operations are logged at `debug` level, and successful inserts and deletes
//! at `trace` level, through the [`log`](https://docs.rs/log) facade. Nothing is
//! printed unless the application installs a logger.
)]
//! # Feature flags
//!
//! The following feature flags exist, which can turn on some dependencies.
//!
//! * `macro`. Enables the procedural macro [`sqlist!`][crate::sqlist]. Adds a dependency on `sqlist_macro`, `syn` and `quote`.
//! * `doc`. Renders the diagrams in this documentation as SVG. Adds a dependency on `svgbobdoc`.
//!

#![no_std]

#[cfg(test)]
extern crate std;

pub mod error;
pub mod iter;
pub mod list;
#[doc(hidden)]
pub mod macro_support;
pub mod prelude;

mod doc_macro;
#[cfg(test)]
mod test_type;

pub use error::{Error, InsertError};
pub use list::{SqList, DEFAULT_CAPACITY, NOT_FOUND};
#[cfg(feature = "macro")]
pub use sqlist_macro::sqlist;
