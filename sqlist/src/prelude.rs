//! Single module with all `sqlist` exports
//!
//! # Examples
//!
//! Import all into current scope:
//!
//! ```
//! use sqlist::prelude::*;
//! let list: SqList<u8, 2> = SqList::new();
//! assert_eq!(list.locate(&1), NOT_FOUND);
//! ```
//!
//! Import all, named:
//!
//! ```
//! use sqlist::prelude as sq;
//! let err = sq::Error::EmptyList;
//! # let _ = err;
//! ```

pub use crate::error::{Error, InsertError};
pub use crate::iter::{IntoIter, Iter};
pub use crate::list::{SqList, DEFAULT_CAPACITY, NOT_FOUND};
#[cfg(feature = "macro")]
pub use crate::sqlist;
