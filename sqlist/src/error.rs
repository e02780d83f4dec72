//! Errors reported by [`SqList`][crate::SqList] operations.
//!
//! Every failing operation leaves the list exactly as it was before the call.

use core::fmt;

/// Why an operation on a [`SqList`][crate::SqList] was rejected.
///
/// # Examples
///
/// ```
/// use sqlist::{Error, SqList};
/// let mut list: SqList<u8, 4> = SqList::new();
/// assert_eq!(list.delete(1), Err(Error::EmptyList));
/// assert_eq!(list.get(1), Err(Error::InvalidPosition { position: 1, len: 0 }));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    /// An insert was attempted while `len() == capacity()`.
    #[error("list is full (capacity {capacity})")]
    CapacityExceeded {
        /// The fixed capacity of the list.
        capacity: usize,
    },

    /// The position is outside the range the operation accepts.
    #[error("position {position} is out of range for a list of length {len}")]
    InvalidPosition {
        /// The 1-based position that was requested.
        position: usize,
        /// The length of the list at the time of the call.
        len: usize,
    },

    /// A delete was attempted on a list with no elements.
    #[error("list is empty")]
    EmptyList,
}

/// An [`Error`] from an operation that takes ownership of a value, together with
/// that value.
///
/// The rejected value is never dropped by the list; get it back with
/// [`InsertError::into_value`].
///
/// # Examples
///
/// ```
/// use sqlist::{Error, SqList};
/// let mut list: SqList<String, 1> = SqList::new();
/// list.push(String::from("first")).unwrap();
/// let err = list.push(String::from("second")).unwrap_err();
/// assert_eq!(err.error(), Error::CapacityExceeded { capacity: 1 });
/// assert_eq!(err.into_value(), "second");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct InsertError<T> {
    error: Error,
    value: T,
}

impl<T> InsertError<T> {
    #[inline]
    pub(crate) fn new(error: Error, value: T) -> Self {
        InsertError { error, value }
    }

    /// The reason the value was rejected.
    #[inline]
    pub fn error(&self) -> Error {
        self.error
    }

    /// Returns the value that could not be stored.
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> fmt::Debug for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl<T> core::error::Error for InsertError<T> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl<T> From<InsertError<T>> for Error {
    #[inline]
    fn from(e: InsertError<T>) -> Error {
        e.error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn messages() {
        assert_eq!(
            Error::CapacityExceeded { capacity: 3 }.to_string(),
            "list is full (capacity 3)"
        );
        assert_eq!(
            Error::InvalidPosition { position: 0, len: 2 }.to_string(),
            "position 0 is out of range for a list of length 2"
        );
        assert_eq!(Error::EmptyList.to_string(), "list is empty");
    }

    #[test]
    fn insert_error_keeps_value_and_converts() {
        let e = InsertError::new(Error::EmptyList, 7u32);
        assert_eq!(e.to_string(), "list is empty");
        let kind: Error = e.clone().into();
        assert_eq!(kind, Error::EmptyList);
        assert_eq!(e.into_value(), 7);
    }

    #[test]
    fn source_is_the_kind() {
        use core::error::Error as _;
        let e = InsertError::new(Error::CapacityExceeded { capacity: 1 }, ());
        let source = e.source().unwrap();
        assert_eq!(source.to_string(), "list is full (capacity 1)");
    }
}
