//! Iterators over a [`SqList`][crate::SqList].
//!
//! [`Iter`] borrows the list and may be cloned to restart the walk; [`IntoIter`] takes the
//! list by value.

use core::fmt;
use core::iter::FusedIterator;
use core::mem::MaybeUninit;
use core::ptr;

/// Iterates over references, head to tail.
///
/// # Examples
///
/// ```
/// use sqlist::SqList;
/// let list: SqList<u8, 4> = SqList::try_from([1, 2, 3]).unwrap();
/// let iter = list.iter();
/// assert_eq!(iter.clone().sum::<u8>(), 6);
/// assert_eq!(iter.max(), Some(&3));
/// ```
pub struct Iter<'a, T> {
    inner: core::slice::Iter<'a, T>,
}

// No `T: Clone` bound: only the cursor is copied.
impl<'a, T> Clone for Iter<'a, T> {
    #[inline]
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.as_slice()).finish()
    }
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub(crate) fn new(values: &'a [T]) -> Self {
        Iter {
            inner: values.iter(),
        }
    }

    /// The elements not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.inner.as_slice()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline]
    fn count(self) -> usize {
        self.inner.len()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next_back()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// Iterates over owned elements. Elements that are never yielded are dropped with the
/// iterator.
///
/// # Examples
///
/// ```
/// use sqlist::SqList;
/// let list: SqList<String, 4> =
///     SqList::try_from([String::from("x"), String::from("y")]).unwrap();
/// let owned: Vec<String> = list.into_iter().collect();
/// assert_eq!(owned, ["x", "y"]);
/// ```
pub struct IntoIter<T, const C: usize> {
    // Slots [start, end) are initialized and owned by the iterator.
    data: [MaybeUninit<T>; C],
    start: usize,
    end: usize,
}

impl<T, const C: usize> IntoIter<T, C> {
    #[inline]
    pub(crate) fn new(data: [MaybeUninit<T>; C], len: usize) -> Self {
        debug_assert!(len <= C);
        IntoIter {
            data,
            start: 0,
            end: len,
        }
    }

    /// The elements not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // Safety: slots [start, end) are initialized.
        unsafe {
            core::slice::from_raw_parts(
                self.data.as_ptr().add(self.start).cast::<T>(),
                self.end - self.start,
            )
        }
    }
}

impl<T: fmt::Debug, const C: usize> fmt::Debug for IntoIter<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, const C: usize> Iterator for IntoIter<T, C> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.start < self.end {
            let index = self.start;
            self.start += 1;
            // Safety: the slot was initialized and is now outside [start, end).
            Some(unsafe { self.data[index].assume_init_read() })
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }

    #[inline]
    fn count(self) -> usize {
        self.end - self.start
    }
}

impl<T, const C: usize> DoubleEndedIterator for IntoIter<T, C> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.start < self.end {
            self.end -= 1;
            // Safety: the slot was initialized and is now outside [start, end).
            Some(unsafe { self.data[self.end].assume_init_read() })
        } else {
            None
        }
    }
}

impl<T, const C: usize> ExactSizeIterator for IntoIter<T, C> {
    #[inline]
    fn len(&self) -> usize {
        self.end - self.start
    }
}

impl<T, const C: usize> FusedIterator for IntoIter<T, C> {}

impl<T, const C: usize> Drop for IntoIter<T, C> {
    fn drop(&mut self) {
        let (start, end) = (self.start, self.end);
        self.start = end;
        unsafe {
            let rest = core::slice::from_raw_parts_mut(
                self.data.as_mut_ptr().add(start).cast::<T>(),
                end - start,
            );
            ptr::drop_in_place(rest);
        }
    }
}
