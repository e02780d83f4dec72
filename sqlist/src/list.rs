#![doc = crate::doc_macro::with_diagrams!(
//! The fixed-capacity sequential list and its operations.
//!
//! A [`SqList<T, C>`] stores up to `C` elements inline, in a contiguous prefix of its
//! backing array. Positions are 1-based:
//!
//! ```svgbob
//! "position"     1      2      3      4
//!             +------+------+------+------+------+-----+------+
//! "data"      |  10  |  99  |  20  |  30  |  ?   | ... |  ?   |
//!             +------+------+------+------+------+-----+------+
//! "index"        0      1      2      3      4           C-1
//!             '-------------.-------------'
//!                           |
//!                        "len = 4"
//! ```
//!
//! Inserting at position `p` moves the elements at positions `p..=len` one slot to the
//! right; deleting at `p` moves the elements at positions `p+1..=len` one slot to the left.
)]

use crate::error::{Error, InsertError};
use crate::iter::{IntoIter, Iter};
use core::fmt;
use core::mem::{ManuallyDrop, MaybeUninit};
use core::ptr;

/// Capacity used when `C` is not specified.
pub const DEFAULT_CAPACITY: usize = 100;

/// Returned by [`SqList::locate`] when no element matches.
pub const NOT_FOUND: usize = 0;

/// A fixed-capacity ordered sequence with 1-based positional access.
///
/// Elements are stored inline in an array of `C` slots; nothing is heap allocated.
/// Every operation that can fail returns a [`Result`], and a failed operation leaves
/// the list unchanged.
///
/// # Examples
///
/// ```
/// use sqlist::SqList;
/// let mut list: SqList<i32> = SqList::new();
/// list.insert(1, 10).unwrap();
/// list.insert(2, 20).unwrap();
/// list.insert(3, 30).unwrap();
/// list.insert(2, 99).unwrap();
/// assert_eq!(list.as_slice(), &[10, 99, 20, 30]);
///
/// assert_eq!(list.delete(3), Ok(20));
/// assert_eq!(list.as_slice(), &[10, 99, 30]);
/// assert_eq!(list.locate(&99), 2);
/// assert_eq!(list.get(2), Ok(&99));
/// ```
pub struct SqList<T, const C: usize = DEFAULT_CAPACITY> {
    // Slots [0, len) are initialized, slots [len, C) are not.
    data: [MaybeUninit<T>; C],
    len: usize,
}

#[inline(never)]
#[cold]
fn rejected(op: &'static str, error: Error) -> Error {
    log::debug!("sqlist {} rejected: {}", op, error);
    error
}

impl<T, const C: usize> SqList<T, C> {
    /// Creates an empty list.
    ///
    /// ```
    /// use sqlist::SqList;
    /// let list: SqList<u64, 8> = SqList::new();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.capacity(), 8);
    /// ```
    #[inline]
    pub const fn new() -> Self {
        SqList {
            data: [const { MaybeUninit::uninit() }; C],
            len: 0,
        }
    }

    /// Number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether another insert would fail with [`Error::CapacityExceeded`].
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == C
    }

    /// The fixed maximum number of elements, `C`.
    #[inline]
    pub const fn capacity(&self) -> usize {
        C
    }

    /// The stored elements, in order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // Safety: the first `len` slots are initialized.
        unsafe { core::slice::from_raw_parts(self.data.as_ptr().cast::<T>(), self.len) }
    }

    /// The stored elements, in order, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // Safety: the first `len` slots are initialized.
        unsafe { core::slice::from_raw_parts_mut(self.data.as_mut_ptr().cast::<T>(), self.len) }
    }

    /// Maps a 1-based position in `[1, len]` to its storage index.
    #[inline]
    fn index_of(&self, position: usize) -> Result<usize, Error> {
        if position == 0 || position > self.len {
            Err(Error::InvalidPosition {
                position,
                len: self.len,
            })
        } else {
            Ok(position - 1)
        }
    }

    /// Inserts `value` so that it ends up at `position`, shifting the elements at
    /// `position` and after one place towards the tail.
    ///
    /// Valid positions are `1..=len() + 1`. Fails with [`Error::CapacityExceeded`] if the
    /// list is full, otherwise with [`Error::InvalidPosition`] if `position` is out of
    /// range. On failure the value is returned inside the [`InsertError`].
    ///
    /// ```
    /// use sqlist::{Error, SqList};
    /// let mut list: SqList<char, 3> = SqList::new();
    /// list.insert(1, 'b').unwrap();
    /// list.insert(1, 'a').unwrap();
    /// assert_eq!(list.as_slice(), &['a', 'b']);
    ///
    /// let err = list.insert(4, 'z').unwrap_err();
    /// assert_eq!(err.error(), Error::InvalidPosition { position: 4, len: 2 });
    /// assert_eq!(err.into_value(), 'z');
    /// ```
    pub fn insert(&mut self, position: usize, value: T) -> Result<(), InsertError<T>> {
        if self.len == C {
            let e = Error::CapacityExceeded { capacity: C };
            return Err(InsertError::new(rejected("insert", e), value));
        }
        if position == 0 || position > self.len + 1 {
            let e = Error::InvalidPosition {
                position,
                len: self.len,
            };
            return Err(InsertError::new(rejected("insert", e), value));
        }
        let index = position - 1;
        unsafe {
            let base = self.data.as_mut_ptr().cast::<T>();
            // Overlapping move of [index, len) to [index + 1, len + 1); len < C so the
            // destination stays in bounds.
            ptr::copy(base.add(index), base.add(index + 1), self.len - index);
            ptr::write(base.add(index), value);
        }
        self.len += 1;
        log::trace!("sqlist insert at {}, len {}", position, self.len);
        Ok(())
    }

    /// Appends `value` at position `len() + 1`.
    ///
    /// Fails only with [`Error::CapacityExceeded`].
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), InsertError<T>> {
        self.insert(self.len + 1, value)
    }

    /// Removes and returns the element at `position`, shifting the elements after it
    /// one place towards the head.
    ///
    /// Fails with [`Error::EmptyList`] if the list is empty, otherwise with
    /// [`Error::InvalidPosition`] if `position` is not in `1..=len()`.
    ///
    /// ```
    /// use sqlist::{Error, SqList};
    /// let mut list: SqList<i32, 4> = SqList::try_from([1, 2, 3]).unwrap();
    /// assert_eq!(list.delete(1), Ok(1));
    /// assert_eq!(list.as_slice(), &[2, 3]);
    /// assert_eq!(list.delete(3), Err(Error::InvalidPosition { position: 3, len: 2 }));
    /// ```
    pub fn delete(&mut self, position: usize) -> Result<T, Error> {
        if self.len == 0 {
            return Err(rejected("delete", Error::EmptyList));
        }
        let index = self.index_of(position).map_err(|e| rejected("delete", e))?;
        let value = unsafe {
            let base = self.data.as_mut_ptr().cast::<T>();
            let value = ptr::read(base.add(index));
            ptr::copy(base.add(index + 1), base.add(index), self.len - index - 1);
            value
        };
        self.len -= 1;
        log::trace!("sqlist delete at {}, len {}", position, self.len);
        Ok(value)
    }

    /// Returns the element at `position`.
    ///
    /// Fails with [`Error::InvalidPosition`] if `position` is not in `1..=len()`, which
    /// includes every position of an empty list.
    #[inline]
    pub fn get(&self, position: usize) -> Result<&T, Error> {
        let index = self.index_of(position).map_err(|e| rejected("get", e))?;
        Ok(&self.as_slice()[index])
    }

    /// Returns the element at `position` mutably. Fails as [`SqList::get`] does.
    #[inline]
    pub fn get_mut(&mut self, position: usize) -> Result<&mut T, Error> {
        let index = self.index_of(position).map_err(|e| rejected("get_mut", e))?;
        Ok(&mut self.as_mut_slice()[index])
    }

    /// Overwrites the element at `position` with `value` and returns the previous one.
    ///
    /// ```
    /// use sqlist::SqList;
    /// let mut list: SqList<&str, 2> = SqList::try_from(["old"]).unwrap();
    /// assert_eq!(list.replace(1, "new").unwrap(), "old");
    /// assert_eq!(list.get(1), Ok(&"new"));
    /// assert_eq!(list.replace(2, "x").unwrap_err().into_value(), "x");
    /// ```
    pub fn replace(&mut self, position: usize, value: T) -> Result<T, InsertError<T>> {
        match self.index_of(position) {
            Ok(index) => Ok(core::mem::replace(&mut self.as_mut_slice()[index], value)),
            Err(e) => Err(InsertError::new(rejected("replace", e), value)),
        }
    }

    /// The position of the first element equal to `value`, or `None`.
    #[inline]
    pub fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|x| x == value).map(|index| index + 1)
    }

    /// The position of the first element equal to `value`, or [`NOT_FOUND`] (zero).
    ///
    /// ```
    /// use sqlist::{SqList, NOT_FOUND};
    /// let list: SqList<u8, 8> = SqList::try_from([4, 7, 7]).unwrap();
    /// assert_eq!(list.locate(&7), 2);
    /// assert_eq!(list.locate(&5), NOT_FOUND);
    /// ```
    #[inline]
    pub fn locate(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.find(value).unwrap_or(NOT_FOUND)
    }

    /// Iterate over references, head to tail.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_slice())
    }

    /// Drops every element. The capacity is unchanged.
    pub fn clear(&mut self) {
        let len = self.len;
        // Reset first: a panicking destructor must not lead to a second drop.
        self.len = 0;
        unsafe {
            let live = core::slice::from_raw_parts_mut(self.data.as_mut_ptr().cast::<T>(), len);
            ptr::drop_in_place(live);
        }
    }

    /// Builds a list from an iterator, failing with [`Error::CapacityExceeded`] if it
    /// yields more than `C` elements.
    ///
    /// ```
    /// use sqlist::{Error, SqList};
    /// let list = SqList::<u32, 4>::try_from_iter(1..=4).unwrap();
    /// assert_eq!(list.as_slice(), &[1, 2, 3, 4]);
    /// assert_eq!(
    ///     SqList::<u32, 4>::try_from_iter(1..=5).unwrap_err(),
    ///     Error::CapacityExceeded { capacity: 4 },
    /// );
    /// ```
    pub fn try_from_iter<I>(iter: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = SqList::new();
        for value in iter {
            list.push(value)?;
        }
        Ok(list)
    }

    /// Takes the backing storage, leaving nothing for `self` to drop.
    #[inline]
    pub(crate) fn into_raw_parts(self) -> ([MaybeUninit<T>; C], usize) {
        let this = ManuallyDrop::new(self);
        // Safety: `this` is never used or dropped again.
        let data = unsafe { ptr::read(&this.data) };
        (data, this.len)
    }
}

impl<T, const C: usize> Drop for SqList<T, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, const C: usize> Default for SqList<T, C> {
    #[inline]
    fn default() -> Self {
        SqList::new()
    }
}

impl<T: Clone, const C: usize> Clone for SqList<T, C> {
    fn clone(&self) -> Self {
        let mut out = SqList::new();
        for value in self.iter() {
            // `len` is bumped per element so a panicking `clone` drops only what was written.
            out.data[out.len].write(value.clone());
            out.len += 1;
        }
        out
    }
}

impl<T: PartialEq, const C: usize> PartialEq for SqList<T, C> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const C: usize> Eq for SqList<T, C> {}

impl<T: fmt::Debug, const C: usize> fmt::Debug for SqList<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Space-separated elements, head to tail. An empty list prints nothing.
///
/// ```
/// use sqlist::SqList;
/// let list: SqList<i32, 4> = SqList::try_from([10, 99, 30]).unwrap();
/// assert_eq!(list.to_string(), "10 99 30");
/// ```
impl<T: fmt::Display, const C: usize> fmt::Display for SqList<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.iter();
        if let Some(first) = values.next() {
            fmt::Display::fmt(first, f)?;
            for value in values {
                f.write_str(" ")?;
                fmt::Display::fmt(value, f)?;
            }
        }
        Ok(())
    }
}

impl<T, const C: usize, const N: usize> TryFrom<[T; N]> for SqList<T, C> {
    type Error = Error;

    fn try_from(values: [T; N]) -> Result<Self, Error> {
        if N > C {
            return Err(rejected(
                "try_from",
                Error::CapacityExceeded { capacity: C },
            ));
        }
        SqList::try_from_iter(values)
    }
}

impl<'a, T, const C: usize> IntoIterator for &'a SqList<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, const C: usize> IntoIterator for SqList<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T, C>;

    #[inline]
    fn into_iter(self) -> IntoIter<T, C> {
        let (data, len) = self.into_raw_parts();
        IntoIter::new(data, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_type::DropCounter;
    use std::string::{String, ToString};
    use std::vec::Vec;

    fn abc() -> SqList<String, 4> {
        SqList::try_from(["a".to_string(), "b".to_string(), "c".to_string()]).unwrap()
    }

    #[test]
    fn reference_scenario() {
        let mut list: SqList<i32> = SqList::new();
        list.insert(1, 10).unwrap();
        list.insert(2, 20).unwrap();
        list.insert(3, 30).unwrap();
        list.insert(2, 99).unwrap();
        assert_eq!(list.as_slice(), &[10, 99, 20, 30]);
        assert_eq!(list.delete(3), Ok(20));
        assert_eq!(list.as_slice(), &[10, 99, 30]);
        assert_eq!(list.locate(&99), 2);
        assert_eq!(list.get(2), Ok(&99));
    }

    #[test]
    fn out_of_range_inputs_are_rejected() {
        let mut list: SqList<i32> = SqList::try_from([10, 99, 30]).unwrap();
        assert_eq!(
            list.insert(0, 100).unwrap_err().error(),
            Error::InvalidPosition { position: 0, len: 3 }
        );
        assert_eq!(
            list.insert(100, 200).unwrap_err().error(),
            Error::InvalidPosition { position: 100, len: 3 }
        );
        assert_eq!(list.delete(0), Err(Error::InvalidPosition { position: 0, len: 3 }));
        assert_eq!(list.delete(100), Err(Error::InvalidPosition { position: 100, len: 3 }));
        assert_eq!(list.as_slice(), &[10, 99, 30]);
    }

    #[test]
    fn insert_at_head_middle_and_tail() {
        let mut list: SqList<u8, 8> = SqList::new();
        list.insert(1, 3).unwrap();
        list.insert(1, 1).unwrap();
        list.insert(3, 4).unwrap();
        list.insert(2, 2).unwrap();
        assert_eq!(list.as_slice(), &[1, 2, 3, 4]);
        for (position, expected) in (1..=4).zip(1u8..) {
            assert_eq!(list.get(position), Ok(&expected));
        }
    }

    #[test]
    fn full_list_rejects_insert_before_checking_position() {
        let mut list: SqList<u8, 2> = SqList::try_from([1, 2]).unwrap();
        assert!(list.is_full());
        let err = list.insert(7, 9).unwrap_err();
        assert_eq!(err.error(), Error::CapacityExceeded { capacity: 2 });
        assert_eq!(err.into_value(), 9);
        assert_eq!(list.push(3).unwrap_err().error(), Error::CapacityExceeded { capacity: 2 });
        assert_eq!(list.as_slice(), &[1, 2]);
    }

    #[test]
    fn zero_capacity() {
        let mut list: SqList<u8, 0> = SqList::new();
        assert!(list.is_empty() && list.is_full());
        assert_eq!(list.push(1).unwrap_err().error(), Error::CapacityExceeded { capacity: 0 });
    }

    #[test]
    fn empty_list_errors() {
        let mut list: SqList<u8, 4> = SqList::new();
        assert_eq!(list.delete(1), Err(Error::EmptyList));
        assert_eq!(list.delete(0), Err(Error::EmptyList));
        assert_eq!(list.get(1), Err(Error::InvalidPosition { position: 1, len: 0 }));
        assert_eq!(list.get_mut(1), Err(Error::InvalidPosition { position: 1, len: 0 }));
        assert_eq!(list.locate(&0), NOT_FOUND);
        assert_eq!(list.find(&0), None);
    }

    #[test]
    fn delete_shifts_later_elements_back() {
        let mut list = abc();
        assert_eq!(list.delete(2).unwrap(), "b");
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(2).unwrap(), "c");
        assert_eq!(list.delete(2).unwrap(), "c");
        assert_eq!(list.delete(1).unwrap(), "a");
        assert!(list.is_empty());
    }

    #[test]
    fn locate_scans_past_the_first_element() {
        let list: SqList<i32, 8> = SqList::try_from([5, 6, 7, 6]).unwrap();
        assert_eq!(list.locate(&5), 1);
        assert_eq!(list.locate(&6), 2);
        assert_eq!(list.locate(&7), 3);
        assert_eq!(list.locate(&8), NOT_FOUND);
    }

    #[test]
    fn length_tracks_inserts_minus_deletes() {
        let mut list: SqList<usize, 16> = SqList::new();
        let mut expected = 0;
        for i in 0..40 {
            if i % 3 == 2 {
                if list.delete(1).is_ok() {
                    expected -= 1;
                }
            } else if list.insert(list.len() / 2 + 1, i).is_ok() {
                expected += 1;
            }
            assert_eq!(list.len(), expected);
        }
    }

    #[test]
    fn replace_and_get_mut() {
        let mut list = abc();
        *list.get_mut(1).unwrap() = "A".to_string();
        assert_eq!(list.replace(3, "C".to_string()).unwrap(), "c");
        assert_eq!(list.as_slice(), &["A", "b", "C"]);
        let err = list.replace(4, "D".to_string()).unwrap_err();
        assert_eq!(err.error(), Error::InvalidPosition { position: 4, len: 3 });
    }

    #[test]
    fn iteration_is_restartable() {
        let list = abc();
        let iter = list.iter();
        let first: Vec<&String> = iter.clone().collect();
        let second: Vec<&String> = iter.collect();
        assert_eq!(first, second);
        assert_eq!(list.iter().rev().next().unwrap(), "c");
        assert_eq!((&list).into_iter().len(), 3);
    }

    #[test]
    fn formatting() {
        let list = abc();
        assert_eq!(list.to_string(), "a b c");
        assert_eq!(std::format!("{:?}", list), r#"["a", "b", "c"]"#);
        assert_eq!(SqList::<i32, 1>::new().to_string(), "");
    }

    #[test]
    fn clone_and_eq() {
        let list = abc();
        let mut copy = list.clone();
        assert_eq!(list, copy);
        copy.delete(1).unwrap();
        assert_ne!(list, copy);
    }

    #[test]
    fn try_from_rejects_oversized_input() {
        assert_eq!(
            SqList::<u8, 2>::try_from([1, 2, 3]),
            Err(Error::CapacityExceeded { capacity: 2 })
        );
        assert_eq!(SqList::<u8, 2>::try_from([]).unwrap().len(), 0);
    }

    #[test]
    fn every_element_is_dropped_once() {
        let counter = DropCounter::new();
        {
            let mut list: SqList<_, 8> = SqList::new();
            for i in 0..6 {
                list.push(counter.make(i)).unwrap();
            }
            drop(list.delete(2).unwrap());
            assert_eq!(counter.dropped(), 1);
            drop(list.replace(1, counter.make(10)).unwrap());
            assert_eq!(counter.dropped(), 2);
            list.clear();
            assert_eq!(counter.dropped(), 7);
            list.push(counter.make(11)).unwrap();
            list.push(counter.make(12)).unwrap();
        }
        assert_eq!(counter.dropped(), 9);
        assert_eq!(counter.made(), 9);
    }

    #[test]
    fn rejected_insert_does_not_drop_value() {
        let counter = DropCounter::new();
        let mut list: SqList<_, 1> = SqList::new();
        list.push(counter.make(0)).unwrap();
        let value = list.push(counter.make(1)).unwrap_err().into_value();
        assert_eq!(counter.dropped(), 0);
        assert_eq!(value.id(), 1);
    }
}
