//! Functions called by code that `sqlist!` expands to. Not a stable API.

use crate::SqList;

/// Builds a list from the elements of a `sqlist!` invocation.
///
/// Panics if there are more than `C` elements. The macro rejects that case at compile
/// time whenever the capacity is an integer literal or left at its default.
#[inline]
pub fn from_array<T, const C: usize, const N: usize>(values: [T; N]) -> SqList<T, C> {
    match SqList::try_from(values) {
        Ok(list) => list,
        Err(_) => too_many_elements(N, C),
    }
}

#[inline(never)]
#[cold]
fn too_many_elements(given: usize, capacity: usize) -> ! {
    panic!(
        "sqlist! given {} elements but the capacity is {}",
        given, capacity
    )
}
