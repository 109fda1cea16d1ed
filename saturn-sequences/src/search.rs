//! Searching over read-only slices.
//!
//! Both routines return the index of a matching element, or `None` when the
//! value is not present. Any container exposing a slice view (for example
//! [`ResizableArray::as_slice`]) can be searched directly.
//!
//! [`ResizableArray::as_slice`]: crate::generic::resizable_array::ResizableArray::as_slice

use core::cmp::Ordering;

/// Returns the index of the first element equal to `value`. O(n).
///
/// # Examples
///
/// ```rust
/// use saturn_sequences::search::linear_search;
///
/// assert_eq!(linear_search(&[4, 2, 4], &4), Some(0));
/// assert_eq!(linear_search(&[4, 2, 4], &3), None);
/// ```
pub fn linear_search<T: PartialEq>(items: &[T], value: &T) -> Option<usize> {
    items.iter().position(|item| item == value)
}

/// Binary search over `items`, which must be sorted in ascending order.
///
/// Sortedness is not checked; on unsorted input the result is unspecified
/// but the call still terminates. With duplicates, any matching index may
/// be returned. O(log n).
///
/// # Examples
///
/// ```rust
/// use saturn_sequences::search::binary_search;
///
/// let items = [1, 3, 5, 7, 9];
/// assert_eq!(binary_search(&items, &7), Some(3));
/// assert_eq!(binary_search(&items, &4), None);
/// ```
pub fn binary_search<T: Ord>(items: &[T], value: &T) -> Option<usize> {
    let mut low = 0;
    let mut high = items.len();

    // Half-open window [low, high).
    while low < high {
        let mid = low + (high - low) / 2;
        match items[mid].cmp(value) {
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
            Ordering::Equal => return Some(mid),
        }
    }
    None
}
