//! Comparison sorts shared by the contiguous containers.
//!
//! Every routine yields non-descending order per `Ord`. `insertion_sort`,
//! `merge_sort` and `quick_sort` are stable; `selection_sort` is not, in
//! exchange for performing at most `n - 1` swaps.
//!
//! The in-place routines work on slices. The divide-and-conquer routines take
//! the storage by value and hand back a new `Vec`, which keeps them free of
//! `Clone` bounds.

use core::cmp::Ordering;

/// Stable in-place insertion sort. O(n²) worst case, O(n) on sorted input.
///
/// # Examples
///
/// ```rust
/// use saturn_sequences::sort::insertion_sort;
///
/// let mut items = [5, 3, 8, 1];
/// insertion_sort(&mut items);
/// assert_eq!(items, [1, 3, 5, 8]);
/// ```
pub fn insertion_sort<T: Ord>(items: &mut [T]) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && items[j - 1] > items[j] {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// In-place selection sort. O(n²) comparisons, at most `n - 1` swaps.
pub fn selection_sort<T: Ord>(items: &mut [T]) {
    let len = items.len();
    for i in 0..len.saturating_sub(1) {
        let mut min_index = i;
        for j in (i + 1)..len {
            if items[j] < items[min_index] {
                min_index = j;
            }
        }
        if min_index != i {
            items.swap(i, min_index);
        }
    }
}

/// Stable top-down merge sort. O(n log n).
///
/// # Examples
///
/// ```rust
/// use saturn_sequences::sort::merge_sort;
///
/// assert_eq!(merge_sort(vec![9, 2, 7, 2]), vec![2, 2, 7, 9]);
/// ```
pub fn merge_sort<T: Ord>(mut items: Vec<T>) -> Vec<T> {
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    merge(merge_sort(items), merge_sort(right))
}

fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        // Ties go left to keep the sort stable.
        if r < l {
            merged.extend(right.next());
        } else {
            merged.extend(left.next());
        }
    }

    merged.extend(left);
    merged.extend(right);
    merged
}

/// Stable quick sort using a three-way partition around the middle element.
///
/// Only the smaller partition is sorted recursively; the larger one is
/// partitioned again in a loop, so the recursion depth stays O(log n). Once a
/// run of unbalanced partitions uses up [`partition_budget`], the remainder is
/// merge sorted, which caps the worst case at O(n log n).
///
/// # Examples
///
/// ```rust
/// use saturn_sequences::sort::quick_sort;
///
/// assert_eq!(quick_sort(vec![3, 1, 2, 3, 0]), vec![0, 1, 2, 3, 3]);
/// ```
pub fn quick_sort<T: Ord>(items: Vec<T>) -> Vec<T> {
    let budget = partition_budget(items.len());
    quick_sort_within(items, budget)
}

/// Partition rounds allowed along one path of a quick sort over `len`
/// elements before it falls back to merge sort: twice the bit length of `len`.
pub fn partition_budget(len: usize) -> usize {
    2 * (usize::BITS - len.leading_zeros()) as usize
}

fn quick_sort_within<T: Ord>(items: Vec<T>, mut budget: usize) -> Vec<T> {
    let mut sorted = Vec::with_capacity(items.len());
    // Sorted runs that belong after everything still pending, innermost last.
    let mut suffixes = Vec::new();
    let mut pending = items;

    while pending.len() > 1 && budget > 0 {
        budget -= 1;
        let (less, mut equal, greater) = partition(pending);

        if less.len() <= greater.len() {
            sorted.append(&mut quick_sort_within(less, budget));
            sorted.append(&mut equal);
            pending = greater;
        } else {
            equal.append(&mut quick_sort_within(greater, budget));
            suffixes.push(equal);
            pending = less;
        }
    }

    if pending.len() > 1 {
        pending = merge_sort(pending);
    }
    sorted.append(&mut pending);
    while let Some(mut suffix) = suffixes.pop() {
        sorted.append(&mut suffix);
    }
    sorted
}

/// Splits `items` around its middle element, keeping the original order
/// inside each part.
fn partition<T: Ord>(items: Vec<T>) -> (Vec<T>, Vec<T>, Vec<T>) {
    let pivot = &items[items.len() / 2];
    let orders: Vec<Ordering> = items.iter().map(|item| item.cmp(pivot)).collect();

    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();
    for (item, order) in items.into_iter().zip(orders) {
        match order {
            Ordering::Less => less.push(item),
            Ordering::Equal => equal.push(item),
            Ordering::Greater => greater.push(item),
        }
    }
    (less, equal, greater)
}
