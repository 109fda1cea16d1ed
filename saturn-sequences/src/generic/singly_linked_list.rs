//! Singly-linked list built from owned boxes.
//!
//! Each node owns the rest of the chain through `next`, so only the head is
//! reachable in O(1). Operations at the back (`add_last`, `get_last`,
//! `remove_last`) walk the chain and cost O(n).

use core::cmp::Ordering;
use core::fmt;
use core::iter;
use core::mem;

use tracing::trace;

use crate::error::{
    check_exclusive, check_inclusive, check_range, require, CollectionError, CollectionResult,
};
use crate::generic::sequence::LinkedSequence;
use crate::sort::partition_budget;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// A singly-linked list with O(1) insertion and removal at the front.
///
/// # Examples
///
/// ```rust
/// use saturn_sequences::generic::singly_linked_list::SinglyLinkedList;
/// use saturn_sequences::generic::sequence::LinkedSequence;
///
/// let mut list = SinglyLinkedList::<u32>::new();
/// list.add_first(3).unwrap();
/// list.add_first(1).unwrap();
/// list.insert_at(1, 2).unwrap();
/// assert_eq!(list.to_vec(), vec![1, 2, 3]);
///
/// assert_eq!(list.remove_first(), Some(1));
/// assert_eq!(list.remove_last(), Some(3));
/// assert_eq!(list.len(), 1);
/// ```
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns an iterator over the elements, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Copies the elements in `[from, to)` into a new `Vec`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `to > len()` or
    /// `from > to`.
    pub fn to_range(&self, from: usize, to: usize) -> CollectionResult<Vec<T>>
    where
        T: Clone,
    {
        check_range(from, to, self.len)?;
        Ok(self.iter().skip(from).take(to - from).cloned().collect())
    }

    fn out_of_range(&self, index: usize) -> CollectionError {
        CollectionError::IndexOutOfRange {
            index,
            len: self.len,
        }
    }
}

impl<T> LinkedSequence<T> for SinglyLinkedList<T> {
    fn add_first(&mut self, element: impl Into<Option<T>>) -> CollectionResult<()> {
        let value = require(element)?;
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
        Ok(())
    }

    fn add_last(&mut self, element: impl Into<Option<T>>) -> CollectionResult<()> {
        let value = require(element)?;
        let tail = link_at(&mut self.head, self.len);
        *tail = Some(Box::new(Node { value, next: None }));
        self.len += 1;
        Ok(())
    }

    fn insert_at(&mut self, index: usize, element: impl Into<Option<T>>) -> CollectionResult<()> {
        let value = require(element)?;
        check_inclusive(index, self.len)?;

        let link = link_at(&mut self.head, index);
        let next = link.take();
        *link = Some(Box::new(Node { value, next }));
        self.len += 1;
        Ok(())
    }

    fn get_first(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    fn get_last(&self) -> Option<&T> {
        self.iter().last()
    }

    fn get(&self, index: usize) -> CollectionResult<&T> {
        self.iter().nth(index).ok_or_else(|| self.out_of_range(index))
    }

    fn set(&mut self, index: usize, element: impl Into<Option<T>>) -> CollectionResult<T> {
        let value = require(element)?;
        check_exclusive(index, self.len)?;

        let error = self.out_of_range(index);
        match link_at(&mut self.head, index) {
            Some(node) => Ok(mem::replace(&mut node.value, value)),
            None => Err(error),
        }
    }

    fn remove_first(&mut self) -> Option<T> {
        let node = self.head.take()?;
        self.head = node.next;
        self.len -= 1;
        Some(node.value)
    }

    fn remove_last(&mut self) -> Option<T> {
        let last = self.len.checked_sub(1)?;
        self.remove_at(last).ok()
    }

    fn remove_at(&mut self, index: usize) -> CollectionResult<T> {
        check_exclusive(index, self.len)?;

        let error = self.out_of_range(index);
        let link = link_at(&mut self.head, index);
        let Some(node) = link.take() else {
            return Err(error);
        };
        *link = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        trace!(len = self.len, "clearing singly linked list");
        drop_chain(self.head.take());
        self.len = 0;
    }

    fn reverse(&mut self) {
        self.head = reverse_onto(self.head.take(), None);
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Returns `true` if some element equals `element`.
    pub fn contains<'a>(&self, element: impl Into<Option<&'a T>>) -> CollectionResult<bool>
    where
        T: 'a,
    {
        let element = require(element)?;
        Ok(self.iter().any(|value| value == element))
    }

    pub fn first_index_of<'a>(
        &self,
        element: impl Into<Option<&'a T>>,
    ) -> CollectionResult<Option<usize>>
    where
        T: 'a,
    {
        let element = require(element)?;
        Ok(self.iter().position(|value| value == element))
    }

    /// Index of the last matching element. Scans the whole chain.
    pub fn last_index_of<'a>(
        &self,
        element: impl Into<Option<&'a T>>,
    ) -> CollectionResult<Option<usize>>
    where
        T: 'a,
    {
        let element = require(element)?;
        Ok(self
            .iter()
            .enumerate()
            .filter(|(_, value)| *value == element)
            .map(|(index, _)| index)
            .last())
    }

    pub fn remove_first_occurrence<'a>(
        &mut self,
        element: impl Into<Option<&'a T>>,
    ) -> CollectionResult<bool>
    where
        T: 'a,
    {
        match self.first_index_of(element)? {
            Some(index) => self.remove_at(index).map(|_| true),
            None => Ok(false),
        }
    }

    pub fn remove_last_occurrence<'a>(
        &mut self,
        element: impl Into<Option<&'a T>>,
    ) -> CollectionResult<bool>
    where
        T: 'a,
    {
        match self.last_index_of(element)? {
            Some(index) => self.remove_at(index).map(|_| true),
            None => Ok(false),
        }
    }
}

impl<T: Ord> SinglyLinkedList<T> {
    /// Stable merge sort over the node chain. O(n log n).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_sequences::generic::singly_linked_list::SinglyLinkedList;
    ///
    /// let mut list: SinglyLinkedList<i32> = [4, -1, 3, 0].into_iter().collect();
    /// list.merge_sort();
    /// assert_eq!(list.to_vec(), vec![-1, 0, 3, 4]);
    /// ```
    pub fn merge_sort(&mut self) {
        trace!(len = self.len, "merge sorting singly linked list");
        self.head = merge_sort_chain(self.head.take(), self.len);
    }

    /// Stable quick sort: three-way partition around the middle node.
    ///
    /// Falls back to merge sort after too many unbalanced partitions, see
    /// [`partition_budget`].
    pub fn quick_sort(&mut self) {
        trace!(len = self.len, "quick sorting singly linked list");
        self.head = quick_sort_chain(self.head.take(), self.len, partition_budget(self.len));
    }

    /// Stable insertion sort. Each node is placed after the last node of the
    /// sorted chain that is not greater than it.
    pub fn insertion_sort(&mut self) {
        let mut sorted: Link<T> = None;
        let mut rest = self.head.take();

        while let Some(mut node) = rest {
            rest = node.next.take();
            let position = values(&sorted)
                .take_while(|value| **value <= node.value)
                .count();
            let link = link_at(&mut sorted, position);
            node.next = link.take();
            *link = Some(node);
        }

        self.head = sorted;
    }

    /// Stable selection sort. Each pass unlinks the first minimum of the
    /// unsorted chain and appends it to the sorted one.
    pub fn selection_sort(&mut self) {
        let mut rest = self.head.take();
        let mut sorted: Link<T> = None;
        let mut tail = &mut sorted;

        while let Some(position) = first_min_position(&rest) {
            let link = link_at(&mut rest, position);
            let Some(mut node) = link.take() else {
                break;
            };
            *link = node.next.take();
            tail = &mut tail.insert(node).next;
        }

        self.head = sorted;
    }
}

/// Follows `steps` links from `head` and returns the link found there.
fn link_at<T>(head: &mut Link<T>, steps: usize) -> &mut Link<T> {
    let mut cursor = head;
    for _ in 0..steps {
        match cursor {
            Some(node) => cursor = &mut node.next,
            None => break,
        }
    }
    cursor
}

/// The empty link that terminates the chain.
fn end_of<T>(head: &mut Link<T>) -> &mut Link<T> {
    let mut cursor = head;
    while let Some(node) = cursor {
        cursor = &mut node.next;
    }
    cursor
}

fn values<T>(head: &Link<T>) -> impl Iterator<Item = &T> {
    iter::successors(head.as_deref(), |node| node.next.as_deref()).map(|node| &node.value)
}

/// Prepends every node of `chain` onto `onto`, reversing their order.
fn reverse_onto<T>(mut chain: Link<T>, mut onto: Link<T>) -> Link<T> {
    while let Some(mut node) = chain {
        chain = node.next.take();
        node.next = onto;
        onto = Some(node);
    }
    onto
}

/// Drops nodes one at a time so long chains don't recurse in `Box::drop`.
fn drop_chain<T>(mut chain: Link<T>) {
    while let Some(mut node) = chain {
        chain = node.next.take();
    }
}

fn first_min_position<T: Ord>(head: &Link<T>) -> Option<usize> {
    // `min_by` keeps the first of several equal minimums.
    values(head)
        .enumerate()
        .min_by(|(_, a), (_, b)| a.cmp(b))
        .map(|(index, _)| index)
}

fn merge_sort_chain<T: Ord>(mut head: Link<T>, len: usize) -> Link<T> {
    if len <= 1 {
        return head;
    }

    let mid = len / 2;
    let right = link_at(&mut head, mid).take();
    merge_chains(merge_sort_chain(head, mid), merge_sort_chain(right, len - mid))
}

fn merge_chains<T: Ord>(mut left: Link<T>, mut right: Link<T>) -> Link<T> {
    let mut head = None;
    let mut tail = &mut head;

    loop {
        let take_right = match (&left, &right) {
            // Ties go left to keep the sort stable.
            (Some(l), Some(r)) => r.value < l.value,
            _ => break,
        };
        let source = if take_right { &mut right } else { &mut left };
        let Some(mut node) = source.take() else {
            break;
        };
        *source = node.next.take();
        tail = &mut tail.insert(node).next;
    }

    *tail = left.or(right);
    head
}

/// Nodes split off a chain during partitioning, kept in reverse order.
struct Partition<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Partition<T> {
    fn new() -> Self {
        Self { head: None, len: 0 }
    }

    fn push(&mut self, mut node: Box<Node<T>>) {
        node.next = self.head.take();
        self.head = Some(node);
        self.len += 1;
    }

    /// Hands back the nodes in the order they were pushed.
    fn into_chain(self) -> Link<T> {
        reverse_onto(self.head, None)
    }
}

fn partition<T: Ord>(
    mut chain: Link<T>,
    pivot: &T,
    less: &mut Partition<T>,
    equal: &mut Partition<T>,
    greater: &mut Partition<T>,
) {
    while let Some(mut node) = chain {
        chain = node.next.take();
        match node.value.cmp(pivot) {
            Ordering::Less => less.push(node),
            Ordering::Equal => equal.push(node),
            Ordering::Greater => greater.push(node),
        }
    }
}

/// Splits a chain of `len` nodes into less / equal / greater around its
/// middle node. Each part keeps the original relative order.
fn split_around_pivot<T: Ord>(
    mut head: Link<T>,
    len: usize,
) -> (Partition<T>, Link<T>, Partition<T>) {
    let mut less = Partition::new();
    let mut greater = Partition::new();
    let Some(mut pivot) = link_at(&mut head, len / 2).take() else {
        return (less, head, greater);
    };
    let after = pivot.next.take();

    let mut equal_before = Partition::new();
    let mut equal_after = Partition::new();
    partition(head, &pivot.value, &mut less, &mut equal_before, &mut greater);
    partition(after, &pivot.value, &mut less, &mut equal_after, &mut greater);

    // Equal elements keep their original order around the pivot.
    pivot.next = equal_after.into_chain();
    let equal = reverse_onto(equal_before.head, Some(pivot));
    (less, equal, greater)
}

/// Recurses only into the shorter side and loops on the longer one, so the
/// call depth stays logarithmic. Once `budget` partitions are spent the rest
/// is merge sorted.
fn quick_sort_chain<T: Ord>(chain: Link<T>, len: usize, mut budget: usize) -> Link<T> {
    let mut sorted: Link<T> = None;
    // Sorted runs that belong after everything still pending, innermost last.
    let mut suffixes = Vec::new();
    let mut pending = chain;
    let mut pending_len = len;

    while pending_len > 1 && budget > 0 {
        budget -= 1;
        let (less, equal, greater) = split_around_pivot(pending, pending_len);
        let (less_len, greater_len) = (less.len, greater.len);

        if less_len <= greater_len {
            *end_of(&mut sorted) = quick_sort_chain(less.into_chain(), less_len, budget);
            *end_of(&mut sorted) = equal;
            pending = greater.into_chain();
            pending_len = greater_len;
        } else {
            let mut suffix = equal;
            *end_of(&mut suffix) = quick_sort_chain(greater.into_chain(), greater_len, budget);
            suffixes.push(suffix);
            pending = less.into_chain();
            pending_len = less_len;
        }
    }

    if pending_len > 1 {
        pending = merge_sort_chain(pending, pending_len);
    }
    *end_of(&mut sorted) = pending;
    while let Some(suffix) = suffixes.pop() {
        *end_of(&mut sorted) = suffix;
    }
    sorted
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        drop_chain(self.head.take());
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = link_at(&mut self.head, self.len);
        for value in iter {
            tail = &mut tail.insert(Box::new(Node { value, next: None })).next;
            self.len += 1;
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

/// Borrowing iterator over a [`SinglyLinkedList`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over a [`SinglyLinkedList`].
pub struct IntoIter<T>(SinglyLinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.remove_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{init_tracing, is_sorted, is_stable, keyed, middle_max, Keyed};
    use proptest::prelude::*;

    fn list_of(values: &[i32]) -> SinglyLinkedList<i32> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_new_is_empty() {
        let list = SinglyLinkedList::<u8>::new();
        assert!(list.is_empty());
        assert_eq!(list.get_first(), None);
        assert_eq!(list.get_last(), None);
        assert!(list.to_vec().is_empty());
    }

    #[test]
    fn test_add_at_both_ends() {
        let mut list = SinglyLinkedList::<i32>::new();
        list.add_last(2).unwrap();
        list.add_first(1).unwrap();
        list.add_last(3).unwrap();
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        assert_eq!(list.get_last(), Some(&3));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_absent_elements_are_rejected() {
        let mut list = list_of(&[1]);
        assert_eq!(list.add_first(None), Err(CollectionError::InvalidArgument));
        assert_eq!(list.add_last(None), Err(CollectionError::InvalidArgument));
        assert_eq!(list.insert_at(1, None), Err(CollectionError::InvalidArgument));
        assert_eq!(list.set(0, None), Err(CollectionError::InvalidArgument));
        assert_eq!(list.first_index_of(None), Err(CollectionError::InvalidArgument));
        assert_eq!(
            list.remove_first_occurrence(None),
            Err(CollectionError::InvalidArgument)
        );
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_insert_and_remove_at() {
        let mut list = list_of(&[1, 3]);
        list.insert_at(1, 2).unwrap();
        list.insert_at(0, 0).unwrap();
        list.insert_at(4, 4).unwrap();
        assert_eq!(list.to_vec(), vec![0, 1, 2, 3, 4]);
        assert_eq!(
            list.insert_at(6, 9),
            Err(CollectionError::IndexOutOfRange { index: 6, len: 5 })
        );

        assert_eq!(list.remove_at(2), Ok(2));
        assert_eq!(list.remove_at(3), Ok(4));
        assert_eq!(list.remove_at(0), Ok(0));
        assert_eq!(list.to_vec(), vec![1, 3]);
        assert_eq!(
            list.remove_at(2),
            Err(CollectionError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_get_and_set() {
        let mut list = list_of(&[5, 6, 7]);
        assert_eq!(list.get(2), Ok(&7));
        assert_eq!(
            list.get(3),
            Err(CollectionError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(list.set(1, 60), Ok(6));
        assert_eq!(list.to_vec(), vec![5, 60, 7]);
        assert!(list.set(3, 0).is_err());
    }

    #[test]
    fn test_remove_ends_until_empty() {
        let mut list = list_of(&[1, 2, 3]);
        assert_eq!(list.remove_last(), Some(3));
        assert_eq!(list.remove_first(), Some(1));
        assert_eq!(list.remove_last(), Some(2));
        assert_eq!(list.remove_last(), None);
        assert_eq!(list.remove_first(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_queue_aliases() {
        let mut list = SinglyLinkedList::<i32>::new();
        list.offer(1).unwrap();
        list.offer(2).unwrap();
        list.push(0).unwrap();
        assert_eq!(list.peek(), Some(&0));
        assert_eq!(list.poll(), Some(0));
        assert_eq!(list.pop(), Some(2));
        assert_eq!(list.to_vec(), vec![1]);
    }

    #[test]
    fn test_lookups_and_occurrences() {
        let mut list = list_of(&[4, 2, 4, 8, 4]);
        assert_eq!(list.contains(&8), Ok(true));
        assert_eq!(list.first_index_of(&4), Ok(Some(0)));
        assert_eq!(list.last_index_of(&4), Ok(Some(4)));
        assert_eq!(list.last_index_of(&5), Ok(None));

        assert_eq!(list.remove_last_occurrence(&4), Ok(true));
        assert_eq!(list.remove_first_occurrence(&4), Ok(true));
        assert_eq!(list.to_vec(), vec![2, 4, 8]);
        assert_eq!(list.remove_first_occurrence(&5), Ok(false));
    }

    #[test]
    fn test_reverse() {
        let mut list = list_of(&[1, 2, 3]);
        list.reverse();
        assert_eq!(list.to_vec(), vec![3, 2, 1]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_clear_and_reuse() {
        init_tracing();
        let mut list = list_of(&[1, 2, 3]);
        list.clear();
        assert!(list.is_empty());
        list.add_last(7).unwrap();
        assert_eq!(list.to_vec(), vec![7]);
    }

    #[test]
    fn test_long_chain_drops_without_recursion() {
        let list: SinglyLinkedList<u32> = (0..200_000).collect();
        assert_eq!(list.len(), 200_000);
        drop(list);
    }

    #[test]
    fn test_to_range() {
        let list = list_of(&[0, 1, 2, 3]);
        assert_eq!(list.to_range(1, 4), Ok(vec![1, 2, 3]));
        assert_eq!(list.to_range(0, 0), Ok(vec![]));
        assert!(list.to_range(0, 5).is_err());
        assert!(list.to_range(2, 1).is_err());
    }

    #[test]
    fn test_every_sort() {
        init_tracing();
        let source = list_of(&[9, -3, 4, 4, 0, 12, -3]);
        let expected = vec![-3, -3, 0, 4, 4, 9, 12];

        let sorts: [fn(&mut SinglyLinkedList<i32>); 4] = [
            SinglyLinkedList::merge_sort,
            SinglyLinkedList::quick_sort,
            SinglyLinkedList::insertion_sort,
            SinglyLinkedList::selection_sort,
        ];
        for sort in sorts {
            let mut list = source.clone();
            sort(&mut list);
            assert_eq!(list.to_vec(), expected);
            assert_eq!(list.len(), expected.len());
        }
    }

    #[test]
    fn test_quick_sort_middle_max_input() {
        let mut list: SinglyLinkedList<u32> = middle_max(60_000).into_iter().collect();
        list.quick_sort();
        assert_eq!(list.len(), 60_000);
        assert!(list.iter().copied().eq(0..60_000));
    }

    #[test]
    fn test_iterators() {
        let list = list_of(&[1, 2, 3]);
        let mut iter = list.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.len(), 2);

        let sum: i32 = (&list).into_iter().sum();
        assert_eq!(sum, 6);
        assert_eq!(list.clone().into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(format!("{:?}", list), "[1, 2, 3]");
    }

    proptest! {
        #[test]
        fn test_sorts_are_stable(keys in proptest::collection::vec(0u8..4, 0..64)) {
            let source: SinglyLinkedList<Keyed> = keyed(&keys).into_iter().collect();

            let sorts: [fn(&mut SinglyLinkedList<Keyed>); 4] = [
                SinglyLinkedList::merge_sort,
                SinglyLinkedList::quick_sort,
                SinglyLinkedList::insertion_sort,
                SinglyLinkedList::selection_sort,
            ];
            for sort in sorts {
                let mut list = source.clone();
                sort(&mut list);
                let sorted = list.to_vec();
                prop_assert_eq!(sorted.len(), keys.len());
                prop_assert!(is_sorted(&sorted));
                prop_assert!(is_stable(&sorted));
            }
        }
    }
}
