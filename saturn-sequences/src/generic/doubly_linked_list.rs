//! Doubly-linked list stored in an index arena.
//!
//! Nodes live in a `Vec` of slots and refer to each other by slot index. The
//! `next` index is the forward chain; `prev` is a plain lookup key used for
//! backward traversal and O(1) unlinking. Because no node holds a pointer to
//! another, the list has no reference cycles and needs no `unsafe`. Freed
//! slots are threaded onto a free list and reused by later insertions.
//!
//! Link invariants, maintained by every mutation:
//!
//! * for adjacent nodes `a -> b`, `a.next == b` iff `b.prev == a`;
//! * `head.prev` and `tail.next` are `None`;
//! * `len` equals the number of nodes reachable from `head`.

use core::cmp::Ordering;
use core::fmt;
use core::mem;

use tracing::trace;

use crate::error::{check_exclusive, check_inclusive, check_range, require, CollectionResult};
use crate::generic::sequence::LinkedSequence;
use crate::sort::partition_budget;

type Link = Option<usize>;

#[derive(Clone)]
struct Node<T> {
    value: T,
    prev: Link,
    next: Link,
}

/// A run of nodes linked through `next`, with its ends and length.
#[derive(Clone, Copy, Default)]
struct Segment {
    head: Link,
    tail: Link,
    len: usize,
}

#[derive(Clone)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Link },
}

/// A doubly-linked list with O(1) insertion and removal at both ends.
///
/// Positional operations walk from whichever end is closer, so `get`, `set`,
/// `insert_at` and `remove_at` cost O(min(index, len - index)).
///
/// # Examples
///
/// ```rust
/// use saturn_sequences::generic::doubly_linked_list::DoublyLinkedList;
/// use saturn_sequences::generic::sequence::LinkedSequence;
///
/// let mut list = DoublyLinkedList::<u32>::new();
/// list.add_last(2).unwrap();
/// list.add_first(1).unwrap();
/// list.add_last(4).unwrap();
/// list.insert_at(2, 3).unwrap();
///
/// assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
/// assert_eq!(list.get(3), Ok(&4));
///
/// list.reverse();
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
/// ```
#[derive(Clone)]
pub struct DoublyLinkedList<T> {
    slots: Vec<Slot<T>>,
    free: Link,
    head: Link,
    tail: Link,
    len: usize,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list. Does not allocate.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns an iterator over the elements, front to back.
    ///
    /// The iterator is double-ended, so `.rev()` walks the `prev` links.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Copies every element into a new `Vec`. Empty lists yield an empty `Vec`.
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
    ///
    /// [`CollectionError::IndexOutOfRange`]: crate::error::CollectionError::IndexOutOfRange
    pub fn to_range(&self, from: usize, to: usize) -> CollectionResult<Vec<T>>
    where
        T: Clone,
    {
        check_range(from, to, self.len)?;
        Ok(self.iter().skip(from).take(to - from).cloned().collect())
    }

    fn node(&self, id: usize) -> &Node<T> {
        match &self.slots[id] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link points at vacant slot {id}"),
        }
    }

    fn node_mut(&mut self, id: usize) -> &mut Node<T> {
        match &mut self.slots[id] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link points at vacant slot {id}"),
        }
    }

    /// Stores `value` in a recycled slot if one is free, otherwise in a new one.
    fn allocate(&mut self, value: T) -> usize {
        let node = Node {
            value,
            prev: None,
            next: None,
        };

        match self.free {
            Some(id) => {
                if let Slot::Vacant { next_free } = self.slots[id] {
                    self.free = next_free;
                }
                self.slots[id] = Slot::Occupied(node);
                id
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, id: usize) -> T {
        let slot = mem::replace(
            &mut self.slots[id],
            Slot::Vacant {
                next_free: self.free,
            },
        );
        self.free = Some(id);

        match slot {
            Slot::Occupied(node) => node.value,
            Slot::Vacant { .. } => unreachable!("released vacant slot {id}"),
        }
    }

    /// Splices the detached node `id` in between `prev` and `next`.
    fn attach(&mut self, id: usize, prev: Link, next: Link) {
        {
            let node = self.node_mut(id);
            node.prev = prev;
            node.next = next;
        }
        match prev {
            Some(p) => self.node_mut(p).next = Some(id),
            None => self.head = Some(id),
        }
        match next {
            Some(n) => self.node_mut(n).prev = Some(id),
            None => self.tail = Some(id),
        }
    }

    /// Splices the detached node `id` right after `prev`, or at the head.
    fn attach_after(&mut self, prev: Link, id: usize) {
        let next = match prev {
            Some(p) => self.node(p).next,
            None => self.head,
        };
        self.attach(id, prev, next);
    }

    /// Unhooks `id` from its neighbours without freeing its slot.
    fn detach(&mut self, id: usize) {
        let Node { prev, next, .. } = *self.node(id);
        match prev {
            Some(p) => self.node_mut(p).next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.node_mut(n).prev = prev,
            None => self.tail = prev,
        }
    }

    fn link_between(&mut self, prev: Link, next: Link, value: T) {
        let id = self.allocate(value);
        self.attach(id, prev, next);
        self.len += 1;
    }

    fn unlink(&mut self, id: usize) -> T {
        self.detach(id);
        self.len -= 1;
        self.release(id)
    }

    /// Slot of the node at `index`, walking from the closer end.
    /// `index` must be below `len`.
    fn node_at(&self, index: usize) -> usize {
        let (mut current, steps, forward) = if index < self.len / 2 {
            (self.head, index, true)
        } else {
            (self.tail, self.len - 1 - index, false)
        };

        for _ in 0..steps {
            current = current.and_then(|id| {
                let node = self.node(id);
                if forward {
                    node.next
                } else {
                    node.prev
                }
            });
        }

        match current {
            Some(id) => id,
            None => unreachable!("index {index} within length {} has no node", self.len),
        }
    }

    /// Rebuilds every `prev` link and the tail from the forward chain.
    fn relink_backwards(&mut self) {
        let mut prev = None;
        let mut current = self.head;
        while let Some(id) = current {
            let node = self.node_mut(id);
            node.prev = prev;
            current = node.next;
            prev = Some(id);
        }
        self.tail = prev;
    }

    /// Walks the list in both directions and panics on any broken link.
    #[cfg(test)]
    pub(crate) fn assert_links(&self) {
        let mut count = 0;
        let mut prev = None;
        let mut current = self.head;
        while let Some(id) = current {
            let node = self.node(id);
            assert_eq!(node.prev, prev, "node {id} has a stale prev link");
            prev = Some(id);
            current = node.next;
            count += 1;
            assert!(count <= self.len, "forward chain is longer than len");
        }
        assert_eq!(self.tail, prev, "tail is not the last reachable node");
        assert_eq!(count, self.len, "len does not match reachable nodes");

        let mut backwards = 0;
        let mut current = self.tail;
        while let Some(id) = current {
            current = self.node(id).prev;
            backwards += 1;
            assert!(backwards <= self.len, "backward chain is longer than len");
        }
        assert_eq!(backwards, self.len);
    }
}

impl<T> LinkedSequence<T> for DoublyLinkedList<T> {
    fn add_first(&mut self, element: impl Into<Option<T>>) -> CollectionResult<()> {
        let value = require(element)?;
        self.link_between(None, self.head, value);
        Ok(())
    }

    fn add_last(&mut self, element: impl Into<Option<T>>) -> CollectionResult<()> {
        let value = require(element)?;
        self.link_between(self.tail, None, value);
        Ok(())
    }

    fn insert_at(&mut self, index: usize, element: impl Into<Option<T>>) -> CollectionResult<()> {
        let value = require(element)?;
        check_inclusive(index, self.len)?;

        if index == self.len {
            self.link_between(self.tail, None, value);
        } else {
            let next = self.node_at(index);
            let prev = self.node(next).prev;
            self.link_between(prev, Some(next), value);
        }
        Ok(())
    }

    fn get_first(&self) -> Option<&T> {
        self.head.map(|id| &self.node(id).value)
    }

    fn get_last(&self) -> Option<&T> {
        self.tail.map(|id| &self.node(id).value)
    }

    fn get(&self, index: usize) -> CollectionResult<&T> {
        check_exclusive(index, self.len)?;
        Ok(&self.node(self.node_at(index)).value)
    }

    fn set(&mut self, index: usize, element: impl Into<Option<T>>) -> CollectionResult<T> {
        let value = require(element)?;
        check_exclusive(index, self.len)?;
        let id = self.node_at(index);
        Ok(mem::replace(&mut self.node_mut(id).value, value))
    }

    fn remove_first(&mut self) -> Option<T> {
        let id = self.head?;
        Some(self.unlink(id))
    }

    fn remove_last(&mut self) -> Option<T> {
        let id = self.tail?;
        Some(self.unlink(id))
    }

    fn remove_at(&mut self, index: usize) -> CollectionResult<T> {
        check_exclusive(index, self.len)?;
        let id = self.node_at(index);
        Ok(self.unlink(id))
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        trace!(len = self.len, "clearing doubly linked list");
        self.slots = Vec::new();
        self.free = None;
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    fn reverse(&mut self) {
        let mut current = self.head;
        while let Some(id) = current {
            let node = self.node_mut(id);
            mem::swap(&mut node.prev, &mut node.next);
            // The old `next` now sits in `prev`.
            current = node.prev;
        }
        mem::swap(&mut self.head, &mut self.tail);
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Returns `true` if some element equals `element`.
    pub fn contains<'a>(&self, element: impl Into<Option<&'a T>>) -> CollectionResult<bool>
    where
        T: 'a,
    {
        let element = require(element)?;
        Ok(self.iter().any(|value| value == element))
    }

    /// Index of the first element equal to `element`, scanning from the head.
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

    /// Index of the last element equal to `element`, scanning from the tail.
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
            .rev()
            .position(|value| value == element)
            .map(|from_back| self.len - 1 - from_back))
    }

    /// Unlinks the first node holding `element`. Returns whether one was found.
    pub fn remove_first_occurrence<'a>(
        &mut self,
        element: impl Into<Option<&'a T>>,
    ) -> CollectionResult<bool>
    where
        T: 'a,
    {
        let element = require(element)?;
        let mut current = self.head;
        while let Some(id) = current {
            let node = self.node(id);
            if node.value == *element {
                self.unlink(id);
                return Ok(true);
            }
            current = node.next;
        }
        Ok(false)
    }

    /// Unlinks the last node holding `element`. Returns whether one was found.
    pub fn remove_last_occurrence<'a>(
        &mut self,
        element: impl Into<Option<&'a T>>,
    ) -> CollectionResult<bool>
    where
        T: 'a,
    {
        let element = require(element)?;
        let mut current = self.tail;
        while let Some(id) = current {
            let node = self.node(id);
            if node.value == *element {
                self.unlink(id);
                return Ok(true);
            }
            current = node.prev;
        }
        Ok(false)
    }
}

impl<T: Ord> DoublyLinkedList<T> {
    /// Stable merge sort by relinking nodes. O(n log n), no element moves.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_sequences::generic::doubly_linked_list::DoublyLinkedList;
    ///
    /// let mut list: DoublyLinkedList<u32> = [5, 3, 8, 1].into_iter().collect();
    /// list.merge_sort();
    /// assert_eq!(list.to_vec(), vec![1, 3, 5, 8]);
    /// ```
    pub fn merge_sort(&mut self) {
        trace!(len = self.len, "merge sorting doubly linked list");
        self.head = self.merge_sort_chain(self.head, self.len);
        self.relink_backwards();
    }

    /// Stable quick sort: three-way partition around the middle node.
    ///
    /// Recursion only descends into the shorter partition, and a run of
    /// unbalanced partitions hands the rest over to merge sort, see
    /// [`partition_budget`].
    pub fn quick_sort(&mut self) {
        trace!(len = self.len, "quick sorting doubly linked list");
        let chain = Segment {
            head: self.head,
            tail: self.tail,
            len: self.len,
        };
        let sorted = self.quick_sort_chain(chain, partition_budget(self.len));
        self.head = sorted.head;
        self.relink_backwards();
    }

    /// Stable insertion sort; each node is spliced back to its position.
    pub fn insertion_sort(&mut self) {
        let mut current = self.head.and_then(|id| self.node(id).next);
        while let Some(id) = current {
            current = self.node(id).next;

            let original_prev = self.node(id).prev;
            let mut before = original_prev;
            while let Some(b) = before {
                if self.node(b).value > self.node(id).value {
                    before = self.node(b).prev;
                } else {
                    break;
                }
            }

            if before != original_prev {
                self.detach(id);
                self.attach_after(before, id);
            }
        }
    }

    /// Selection sort that moves each minimum to the end of the sorted
    /// prefix. Picking the first minimum keeps it stable.
    pub fn selection_sort(&mut self) {
        let mut boundary: Link = None;
        loop {
            let start = match boundary {
                Some(b) => self.node(b).next,
                None => self.head,
            };
            let Some(start) = start else {
                break;
            };

            let mut min = start;
            let mut current = self.node(start).next;
            while let Some(id) = current {
                if self.node(id).value < self.node(min).value {
                    min = id;
                }
                current = self.node(id).next;
            }

            if min != start {
                self.detach(min);
                self.attach_after(boundary, min);
            }
            boundary = Some(min);
        }
    }

    /// Sorts the forward chain of `len` nodes starting at `head`. Only `next`
    /// links are maintained.
    fn merge_sort_chain(&mut self, head: Link, len: usize) -> Link {
        let Some(first) = head else {
            return None;
        };
        if len <= 1 {
            return head;
        }

        let mid = len / 2;
        let right = self.split_chain(first, mid);
        let left = self.merge_sort_chain(head, mid);
        let right = self.merge_sort_chain(right, len - mid);
        self.merge_chains(left, right)
    }

    /// Cuts the chain after `count` nodes and returns the detached remainder.
    fn split_chain(&mut self, head: usize, count: usize) -> Link {
        let mut last = head;
        for _ in 1..count {
            match self.node(last).next {
                Some(next) => last = next,
                None => return None,
            }
        }
        self.node_mut(last).next.take()
    }

    fn merge_chains(&mut self, mut left: Link, mut right: Link) -> Link {
        let mut head = None;
        let mut tail = None;

        while let (Some(l), Some(r)) = (left, right) {
            // Ties go left to keep the sort stable.
            let taken = if self.node(r).value < self.node(l).value {
                right = self.node(r).next;
                r
            } else {
                left = self.node(l).next;
                l
            };
            self.append_to_chain(&mut head, &mut tail, taken);
        }

        let rest = left.or(right);
        match tail {
            Some(t) => self.node_mut(t).next = rest,
            None => head = rest,
        }
        head
    }

    /// Sorts a terminated forward chain, partitioning at most `budget` times
    /// along any path before merge sorting what is left.
    fn quick_sort_chain(&mut self, chain: Segment, mut budget: usize) -> Segment {
        let mut sorted = Segment::default();
        // Sorted runs that belong after everything still pending, innermost last.
        let mut suffixes = Vec::new();
        let mut pending = chain;

        while pending.len > 1 && budget > 0 {
            budget -= 1;
            let [less, equal, greater] = self.partition_chain(pending);

            if less.len <= greater.len {
                let less = self.quick_sort_chain(less, budget);
                self.concat_segments(&mut sorted, less);
                self.concat_segments(&mut sorted, equal);
                pending = greater;
            } else {
                let mut suffix = equal;
                let greater = self.quick_sort_chain(greater, budget);
                self.concat_segments(&mut suffix, greater);
                suffixes.push(suffix);
                pending = less;
            }
        }

        if pending.len > 1 {
            let head = self.merge_sort_chain(pending.head, pending.len);
            pending = Segment {
                head,
                tail: self.chain_tail(head),
                len: pending.len,
            };
        }
        self.concat_segments(&mut sorted, pending);
        while let Some(suffix) = suffixes.pop() {
            self.concat_segments(&mut sorted, suffix);
        }
        sorted
    }

    /// Splits `chain` into terminated less / equal / greater segments around
    /// its middle node. Each segment keeps the original relative order.
    fn partition_chain(&mut self, chain: Segment) -> [Segment; 3] {
        let mut parts = [Segment::default(); 3];

        let mut pivot = chain.head;
        for _ in 0..chain.len / 2 {
            pivot = pivot.and_then(|id| self.node(id).next);
        }
        let Some(pivot) = pivot else {
            return parts;
        };

        let mut current = chain.head;
        for _ in 0..chain.len {
            let Some(id) = current else {
                break;
            };
            current = self.node(id).next;
            let part = match self.node(id).value.cmp(&self.node(pivot).value) {
                Ordering::Less => 0,
                Ordering::Equal => 1,
                Ordering::Greater => 2,
            };
            let segment = &mut parts[part];
            self.append_to_chain(&mut segment.head, &mut segment.tail, id);
            segment.len += 1;
        }

        for tail in parts.iter().filter_map(|part| part.tail) {
            self.node_mut(tail).next = None;
        }
        parts
    }

    fn concat_segments(&mut self, front: &mut Segment, back: Segment) {
        let Some(back_head) = back.head else {
            return;
        };
        match front.tail {
            Some(t) => self.node_mut(t).next = Some(back_head),
            None => front.head = Some(back_head),
        }
        front.tail = back.tail;
        front.len += back.len;
    }

    fn chain_tail(&self, head: Link) -> Link {
        let mut tail = head;
        while let Some(next) = tail.and_then(|id| self.node(id).next) {
            tail = Some(next);
        }
        tail
    }

    fn append_to_chain(&mut self, head: &mut Link, tail: &mut Link, id: usize) {
        match *tail {
            Some(t) => self.node_mut(t).next = Some(id),
            None => *head = Some(id),
        }
        *tail = Some(id);
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.link_between(self.tail, None, value);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

/// Borrowing iterator over a [`DoublyLinkedList`].
pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    front: Link,
    back: Link,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over a [`DoublyLinkedList`].
pub struct IntoIter<T>(DoublyLinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.remove_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.0.remove_last()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CollectionError;
    use crate::tests::{init_tracing, is_stable, keyed, middle_max, Keyed};

    fn list_of(values: &[i32]) -> DoublyLinkedList<i32> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_default_is_empty() {
        let list = DoublyLinkedList::<u32>::default();
        assert!(list.is_empty());
        assert_eq!(list.get_first(), None);
        assert_eq!(list.get_last(), None);
        assert!(list.to_vec().is_empty());
        list.assert_links();
    }

    #[test]
    fn test_add_at_both_ends() {
        let mut list = DoublyLinkedList::<i32>::new();
        list.add_last(2).unwrap();
        list.add_first(1).unwrap();
        list.add_last(3).unwrap();
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        assert_eq!(list.get_first(), Some(&1));
        assert_eq!(list.get_last(), Some(&3));
        list.assert_links();
    }

    #[test]
    fn test_aliases() {
        let mut list = DoublyLinkedList::<i32>::new();
        list.push(2).unwrap();
        list.push(1).unwrap();
        list.offer(3).unwrap();
        assert_eq!(list.peek(), Some(&1));
        assert_eq!(list.pop(), Some(3));
        assert_eq!(list.poll(), Some(1));
        assert_eq!(list.to_vec(), vec![2]);
    }

    #[test]
    fn test_absent_elements_are_rejected() {
        let mut list = list_of(&[1, 2]);
        assert_eq!(list.add_first(None), Err(CollectionError::InvalidArgument));
        assert_eq!(list.add_last(None), Err(CollectionError::InvalidArgument));
        assert_eq!(list.insert_at(0, None), Err(CollectionError::InvalidArgument));
        assert_eq!(list.set(0, None), Err(CollectionError::InvalidArgument));
        assert_eq!(list.contains(None), Err(CollectionError::InvalidArgument));
        assert_eq!(
            list.remove_last_occurrence(None),
            Err(CollectionError::InvalidArgument)
        );
        assert_eq!(list.to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_insert_at_every_position() {
        let mut list = list_of(&[10, 20, 30, 40]);
        list.insert_at(0, 0).unwrap();
        list.insert_at(5, 50).unwrap();
        list.insert_at(2, 15).unwrap();
        list.insert_at(5, 35).unwrap();
        assert_eq!(list.to_vec(), vec![0, 10, 15, 20, 30, 35, 40, 50]);
        list.assert_links();

        assert_eq!(
            list.insert_at(9, 1),
            Err(CollectionError::IndexOutOfRange { index: 9, len: 8 })
        );
        assert_eq!(list.len(), 8);
    }

    #[test]
    fn test_get_and_set_from_both_halves() {
        let mut list = list_of(&[0, 1, 2, 3, 4, 5, 6]);
        for index in 0..7 {
            assert_eq!(list.get(index), Ok(&(index as i32)));
        }
        assert_eq!(list.set(1, 10), Ok(1));
        assert_eq!(list.set(5, 50), Ok(5));
        assert_eq!(list.to_vec(), vec![0, 10, 2, 3, 4, 50, 6]);
        assert_eq!(
            list.get(7),
            Err(CollectionError::IndexOutOfRange { index: 7, len: 7 })
        );
        assert!(list.set(7, 0).is_err());
    }

    #[test]
    fn test_remove_ends_and_middle() {
        let mut list = list_of(&[1, 2, 3, 4, 5]);
        assert_eq!(list.remove_first(), Some(1));
        assert_eq!(list.remove_last(), Some(5));
        assert_eq!(list.remove_at(1), Ok(3));
        assert_eq!(list.to_vec(), vec![2, 4]);
        list.assert_links();

        assert_eq!(list.remove_at(0), Ok(2));
        assert_eq!(list.remove_at(0), Ok(4));
        assert!(list.is_empty());
        assert_eq!(list.remove_first(), None);
        assert_eq!(list.remove_last(), None);
        assert_eq!(
            list.remove_at(0),
            Err(CollectionError::IndexOutOfRange { index: 0, len: 0 })
        );
        list.assert_links();
    }

    #[test]
    fn test_slots_are_recycled() {
        let mut list = list_of(&[1, 2, 3]);
        list.remove_at(1).unwrap();
        list.remove_first();
        list.add_last(4).unwrap();
        list.add_last(5).unwrap();
        assert_eq!(list.slots.len(), 3);
        assert_eq!(list.to_vec(), vec![3, 4, 5]);
        list.assert_links();
    }

    #[test]
    fn test_lookups() {
        let list = list_of(&[7, 1, 7, 2]);
        assert_eq!(list.contains(&2), Ok(true));
        assert_eq!(list.contains(&9), Ok(false));
        assert_eq!(list.first_index_of(&7), Ok(Some(0)));
        assert_eq!(list.last_index_of(&7), Ok(Some(2)));
        assert_eq!(list.last_index_of(&9), Ok(None));
    }

    #[test]
    fn test_remove_occurrences() {
        let mut list = list_of(&[1, 2, 1, 3, 1]);
        assert_eq!(list.remove_first_occurrence(&1), Ok(true));
        assert_eq!(list.remove_last_occurrence(&1), Ok(true));
        assert_eq!(list.to_vec(), vec![2, 1, 3]);
        assert_eq!(list.remove_first_occurrence(&9), Ok(false));
        list.assert_links();
    }

    #[test]
    fn test_reverse() {
        let mut list = list_of(&[1, 2, 3, 4]);
        list.reverse();
        assert_eq!(list.to_vec(), vec![4, 3, 2, 1]);
        assert_eq!(list.get_first(), Some(&4));
        assert_eq!(list.get_last(), Some(&1));
        list.assert_links();

        let mut empty = DoublyLinkedList::<i32>::new();
        empty.reverse();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_clear() {
        init_tracing();
        let mut list = list_of(&[1, 2, 3]);
        list.clear();
        assert!(list.is_empty());
        assert!(list.slots.is_empty());
        list.add_first(9).unwrap();
        assert_eq!(list.to_vec(), vec![9]);
        list.assert_links();
    }

    #[test]
    fn test_to_range() {
        let list = list_of(&[0, 1, 2, 3, 4]);
        assert_eq!(list.to_range(1, 3), Ok(vec![1, 2]));
        assert_eq!(list.to_range(5, 5), Ok(vec![]));
        assert!(list.to_range(0, 6).is_err());
        assert!(list.to_range(3, 2).is_err());
    }

    #[test]
    fn test_every_sort() {
        init_tracing();
        let source = list_of(&[5, 3, 8, 1, 3, -2, 0]);
        let expected = vec![-2, 0, 1, 3, 3, 5, 8];

        let sorts: [fn(&mut DoublyLinkedList<i32>); 4] = [
            DoublyLinkedList::merge_sort,
            DoublyLinkedList::quick_sort,
            DoublyLinkedList::insertion_sort,
            DoublyLinkedList::selection_sort,
        ];
        for sort in sorts {
            let mut list = source.clone();
            sort(&mut list);
            assert_eq!(list.to_vec(), expected);
            list.assert_links();
        }
    }

    #[test]
    fn test_quick_sort_middle_max_input() {
        let mut list: DoublyLinkedList<u32> = middle_max(60_000).into_iter().collect();
        list.quick_sort();
        assert!(list.iter().copied().eq(0..60_000));
        list.assert_links();
    }

    #[test]
    fn test_sorts_are_stable() {
        let source: DoublyLinkedList<Keyed> = keyed(&[2, 0, 2, 1, 0, 1, 2]).into_iter().collect();

        let sorts: [fn(&mut DoublyLinkedList<Keyed>); 4] = [
            DoublyLinkedList::merge_sort,
            DoublyLinkedList::quick_sort,
            DoublyLinkedList::insertion_sort,
            DoublyLinkedList::selection_sort,
        ];
        for sort in sorts {
            let mut list = source.clone();
            sort(&mut list);
            assert!(is_stable(&list.to_vec()));
            list.assert_links();
        }
    }

    #[test]
    fn test_iterators() {
        let list = list_of(&[1, 2, 3, 4]);
        let mut iter = list.iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);

        let borrowed: Vec<_> = (&list).into_iter().copied().collect();
        assert_eq!(borrowed, vec![1, 2, 3, 4]);

        let owned_back: Vec<_> = list.clone().into_iter().rev().collect();
        assert_eq!(owned_back, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_equality_and_debug() {
        let a = list_of(&[1, 2, 3]);
        let mut b = list_of(&[0, 1, 2, 3]);
        b.remove_first();
        assert_eq!(a, b);
        assert_ne!(a, list_of(&[1, 2]));
        assert_eq!(format!("{:?}", a), "[1, 2, 3]");
    }
}
