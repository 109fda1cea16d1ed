//! Common trait for the linked list family.
//!
//! This module provides [`LinkedSequence`], the contract shared by
//! [`SinglyLinkedList`] and [`DoublyLinkedList`], so generic code can work
//! with either list. The queue and stack vocabulary (`push`, `offer`, `peek`,
//! `poll`, `pop`) is provided on top of the end operations.
//!
//! [`SinglyLinkedList`]: crate::generic::singly_linked_list::SinglyLinkedList
//! [`DoublyLinkedList`]: crate::generic::doubly_linked_list::DoublyLinkedList

use crate::error::CollectionResult;

/// Operations every linked list supports.
///
/// Element arguments accept either a value or an `Option`; `None` is rejected
/// with [`CollectionError::InvalidArgument`]. Operations on an empty list that
/// have nothing to return yield `None` instead of failing.
///
/// # Examples
///
/// ```rust
/// use saturn_sequences::generic::doubly_linked_list::DoublyLinkedList;
/// use saturn_sequences::generic::singly_linked_list::SinglyLinkedList;
/// use saturn_sequences::generic::sequence::LinkedSequence;
///
/// fn drain_queue<L: LinkedSequence<u32>>(list: &mut L) -> Vec<u32> {
///     list.offer(1).unwrap();
///     list.offer(2).unwrap();
///     list.push(0).unwrap();
///     let mut drained = Vec::new();
///     while let Some(value) = list.poll() {
///         drained.push(value);
///     }
///     drained
/// }
///
/// assert_eq!(drain_queue(&mut DoublyLinkedList::new()), vec![0, 1, 2]);
/// assert_eq!(drain_queue(&mut SinglyLinkedList::new()), vec![0, 1, 2]);
/// ```
///
/// [`CollectionError::InvalidArgument`]: crate::error::CollectionError::InvalidArgument
pub trait LinkedSequence<T> {
    /// Inserts an element at the front.
    fn add_first(&mut self, element: impl Into<Option<T>>) -> CollectionResult<()>;

    /// Inserts an element at the back.
    fn add_last(&mut self, element: impl Into<Option<T>>) -> CollectionResult<()>;

    /// Inserts an element so that it ends up at `index`.
    ///
    /// Fails with [`CollectionError::IndexOutOfRange`] if `index > len()`.
    ///
    /// [`CollectionError::IndexOutOfRange`]: crate::error::CollectionError::IndexOutOfRange
    fn insert_at(&mut self, index: usize, element: impl Into<Option<T>>) -> CollectionResult<()>;

    /// Returns the first element, or `None` if the list is empty.
    fn get_first(&self) -> Option<&T>;

    /// Returns the last element, or `None` if the list is empty.
    fn get_last(&self) -> Option<&T>;

    /// Returns the element at `index`.
    fn get(&self, index: usize) -> CollectionResult<&T>;

    /// Replaces the element at `index`, returning the previous value.
    fn set(&mut self, index: usize, element: impl Into<Option<T>>) -> CollectionResult<T>;

    /// Removes and returns the first element, or `None` if the list is empty.
    fn remove_first(&mut self) -> Option<T>;

    /// Removes and returns the last element, or `None` if the list is empty.
    fn remove_last(&mut self) -> Option<T>;

    /// Removes and returns the element at `index`.
    fn remove_at(&mut self, index: usize) -> CollectionResult<T>;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the list holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every node.
    fn clear(&mut self);

    /// Reverses the list in place without allocating.
    fn reverse(&mut self);

    /// Same as [`add_first`](Self::add_first).
    fn push(&mut self, element: impl Into<Option<T>>) -> CollectionResult<()> {
        self.add_first(element)
    }

    /// Same as [`add_last`](Self::add_last).
    fn offer(&mut self, element: impl Into<Option<T>>) -> CollectionResult<()> {
        self.add_last(element)
    }

    /// Same as [`get_first`](Self::get_first).
    fn peek(&self) -> Option<&T> {
        self.get_first()
    }

    /// Same as [`remove_first`](Self::remove_first).
    fn poll(&mut self) -> Option<T> {
        self.remove_first()
    }

    /// Same as [`remove_last`](Self::remove_last).
    fn pop(&mut self) -> Option<T> {
        self.remove_last()
    }
}
