//! Growable, shrinkable array with an explicit capacity policy.
//!
//! This module provides [`ResizableArray`], a contiguous buffer addressed by
//! index whose capacity is always the configured floor times a power of two.
//! The buffer doubles when an insertion finds it full and halves when a
//! removal leaves it exactly half occupied, which keeps insertion and removal
//! at the back amortized O(1) while bounding unused slots to a constant
//! factor.

use core::mem;

use tracing::{debug, trace};

use crate::config::ArrayConfig;
use crate::error::{check_exclusive, check_inclusive, check_range, require, CollectionResult};
use crate::sort;

/// A contiguous array that grows and shrinks by powers of two.
///
/// # Type Parameters
///
/// * `T` - The element type. Lookups need `PartialEq`, sorting needs `Ord`,
///   copying out needs `Clone`.
///
/// # Examples
///
/// ```rust
/// use saturn_sequences::generic::resizable_array::ResizableArray;
///
/// let mut array = ResizableArray::<i32>::new();
/// for value in [5, 3, 8, 1] {
///     array.add_back(value).unwrap();
/// }
///
/// assert_eq!(array.first_index_of(&8).unwrap(), Some(2));
/// assert_eq!(array.remove_front(), Some(5));
/// assert_eq!(array.as_slice(), &[3, 8, 1]);
///
/// array.insertion_sort();
/// assert_eq!(array.as_slice(), &[1, 3, 8]);
/// ```
///
/// # Absent elements
///
/// Element arguments accept either a value or an `Option`. Passing `None`
/// fails with [`CollectionError::InvalidArgument`] and leaves the array
/// untouched.
///
/// ```rust
/// use saturn_sequences::error::CollectionError;
/// use saturn_sequences::generic::resizable_array::ResizableArray;
///
/// let mut array: ResizableArray<u32> = ResizableArray::new();
/// assert_eq!(array.add_back(None), Err(CollectionError::InvalidArgument));
/// assert!(array.is_empty());
/// ```
///
/// [`CollectionError::InvalidArgument`]: crate::error::CollectionError::InvalidArgument
#[derive(Debug)]
pub struct ResizableArray<T> {
    items: Vec<T>,
    capacity: usize,
    floor: usize,
}

impl<T> Default for ResizableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ResizableArray<T> {
    /// Creates an empty array with the default initial capacity of 32.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_sequences::generic::resizable_array::ResizableArray;
    ///
    /// let array: ResizableArray<u32> = ResizableArray::new();
    /// assert!(array.is_empty());
    /// assert_eq!(array.capacity(), 32);
    /// ```
    pub fn new() -> Self {
        Self::with_floor(ArrayConfig::default().initial_capacity)
    }

    /// Creates an empty array from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidCapacity`] if the configured initial
    /// capacity is zero or not a power of two.
    ///
    /// [`CollectionError::InvalidCapacity`]: crate::error::CollectionError::InvalidCapacity
    pub fn with_config(config: ArrayConfig) -> CollectionResult<Self> {
        config.validate()?;
        Ok(Self::with_floor(config.initial_capacity))
    }

    fn with_floor(floor: usize) -> Self {
        Self {
            items: Vec::with_capacity(floor),
            capacity: floor,
            floor,
        }
    }

    /// Returns the number of elements in the array.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the array contains no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the capacity the array starts with and never shrinks below.
    pub fn initial_capacity(&self) -> usize {
        self.floor
    }

    /// Returns a slice containing all elements in order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns a mutable slice containing all elements in order.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Returns an iterator over the elements, front to back.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.items.iter()
    }

    /// Returns a mutable iterator over the elements, front to back.
    pub fn iter_mut(
        &mut self,
    ) -> impl DoubleEndedIterator<Item = &mut T> + ExactSizeIterator + '_ {
        self.items.iter_mut()
    }

    /// Inserts an element at index 0, shifting every other element right.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidArgument`] if `element` is `None`.
    ///
    /// [`CollectionError::InvalidArgument`]: crate::error::CollectionError::InvalidArgument
    pub fn add_front(&mut self, element: impl Into<Option<T>>) -> CollectionResult<()> {
        let element = require(element)?;
        self.grow_if_full();
        self.items.insert(0, element);
        Ok(())
    }

    /// Appends an element to the back of the array.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidArgument`] if `element` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_sequences::generic::resizable_array::ResizableArray;
    ///
    /// let mut array = ResizableArray::<u32>::new();
    /// for value in 0..33 {
    ///     array.add_back(value).unwrap();
    /// }
    /// assert_eq!(array.len(), 33);
    /// assert_eq!(array.capacity(), 64);
    /// ```
    ///
    /// [`CollectionError::InvalidArgument`]: crate::error::CollectionError::InvalidArgument
    pub fn add_back(&mut self, element: impl Into<Option<T>>) -> CollectionResult<()> {
        let element = require(element)?;
        self.push_value(element);
        Ok(())
    }

    /// Inserts an element at `index`, shifting the suffix right by one.
    ///
    /// `index == len()` appends.
    ///
    /// # Errors
    ///
    /// * [`CollectionError::InvalidArgument`] if `element` is `None`.
    /// * [`CollectionError::IndexOutOfRange`] if `index > len()`.
    ///
    /// [`CollectionError::InvalidArgument`]: crate::error::CollectionError::InvalidArgument
    /// [`CollectionError::IndexOutOfRange`]: crate::error::CollectionError::IndexOutOfRange
    pub fn insert_at(
        &mut self,
        index: usize,
        element: impl Into<Option<T>>,
    ) -> CollectionResult<()> {
        let element = require(element)?;
        check_inclusive(index, self.len())?;
        self.grow_if_full();
        self.items.insert(index, element);
        Ok(())
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= len()`.
    ///
    /// [`CollectionError::IndexOutOfRange`]: crate::error::CollectionError::IndexOutOfRange
    pub fn get(&self, index: usize) -> CollectionResult<&T> {
        check_exclusive(index, self.len())?;
        Ok(&self.items[index])
    }

    /// Returns a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> CollectionResult<&mut T> {
        check_exclusive(index, self.len())?;
        Ok(&mut self.items[index])
    }

    /// Replaces the element at `index`, returning the previous value.
    ///
    /// # Errors
    ///
    /// * [`CollectionError::InvalidArgument`] if `element` is `None`.
    /// * [`CollectionError::IndexOutOfRange`] if `index >= len()`.
    ///
    /// [`CollectionError::InvalidArgument`]: crate::error::CollectionError::InvalidArgument
    /// [`CollectionError::IndexOutOfRange`]: crate::error::CollectionError::IndexOutOfRange
    pub fn set(&mut self, index: usize, element: impl Into<Option<T>>) -> CollectionResult<T> {
        let element = require(element)?;
        check_exclusive(index, self.len())?;
        Ok(mem::replace(&mut self.items[index], element))
    }

    /// Removes and returns the first element, or `None` if the array is empty.
    pub fn remove_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let removed = self.items.remove(0);
        self.shrink_if_half_full();
        Some(removed)
    }

    /// Removes and returns the last element, or `None` if the array is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_sequences::generic::resizable_array::ResizableArray;
    ///
    /// let mut array: ResizableArray<u32> = (0..33).collect();
    /// assert_eq!(array.capacity(), 64);
    ///
    /// assert_eq!(array.remove_back(), Some(32));
    /// assert_eq!(array.capacity(), 32);
    /// ```
    pub fn remove_back(&mut self) -> Option<T> {
        let removed = self.items.pop()?;
        self.shrink_if_half_full();
        Some(removed)
    }

    /// Removes and returns the element at `index`, shifting the suffix left.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= len()`.
    ///
    /// [`CollectionError::IndexOutOfRange`]: crate::error::CollectionError::IndexOutOfRange
    pub fn remove_at(&mut self, index: usize) -> CollectionResult<T> {
        check_exclusive(index, self.len())?;
        let removed = self.items.remove(index);
        self.shrink_if_half_full();
        Ok(removed)
    }

    /// Removes every element and resets the capacity to its initial value.
    pub fn clear(&mut self) {
        trace!(len = self.len(), capacity = self.capacity, "clearing array");
        self.items = Vec::with_capacity(self.floor);
        self.capacity = self.floor;
    }

    /// Reverses the order of the elements in place.
    pub fn reverse(&mut self) {
        self.items.reverse();
    }

    /// Copies every element into a new `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.to_vec()
    }

    /// Copies the elements in `[from, to)` into a new `Vec`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `to > len()` or
    /// `from > to`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_sequences::generic::resizable_array::ResizableArray;
    ///
    /// let array: ResizableArray<u32> = (10..15).collect();
    /// assert_eq!(array.to_range(1, 4).unwrap(), vec![11, 12, 13]);
    /// assert!(array.to_range(3, 2).is_err());
    /// assert!(array.to_range(0, 6).is_err());
    /// ```
    ///
    /// [`CollectionError::IndexOutOfRange`]: crate::error::CollectionError::IndexOutOfRange
    pub fn to_range(&self, from: usize, to: usize) -> CollectionResult<Vec<T>>
    where
        T: Clone,
    {
        check_range(from, to, self.len())?;
        Ok(self.items[from..to].to_vec())
    }

    fn push_value(&mut self, element: T) {
        self.grow_if_full();
        self.items.push(element);
    }

    fn grow_if_full(&mut self) {
        if self.items.len() < self.capacity {
            return;
        }

        let old_capacity = self.capacity;
        self.capacity *= 2;
        self.items.reserve_exact(self.capacity - self.items.len());
        debug!(old_capacity, new_capacity = self.capacity, "growing array buffer");
    }

    fn shrink_if_half_full(&mut self) {
        if self.capacity <= self.floor || self.items.len() != self.capacity / 2 {
            return;
        }

        let old_capacity = self.capacity;
        self.capacity /= 2;
        self.items.shrink_to(self.capacity);
        debug!(old_capacity, new_capacity = self.capacity, "shrinking array buffer");
    }

    /// Tops the allocation back up after the storage was swapped out by a sort.
    fn restore_allocation(&mut self) {
        let len = self.items.len();
        self.items.reserve_exact(self.capacity - len);
    }
}

impl<T: PartialEq> ResizableArray<T> {
    /// Returns the index of the first element equal to `element`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidArgument`] if `element` is `None`.
    ///
    /// [`CollectionError::InvalidArgument`]: crate::error::CollectionError::InvalidArgument
    pub fn first_index_of<'a>(
        &self,
        element: impl Into<Option<&'a T>>,
    ) -> CollectionResult<Option<usize>>
    where
        T: 'a,
    {
        let element = require(element)?;
        Ok(self.items.iter().position(|item| item == element))
    }

    /// Returns the index of the last element equal to `element`.
    pub fn last_index_of<'a>(
        &self,
        element: impl Into<Option<&'a T>>,
    ) -> CollectionResult<Option<usize>>
    where
        T: 'a,
    {
        let element = require(element)?;
        Ok(self.items.iter().rposition(|item| item == element))
    }

    /// Returns `true` if some element equals `element`.
    pub fn contains<'a>(
        &self,
        element: impl Into<Option<&'a T>>,
    ) -> CollectionResult<bool>
    where
        T: 'a,
    {
        Ok(self.first_index_of(element)?.is_some())
    }

    /// Removes the first element equal to `element`.
    ///
    /// Returns `true` if an element was found and removed.
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

    /// Removes the last element equal to `element`.
    ///
    /// Returns `true` if an element was found and removed.
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

impl<T: Ord> ResizableArray<T> {
    /// Sorts in place with a stable insertion sort.
    pub fn insertion_sort(&mut self) {
        sort::insertion_sort(&mut self.items);
    }

    /// Sorts in place with a selection sort, using at most `len() - 1` swaps.
    pub fn selection_sort(&mut self) {
        sort::selection_sort(&mut self.items);
    }

    /// Sorts with a stable merge sort.
    pub fn merge_sort(&mut self) {
        let items = mem::take(&mut self.items);
        self.items = sort::merge_sort(items);
        self.restore_allocation();
    }

    /// Sorts with a stable three-way quick sort.
    pub fn quick_sort(&mut self) {
        let items = mem::take(&mut self.items);
        self.items = sort::quick_sort(items);
        self.restore_allocation();
    }
}

impl<T: Clone> Clone for ResizableArray<T> {
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend_from_slice(&self.items);
        Self {
            items,
            capacity: self.capacity,
            floor: self.floor,
        }
    }
}

impl<T: PartialEq> PartialEq for ResizableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for ResizableArray<T> {}

impl<T> Extend<T> for ResizableArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_value(item);
        }
    }
}

impl<T> FromIterator<T> for ResizableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T> IntoIterator for ResizableArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ResizableArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
