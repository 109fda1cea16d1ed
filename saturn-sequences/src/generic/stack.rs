//! Last-in, first-out adapter over [`ResizableArray`].
//!
//! The top of the stack is the last occupied index of the array, so `push`
//! and `pop` inherit the array's amortized O(1) behaviour at the back.

use crate::error::CollectionResult;
use crate::generic::resizable_array::ResizableArray;

/// A LIFO stack backed by a [`ResizableArray`].
///
/// # Examples
///
/// ```rust
/// use saturn_sequences::generic::stack::Stack;
///
/// let mut stack = Stack::<u32>::new();
/// stack.push(1).unwrap();
/// stack.push(2).unwrap();
///
/// assert_eq!(stack.peek(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: ResizableArray<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            items: ResizableArray::new(),
        }
    }

    /// Places an element on top of the stack.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidArgument`] if `element` is `None`.
    ///
    /// [`CollectionError::InvalidArgument`]: crate::error::CollectionError::InvalidArgument
    pub fn push(&mut self, element: impl Into<Option<T>>) -> CollectionResult<()> {
        self.items.add_back(element)
    }

    /// Removes and returns the top element, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.remove_back()
    }

    /// Returns the top element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.as_slice().last()
    }

    /// Same as [`is_empty`](Self::is_empty).
    pub fn empty(&self) -> bool {
        self.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Position of the first element equal to `element`, counted from the
    /// bottom of the stack (0 is the oldest element).
    pub fn search<'a>(&self, element: impl Into<Option<&'a T>>) -> CollectionResult<Option<usize>>
    where
        T: PartialEq + 'a,
    {
        self.items.first_index_of(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CollectionError;

    #[test]
    fn test_push_pop_peek() {
        let mut stack = Stack::<u32>::new();
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        stack.push(3).unwrap();

        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.peek(), Some(&1));
        assert!(!stack.empty());

        assert_eq!(stack.pop(), Some(1));
        assert!(stack.empty());
        assert_eq!(stack.peek(), None);
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_absent_push_is_rejected() {
        let mut stack = Stack::<u32>::new();
        assert_eq!(stack.push(None), Err(CollectionError::InvalidArgument));
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_search_counts_from_bottom() {
        let mut stack = Stack::<char>::new();
        for c in ['a', 'b', 'c', 'b'] {
            stack.push(c).unwrap();
        }
        assert_eq!(stack.search(&'a'), Ok(Some(0)));
        assert_eq!(stack.search(&'b'), Ok(Some(1)));
        assert_eq!(stack.search(&'z'), Ok(None));
        assert_eq!(stack.search(None), Err(CollectionError::InvalidArgument));
    }

    #[test]
    fn test_deep_stack_grows_and_shrinks() {
        let mut stack = Stack::<usize>::new();
        for value in 0..100 {
            stack.push(value).unwrap();
        }
        assert_eq!(stack.len(), 100);
        assert_eq!(stack.items.capacity(), 128);

        while stack.len() > 32 {
            stack.pop();
        }
        assert_eq!(stack.items.capacity(), 32);
        assert_eq!(stack.peek(), Some(&31));
    }
}
