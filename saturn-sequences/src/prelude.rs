//! Convenience re-exports.
//!
//! ```rust
//! use saturn_sequences::prelude::*;
//!
//! let mut list = DoublyLinkedList::<u8>::new();
//! list.offer(1).unwrap();
//! assert_eq!(list.poll(), Some(1));
//! ```

pub use crate::config::{ArrayConfig, DEFAULT_INITIAL_CAPACITY};
pub use crate::error::{CollectionError, CollectionResult};
pub use crate::generic::doubly_linked_list::DoublyLinkedList;
pub use crate::generic::resizable_array::ResizableArray;
pub use crate::generic::sequence::LinkedSequence;
pub use crate::generic::singly_linked_list::SinglyLinkedList;
pub use crate::generic::stack::Stack;
pub use crate::search::{binary_search, linear_search};
