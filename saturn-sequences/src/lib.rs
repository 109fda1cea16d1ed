//! # Saturn Sequences
//!
//! Generic, heap-backed sequence containers with elementary sorting & searching.
//!
//! Every container owns its storage, reports failures through a typed [`CollectionError`]
//! instead of panicking, and treats a missing element (`None`) as an invalid argument.
//!
//! ## Features
//!
//! ### Containers
//!
//! - **[`ResizableArray<T>`]** – contiguous array whose capacity doubles when full and halves
//!   when half empty, never dropping below its initial capacity (32 by default)
//! - **[`SinglyLinkedList<T>`]** – forward-only chain of owned nodes, O(1) at the front
//! - **[`DoublyLinkedList<T>`]** – arena-backed list, O(1) at both ends, positional access from
//!   the closer end
//! - **[`Stack<T>`]** – LIFO adapter over `ResizableArray`
//! - **[`LinkedSequence<T>`]** – trait shared by both lists, including the queue & stack
//!   aliases `push`/`offer`/`peek`/`poll`/`pop`
//!
//! ### Algorithms
//!
//! - **[`sort`]** – insertion, selection, merge & quick sort; every container exposes all four
//! - **[`search`]** – linear & binary search over slices
//!
//! ## Quick Examples
//!
//! ### Using ResizableArray
//!
//! ```rust
//! use saturn_sequences::generic::resizable_array::ResizableArray;
//!
//! let mut array: ResizableArray<u32> = (0..40).collect();
//! assert_eq!(array.capacity(), 64);
//!
//! while array.len() > 32 {
//!     array.remove_back();
//! }
//! assert_eq!(array.capacity(), 32);
//! ```
//!
//! ### Using the linked lists
//!
//! ```rust
//! use saturn_sequences::generic::doubly_linked_list::DoublyLinkedList;
//! use saturn_sequences::generic::sequence::LinkedSequence;
//!
//! let mut list: DoublyLinkedList<i32> = [3, 1, 2].into_iter().collect();
//! list.merge_sort();
//! assert_eq!(list.to_vec(), vec![1, 2, 3]);
//!
//! list.remove_at(1).unwrap();
//! assert_eq!(list.get_last(), Some(&3));
//! ```
//!
//! ### Using Stack
//!
//! ```rust
//! use saturn_sequences::generic::stack::Stack;
//!
//! let mut stack = Stack::<char>::new();
//! stack.push('a').unwrap();
//! stack.push('b').unwrap();
//! assert_eq!(stack.pop(), Some('b'));
//! assert_eq!(stack.peek(), Some(&'a'));
//! ```
//!
//! ### Searching
//!
//! ```rust
//! use saturn_sequences::search::binary_search;
//!
//! assert_eq!(binary_search(&[1, 3, 5, 7, 9], &7), Some(3));
//! ```
//!
//! ## Configuration
//!
//! The array's initial capacity comes from [`ArrayConfig`], which deserializes from a host
//! application's configuration when the `serde` feature (on by default) is enabled.
//!
//! ## Logging
//!
//! Capacity changes are reported as `tracing` debug events, clears and sorts as trace events.
//! The crate installs no subscriber.
//!
//! [`CollectionError`]: error::CollectionError
//! [`ResizableArray<T>`]: generic::resizable_array::ResizableArray
//! [`SinglyLinkedList<T>`]: generic::singly_linked_list::SinglyLinkedList
//! [`DoublyLinkedList<T>`]: generic::doubly_linked_list::DoublyLinkedList
//! [`Stack<T>`]: generic::stack::Stack
//! [`LinkedSequence<T>`]: generic::sequence::LinkedSequence
//! [`ArrayConfig`]: config::ArrayConfig

pub mod config;
pub mod error;
pub mod generic;
pub mod prelude;
pub mod search;
pub mod sort;

#[cfg(test)]
mod tests;
