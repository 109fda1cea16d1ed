pub mod doubly_linked_list;
pub mod resizable_array;
pub mod sequence;
pub mod singly_linked_list;
pub mod stack;
