//! A singly-linked list container with O(1) append and prepend, index-based
//! insertion and removal, and value lookup.

pub mod error;
pub mod iter;
pub mod linked_list;

pub use crate::error::ListError;
pub use crate::linked_list::{LinkedList, Node};
