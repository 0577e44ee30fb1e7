//! Classic collection implementations: linked list, stack, queue, and
//! binary search tree. The queue backs the BFS driver's frontier.

pub mod bst;
pub mod linked_list;
pub mod queue;
pub mod stack;

pub use bst::{Bst, TraversalOrder};
pub use linked_list::LinkedList;
pub use queue::Queue;
pub use stack::Stack;
