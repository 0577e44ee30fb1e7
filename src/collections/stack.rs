//! LIFO stack over a singly linked chain.

struct Node<T> {
    data: T,
    next: Option<Box<Node<T>>>,
}

/// A last-in, first-out stack. Push, pop and peek are O(1).
pub struct Stack<T> {
    top: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { top: None, len: 0 }
    }

    /// Number of items on the stack.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the stack has no items.
    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Push a value onto the top of the stack.
    pub fn push(&mut self, data: T) {
        let top = self.top.take();
        self.top = Some(Box::new(Node { data, next: top }));
        self.len += 1;
    }

    /// Remove and return the top value, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        let node = self.top.take()?;
        self.top = node.next;
        self.len -= 1;
        Some(node.data)
    }

    /// Borrow the top value without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.top.as_deref().map(|node| &node.data)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Iterative drop; a deep stack must not recurse through Box drops.
impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        let mut next = self.top.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}
