//! FIFO queue built from two stacks.

use super::Stack;

/// A first-in, first-out queue implemented with an inbox and an outbox
/// stack. Enqueue pushes onto the inbox; dequeue pops the outbox,
/// refilling it from the inbox when it runs dry. Both operations are
/// amortized O(1), which keeps the BFS driver linear in vertices plus
/// edges.
pub struct Queue<T> {
    inbox: Stack<T>,
    outbox: Stack<T>,
}

impl<T> Queue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            inbox: Stack::new(),
            outbox: Stack::new(),
        }
    }

    /// Number of items in the queue.
    pub fn len(&self) -> usize {
        self.inbox.len() + self.outbox.len()
    }

    /// Whether the queue has no items.
    pub fn is_empty(&self) -> bool {
        self.inbox.is_empty() && self.outbox.is_empty()
    }

    /// Add a value at the back of the queue.
    pub fn enqueue(&mut self, data: T) {
        self.inbox.push(data);
    }

    /// Remove and return the value at the front of the queue, or `None`
    /// when empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.outbox.is_empty() {
            while let Some(value) = self.inbox.pop() {
                self.outbox.push(value);
            }
        }
        self.outbox.pop()
    }

    /// Borrow the value at the front of the queue without removing it.
    pub fn peek(&mut self) -> Option<&T> {
        if self.outbox.is_empty() {
            while let Some(value) = self.inbox.pop() {
                self.outbox.push(value);
            }
        }
        self.outbox.peek()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}
