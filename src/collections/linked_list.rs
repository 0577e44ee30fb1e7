//! Singly linked list over an owned `Box` chain.

/// One node of a singly linked list.
struct Node<T> {
    data: T,
    next: Option<Box<Node<T>>>,
}

/// A singly linked list. Head operations are O(1); tail operations walk
/// the chain.
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> LinkedList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Number of nodes in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list has no nodes.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Prepend a value at the head.
    pub fn push_front(&mut self, data: T) {
        let head = self.head.take();
        self.head = Some(Box::new(Node { data, next: head }));
        self.len += 1;
    }

    /// Append a value at the tail, walking the chain to find it.
    pub fn push_back(&mut self, data: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { data, next: None }));
        self.len += 1;
    }

    /// Remove and return the head value.
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        self.head = node.next;
        self.len -= 1;
        Some(node.data)
    }

    /// Borrow the head value.
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.data)
    }

    /// Iterate over the values from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            cursor: self.head.as_deref(),
        }
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Remove the first node holding `data`. Returns whether a node was
    /// removed.
    pub fn remove(&mut self, data: &T) -> bool {
        let mut cursor = &mut self.head;
        loop {
            match cursor {
                None => return false,
                Some(node) if node.data == *data => {
                    let next = node.next.take();
                    *cursor = next;
                    self.len -= 1;
                    return true;
                }
                Some(node) => cursor = &mut node.next,
            }
        }
    }

    /// Remove every node whose value already appeared earlier in the
    /// list. First occurrence wins. Quadratic, like the classic
    /// runner-pointer formulation, but only requires `PartialEq`.
    pub fn dedup(&mut self) {
        let mut kept: Vec<T> = Vec::with_capacity(self.len);
        while let Some(value) = self.pop_front() {
            if !kept.contains(&value) {
                kept.push(value);
            }
        }
        for value in kept.into_iter().rev() {
            self.push_front(value);
        }
    }

    /// Find the value `n` nodes from the end of the list (1 = last node),
    /// using the runner technique.
    pub fn nth_from_end(&self, n: usize) -> Option<&T> {
        if n == 0 {
            return None;
        }
        let mut leader = self.head.as_deref();
        for _ in 0..n {
            leader = leader?.next.as_deref();
        }
        let mut follower = self.head.as_deref();
        while let Some(node) = leader {
            leader = node.next.as_deref();
            follower = follower.and_then(|f| f.next.as_deref());
        }
        follower.map(|node| &node.data)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Drop the chain iteratively so long lists cannot overflow the stack.
impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

/// Iterator over list values, head to tail.
pub struct Iter<'a, T> {
    cursor: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor?;
        self.cursor = node.next.as_deref();
        Some(&node.data)
    }
}
