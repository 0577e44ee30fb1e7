//! Binary search tree.

/// Which order a [`Bst`] traversal visits its nodes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Left subtree, node, right subtree — ascending for a BST.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

struct TreeNode<T> {
    item: T,
    left: Option<Box<TreeNode<T>>>,
    right: Option<Box<TreeNode<T>>>,
}

/// A binary search tree. Duplicates are inserted into the right subtree.
pub struct Bst<T: Ord> {
    root: Option<Box<TreeNode<T>>>,
    len: usize,
}

impl<T: Ord> Bst<T> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of items in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no items.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert an item in its ordered position.
    pub fn insert(&mut self, item: T) {
        let mut cursor = &mut self.root;
        while let Some(node) = cursor {
            if item < node.item {
                cursor = &mut node.left;
            } else {
                cursor = &mut node.right;
            }
        }
        *cursor = Some(Box::new(TreeNode {
            item,
            left: None,
            right: None,
        }));
        self.len += 1;
    }

    /// Whether the tree contains `item`.
    pub fn contains(&self, item: &T) -> bool {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            if *item == node.item {
                return true;
            }
            cursor = if *item < node.item {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }
        false
    }

    /// The smallest item: the leftmost node.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.item)
    }

    /// The largest item: the rightmost node.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.item)
    }

    /// Remove the first node holding `item`. Returns whether a node was
    /// removed. A node with two children is replaced by its in-order
    /// successor.
    pub fn remove(&mut self, item: &T) -> bool {
        let removed = Self::remove_from(&mut self.root, item);
        if removed {
            self.len -= 1;
        }
        removed
    }

    fn remove_from(slot: &mut Option<Box<TreeNode<T>>>, item: &T) -> bool {
        let node = match slot {
            Some(node) => node,
            None => return false,
        };
        if *item < node.item {
            return Self::remove_from(&mut node.left, item);
        }
        if *item > node.item {
            return Self::remove_from(&mut node.right, item);
        }
        match (node.left.take(), node.right.take()) {
            (None, None) => {
                *slot = None;
            }
            (Some(left), None) => {
                *slot = Some(left);
            }
            (None, Some(right)) => {
                *slot = Some(right);
            }
            (Some(left), Some(right)) => {
                let (successor, rest) = Self::detach_min(right);
                node.item = successor;
                node.left = Some(left);
                node.right = rest;
            }
        }
        true
    }

    /// Remove the smallest item from an owned subtree, returning it along
    /// with what remains of the subtree.
    fn detach_min(mut node: Box<TreeNode<T>>) -> (T, Option<Box<TreeNode<T>>>) {
        match node.left.take() {
            None => {
                let TreeNode { item, right, .. } = *node;
                (item, right)
            }
            Some(left) => {
                let (min_item, rest) = Self::detach_min(left);
                node.left = rest;
                (min_item, Some(node))
            }
        }
    }

    /// Visit every item in the requested order.
    pub fn traverse(&self, order: TraversalOrder) -> Vec<&T> {
        let mut collector = Vec::with_capacity(self.len);
        Self::traverse_from(self.root.as_deref(), order, &mut collector);
        collector
    }

    fn traverse_from<'a>(
        node: Option<&'a TreeNode<T>>,
        order: TraversalOrder,
        collector: &mut Vec<&'a T>,
    ) {
        let node = match node {
            Some(node) => node,
            None => return,
        };
        match order {
            TraversalOrder::InOrder => {
                Self::traverse_from(node.left.as_deref(), order, collector);
                collector.push(&node.item);
                Self::traverse_from(node.right.as_deref(), order, collector);
            }
            TraversalOrder::PreOrder => {
                collector.push(&node.item);
                Self::traverse_from(node.left.as_deref(), order, collector);
                Self::traverse_from(node.right.as_deref(), order, collector);
            }
            TraversalOrder::PostOrder => {
                Self::traverse_from(node.left.as_deref(), order, collector);
                Self::traverse_from(node.right.as_deref(), order, collector);
                collector.push(&node.item);
            }
        }
    }

    /// Height of the deepest leaf.
    pub fn max_depth(&self) -> usize {
        Self::max_depth_from(self.root.as_deref())
    }

    fn max_depth_from(node: Option<&TreeNode<T>>) -> usize {
        match node {
            None => 0,
            Some(node) => {
                1 + Self::max_depth_from(node.left.as_deref())
                    .max(Self::max_depth_from(node.right.as_deref()))
            }
        }
    }

    /// Height of the shallowest leaf.
    pub fn min_depth(&self) -> usize {
        Self::min_depth_from(self.root.as_deref())
    }

    fn min_depth_from(node: Option<&TreeNode<T>>) -> usize {
        match node {
            None => 0,
            Some(node) => {
                1 + Self::min_depth_from(node.left.as_deref())
                    .min(Self::min_depth_from(node.right.as_deref()))
            }
        }
    }

    /// Whether no leaf is more than one level deeper than another.
    pub fn is_balanced(&self) -> bool {
        self.max_depth() - self.min_depth() < 2
    }
}

impl<T: Ord> Default for Bst<T> {
    fn default() -> Self {
        Self::new()
    }
}
