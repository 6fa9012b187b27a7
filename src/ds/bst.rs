//! Unbalanced binary search tree over a `SlotArena`.
//!
//! Nodes live in the arena and refer to their children by `SlotId`, so the
//! tree owns no boxed pointers and every operation is iterative. A degenerate
//! (sorted-insert) tree degrades to O(n) per operation but never overflows the
//! call stack.
//!
//! ## Operations
//!
//! | Method          | Average  | Worst | Notes                              |
//! |-----------------|----------|-------|------------------------------------|
//! | `insert`        | O(log n) | O(n)  | duplicates are ignored             |
//! | `contains`      | O(log n) | O(n)  |                                    |
//! | `remove`        | O(log n) | O(n)  | two-child case uses successor      |
//! | `min` / `max`   | O(log n) | O(n)  |                                    |
//! | traversals      | O(n)     | O(n)  | in/pre/post/level order            |
//! | `height`        | O(n)     | O(n)  | `None` for an empty tree           |
//! | `is_balanced`   | O(n)     | O(n)  | AVL-style height check             |
//!
//! ## Example
//!
//! ```
//! use structkit::ds::BinarySearchTree;
//!
//! let mut tree: BinarySearchTree<i32> = [50, 30, 70, 20, 40].into_iter().collect();
//! assert!(!tree.insert(30)); // duplicate
//! assert_eq!(tree.in_order(), vec![&20, &30, &40, &50, &70]);
//!
//! assert!(tree.remove(&30));
//! assert_eq!(tree.min(), Some(&20));
//! assert_eq!(tree.height(), Some(2));
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use crate::ds::slot_arena::{SlotArena, SlotId};

#[derive(Debug)]
struct TreeNode<T> {
    value: T,
    left: Option<SlotId>,
    right: Option<SlotId>,
}

impl<T> TreeNode<T> {
    fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Ordered set of unique values backed by an unbalanced binary search tree.
#[derive(Debug)]
pub struct BinarySearchTree<T> {
    arena: SlotArena<TreeNode<T>>,
    root: Option<SlotId>,
}

impl<T: Ord> BinarySearchTree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            arena: SlotArena::new(),
            root: None,
        }
    }

    /// Inserts `value`; returns `false` (and drops `value`) if it was already present.
    pub fn insert(&mut self, value: T) -> bool {
        let Some(mut cur) = self.root else {
            self.root = Some(self.arena.insert(TreeNode::leaf(value)));
            return true;
        };

        loop {
            let Some(node) = self.arena.get(cur) else {
                return false;
            };
            let (side, next) = match value.cmp(&node.value) {
                Ordering::Equal => return false,
                Ordering::Less => (Side::Left, node.left),
                Ordering::Greater => (Side::Right, node.right),
            };
            match next {
                Some(child) => cur = child,
                None => {
                    let id = self.arena.insert(TreeNode::leaf(value));
                    self.set_child(Some((cur, side)), Some(id));
                    return true;
                },
            }
        }
    }

    /// Returns `true` if `value` is in the tree.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Smallest value, or `None` for an empty tree.
    pub fn min(&self) -> Option<&T> {
        let mut cur = self.node(self.root?)?;
        while let Some(left) = cur.left.and_then(|id| self.node(id)) {
            cur = left;
        }
        Some(&cur.value)
    }

    /// Largest value, or `None` for an empty tree.
    pub fn max(&self) -> Option<&T> {
        let mut cur = self.node(self.root?)?;
        while let Some(right) = cur.right.and_then(|id| self.node(id)) {
            cur = right;
        }
        Some(&cur.value)
    }

    /// Removes `value`; returns `true` if it was present.
    ///
    /// A node with two children takes over its in-order successor's value and
    /// the successor node is unlinked instead.
    pub fn remove(&mut self, value: &T) -> bool {
        let mut parent: Option<(SlotId, Side)> = None;
        let mut cur = self.root;
        while let Some(id) = cur {
            let Some(node) = self.node(id) else {
                return false;
            };
            match value.cmp(&node.value) {
                Ordering::Equal => break,
                Ordering::Less => {
                    parent = Some((id, Side::Left));
                    cur = node.left;
                },
                Ordering::Greater => {
                    parent = Some((id, Side::Right));
                    cur = node.right;
                },
            }
        }
        let Some(target) = cur else {
            return false;
        };
        let Some((left, right)) = self.node(target).map(|n| (n.left, n.right)) else {
            return false;
        };

        match (left, right) {
            (Some(_), Some(right)) => {
                let mut succ_parent = (target, Side::Right);
                let mut succ = right;
                while let Some(next) = self.node(succ).and_then(|n| n.left) {
                    succ_parent = (succ, Side::Left);
                    succ = next;
                }
                let succ_right = self.node(succ).and_then(|n| n.right);
                self.set_child(Some(succ_parent), succ_right);
                if let Some(succ_node) = self.arena.remove(succ) {
                    if let Some(node) = self.arena.get_mut(target) {
                        node.value = succ_node.value;
                    }
                }
            },
            (child, None) | (None, child) => {
                self.set_child(parent, child);
                self.arena.remove(target);
            },
        }
        true
    }

    /// Values in ascending order.
    pub fn in_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack = Vec::new();
        let mut cur = self.root;
        loop {
            while let Some(id) = cur {
                stack.push(id);
                cur = self.node(id).and_then(|n| n.left);
            }
            let Some(id) = stack.pop() else {
                break;
            };
            if let Some(node) = self.node(id) {
                out.push(&node.value);
                cur = node.right;
            }
        }
        out
    }

    /// Node, then left subtree, then right subtree.
    pub fn pre_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack: Vec<SlotId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            if let Some(node) = self.node(id) {
                out.push(&node.value);
                stack.extend(node.right);
                stack.extend(node.left);
            }
        }
        out
    }

    /// Left subtree, then right subtree, then node.
    pub fn post_order(&self) -> Vec<&T> {
        self.post_order_ids()
            .into_iter()
            .filter_map(|id| self.node(id).map(|n| &n.value))
            .collect()
    }

    /// Breadth-first, left to right within a level.
    pub fn level_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len());
        let mut queue: VecDeque<SlotId> = self.root.into_iter().collect();
        while let Some(id) = queue.pop_front() {
            if let Some(node) = self.node(id) {
                out.push(&node.value);
                queue.extend(node.left);
                queue.extend(node.right);
            }
        }
        out
    }

    /// Number of edges on the longest root-to-leaf path; `None` when empty.
    pub fn height(&self) -> Option<usize> {
        let root = self.root?;
        let mut levels = 0usize;
        let mut frontier = vec![root];
        while !frontier.is_empty() {
            levels += 1;
            frontier = frontier
                .iter()
                .filter_map(|&id| self.node(id))
                .flat_map(|n| n.left.into_iter().chain(n.right))
                .collect();
        }
        Some(levels - 1)
    }

    /// `true` if at every node the two subtree heights differ by at most one.
    pub fn is_balanced(&self) -> bool {
        let mut heights: FxHashMap<SlotId, isize> = FxHashMap::default();
        for id in self.post_order_ids() {
            let Some(node) = self.node(id) else {
                continue;
            };
            let lh = node.left.and_then(|l| heights.get(&l).copied()).unwrap_or(-1);
            let rh = node.right.and_then(|r| heights.get(&r).copied()).unwrap_or(-1);
            if (lh - rh).abs() > 1 {
                return false;
            }
            heights.insert(id, 1 + lh.max(rh));
        }
        true
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn node(&self, id: SlotId) -> Option<&TreeNode<T>> {
        self.arena.get(id)
    }

    fn find(&self, value: &T) -> Option<SlotId> {
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = self.node(id)?;
            cur = match value.cmp(&node.value) {
                Ordering::Equal => return Some(id),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }

    fn set_child(&mut self, parent: Option<(SlotId, Side)>, child: Option<SlotId>) {
        match parent {
            None => self.root = child,
            Some((id, side)) => {
                if let Some(node) = self.arena.get_mut(id) {
                    match side {
                        Side::Left => node.left = child,
                        Side::Right => node.right = child,
                    }
                }
            },
        }
    }

    fn post_order_ids(&self) -> Vec<SlotId> {
        // Reverse of a (node, right, left) pre-order walk.
        let mut out = Vec::with_capacity(self.len());
        let mut stack: Vec<SlotId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            if let Some(node) = self.node(id) {
                out.push(id);
                stack.extend(node.left);
                stack.extend(node.right);
            }
        }
        out.reverse();
        out
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BinarySearchTree<i32> {
        // 50
        // ├── 30
        // │   ├── 20
        // │   └── 40
        // └── 70
        //     ├── 60
        //     └── 80
        [50, 30, 70, 20, 40, 60, 80].into_iter().collect()
    }

    mod basic_behavior {
        use super::*;

        #[test]
        fn new_tree_is_empty() {
            let tree: BinarySearchTree<i32> = BinarySearchTree::new();
            assert!(tree.is_empty());
            assert_eq!(tree.len(), 0);
            assert_eq!(tree.min(), None);
            assert_eq!(tree.max(), None);
            assert_eq!(tree.height(), None);
            assert!(tree.in_order().is_empty());
        }

        #[test]
        fn insert_and_contains() {
            let mut tree = BinarySearchTree::new();
            assert!(tree.insert(10));
            assert!(tree.insert(5));
            assert!(tree.insert(15));
            assert_eq!(tree.len(), 3);
            assert!(tree.contains(&5));
            assert!(tree.contains(&15));
            assert!(!tree.contains(&7));
        }

        #[test]
        fn duplicate_insert_is_ignored() {
            let mut tree = BinarySearchTree::new();
            assert!(tree.insert(10));
            assert!(!tree.insert(10));
            assert_eq!(tree.len(), 1);
        }

        #[test]
        fn min_and_max() {
            let tree = sample();
            assert_eq!(tree.min(), Some(&20));
            assert_eq!(tree.max(), Some(&80));
        }

        #[test]
        fn clear_resets_tree() {
            let mut tree = sample();
            tree.clear();
            assert!(tree.is_empty());
            assert_eq!(tree.len(), 0);
            assert!(!tree.contains(&50));
            assert!(tree.insert(1));
        }
    }

    mod traversals {
        use super::*;

        #[test]
        fn in_order_is_sorted() {
            assert_eq!(
                sample().in_order(),
                vec![&20, &30, &40, &50, &60, &70, &80]
            );
        }

        #[test]
        fn pre_order_visits_node_first() {
            assert_eq!(
                sample().pre_order(),
                vec![&50, &30, &20, &40, &70, &60, &80]
            );
        }

        #[test]
        fn post_order_visits_node_last() {
            assert_eq!(
                sample().post_order(),
                vec![&20, &40, &30, &60, &80, &70, &50]
            );
        }

        #[test]
        fn level_order_is_breadth_first() {
            assert_eq!(
                sample().level_order(),
                vec![&50, &30, &70, &20, &40, &60, &80]
            );
        }
    }

    mod removal {
        use super::*;

        #[test]
        fn remove_leaf() {
            let mut tree = sample();
            assert!(tree.remove(&20));
            assert!(!tree.contains(&20));
            assert_eq!(tree.len(), 6);
            assert_eq!(tree.in_order(), vec![&30, &40, &50, &60, &70, &80]);
        }

        #[test]
        fn remove_node_with_one_child() {
            let mut tree = sample();
            tree.remove(&20);
            assert!(tree.remove(&30));
            assert_eq!(tree.in_order(), vec![&40, &50, &60, &70, &80]);
            assert_eq!(tree.level_order(), vec![&50, &40, &70, &60, &80]);
        }

        #[test]
        fn remove_node_with_two_children_uses_successor() {
            let mut tree = sample();
            assert!(tree.remove(&30));
            assert_eq!(tree.len(), 6);
            assert_eq!(tree.level_order(), vec![&50, &40, &70, &20, &60, &80]);
        }

        #[test]
        fn remove_root_with_two_children() {
            let mut tree = sample();
            assert!(tree.remove(&50));
            assert_eq!(tree.level_order(), vec![&60, &30, &70, &20, &40, &80]);
            assert_eq!(tree.in_order(), vec![&20, &30, &40, &60, &70, &80]);
        }

        #[test]
        fn remove_successor_deeper_than_right_child() {
            let mut tree: BinarySearchTree<i32> = [50, 30, 70, 60, 80, 65].into_iter().collect();
            assert!(tree.remove(&50));
            assert_eq!(tree.level_order(), vec![&60, &30, &70, &65, &80]);
        }

        #[test]
        fn remove_missing_value() {
            let mut tree = sample();
            assert!(!tree.remove(&99));
            assert_eq!(tree.len(), 7);

            let mut empty: BinarySearchTree<i32> = BinarySearchTree::new();
            assert!(!empty.remove(&1));
        }

        #[test]
        fn remove_only_node() {
            let mut tree = BinarySearchTree::new();
            tree.insert("solo");
            assert!(tree.remove(&"solo"));
            assert!(tree.is_empty());
            assert_eq!(tree.height(), None);
        }
    }

    mod shape {
        use super::*;

        #[test]
        fn height_of_single_node_is_zero() {
            let tree: BinarySearchTree<i32> = [1].into_iter().collect();
            assert_eq!(tree.height(), Some(0));
        }

        #[test]
        fn height_of_sample() {
            assert_eq!(sample().height(), Some(2));
        }

        #[test]
        fn balanced_tree_is_balanced() {
            assert!(sample().is_balanced());
            assert!(BinarySearchTree::<i32>::new().is_balanced());
        }

        #[test]
        fn skewed_tree_is_not_balanced() {
            let tree: BinarySearchTree<i32> = (1..=4).collect();
            assert!(!tree.is_balanced());
            assert_eq!(tree.height(), Some(3));
        }

        #[test]
        fn degenerate_tree_does_not_overflow_stack() {
            let tree: BinarySearchTree<u32> = (0..5_000).collect();
            assert_eq!(tree.len(), 5_000);
            assert_eq!(tree.height(), Some(4_999));
            assert_eq!(tree.max(), Some(&4_999));
            assert!(!tree.is_balanced());
            assert_eq!(tree.in_order().len(), 5_000);
        }
    }
}
