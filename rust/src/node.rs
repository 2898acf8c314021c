//! Node-level operations for BTree.
//!
//! A node does not know the tree's minimum degree, so every helper that
//! depends on it takes `min_degree` as an argument. The helpers here only
//! touch the node's own key and child vectors; moving keys between parent
//! and children is coordinated by the tree in the `*_operations` modules.

use crate::types::{Node, NodeId};

impl<K: Ord> Node<K> {
    // ============================================================================
    // GET OPERATIONS
    // ============================================================================

    /// Locate `key` among this node's keys.
    ///
    /// `Ok(i)` is an exact match at `i`. `Err(i)` is the index of the first
    /// key greater than `key`, which is also the index of the child whose
    /// range contains it.
    #[inline]
    pub fn search_keys(&self, key: &K) -> Result<usize, usize> {
        self.keys.binary_search(key)
    }

    /// Index of the child whose range contains `key`.
    #[inline]
    pub fn find_child_index(&self, key: &K) -> usize {
        match self.search_keys(key) {
            Ok(index) => index + 1,
            Err(index) => index,
        }
    }

    /// Get a reference to the keys in this node.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Get the child ids of this node. Empty for a leaf.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Returns the smallest key in this node.
    pub fn first_key(&self) -> Option<&K> {
        self.keys.first()
    }

    /// Returns the largest key in this node.
    pub fn last_key(&self) -> Option<&K> {
        self.keys.last()
    }

    // ============================================================================
    // INSERT OPERATIONS
    // ============================================================================

    /// Insert `key` at its sorted position. Returns false if already present.
    pub fn insert_key(&mut self, key: K) -> bool {
        match self.search_keys(&key) {
            Ok(_) => false,
            Err(index) => {
                self.keys.insert(index, key);
                true
            }
        }
    }

    /// Split a full node around its median.
    ///
    /// With `2t - 1` keys the median sits at index `t - 1`. This node keeps
    /// keys `[0, t-2]` and, if internal, children `[0, t-1]`; the returned
    /// right node gets keys `[t, 2t-2]` and children `[t, 2t-1]`.
    pub fn split(&mut self, min_degree: usize) -> (K, Node<K>) {
        debug_assert_eq!(self.keys.len(), 2 * min_degree - 1);

        let right_keys = self.keys.split_off(min_degree);
        let right_children = if self.is_leaf() {
            Vec::new()
        } else {
            self.children.split_off(min_degree)
        };

        let median = self.keys.remove(min_degree - 1);

        let right = Node {
            keys: right_keys,
            children: right_children,
        };

        (median, right)
    }

    // ============================================================================
    // DELETE OPERATIONS
    // ============================================================================

    /// Remove and return the key at `index`, found by a prior `search_keys`.
    pub fn remove_at(&mut self, index: usize) -> K {
        self.keys.remove(index)
    }

    /// Remove and return the largest key.
    pub fn pop_last(&mut self) -> Option<K> {
        self.keys.pop()
    }

    // ============================================================================
    // BORROWING AND MERGING HELPERS
    // ============================================================================

    /// Take the last key and, if internal, the last child (left sibling side).
    pub fn borrow_last(&mut self) -> Option<(K, Option<NodeId>)> {
        let key = self.keys.pop()?;
        Some((key, self.children.pop()))
    }

    /// Take the first key and, if internal, the first child (right sibling side).
    pub fn borrow_first(&mut self) -> Option<(K, Option<NodeId>)> {
        if self.is_empty() {
            return None;
        }
        let key = self.keys.remove(0);
        let child = if self.is_leaf() {
            None
        } else {
            Some(self.children.remove(0))
        };
        Some((key, child))
    }

    /// Accept the parent separator at the front, with the child moved over
    /// from the left sibling.
    pub fn accept_from_left(&mut self, separator: K, moved_child: Option<NodeId>) {
        self.keys.insert(0, separator);
        if let Some(child) = moved_child {
            self.children.insert(0, child);
        }
    }

    /// Accept the parent separator at the back, with the child moved over
    /// from the right sibling.
    pub fn accept_from_right(&mut self, separator: K, moved_child: Option<NodeId>) {
        self.keys.push(separator);
        if let Some(child) = moved_child {
            self.children.push(child);
        }
    }

    /// Append the parent separator and all of `other` (the right sibling).
    pub fn merge_from(&mut self, separator: K, mut other: Node<K>) {
        self.keys.push(separator);
        self.keys.append(&mut other.keys);
        self.children.append(&mut other.children);
    }
}

impl<K> Node<K> {
    // ============================================================================
    // STATUS CHECKS
    // ============================================================================

    /// Returns true if this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of keys in this node.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if this node holds no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns true if this node holds `2t - 1` keys and must split before
    /// anything descends into it.
    #[inline]
    pub fn is_full(&self, min_degree: usize) -> bool {
        self.len() >= 2 * min_degree - 1
    }

    /// Returns true if this node holds fewer than `t - 1` keys.
    #[inline]
    pub fn is_underfull(&self, min_degree: usize) -> bool {
        self.len() < min_degree - 1
    }

    /// Returns true if this node can give a key to a sibling and stay legal.
    #[inline]
    pub fn can_donate(&self, min_degree: usize) -> bool {
        self.len() > min_degree - 1
    }
}
