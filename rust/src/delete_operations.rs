//! DELETE operations for BTree.
//!
//! This module contains key removal, predecessor extraction, underflow
//! repair by rotation or merge, and root collapse.
//!
//! Keys are never deleted physically from an internal node: the separator
//! is overwritten with its predecessor, which is then removed from the leaf
//! level. Every recursive call repairs the child it just returned from
//! before handing control back, so the only node that may be short of
//! `t - 1` keys when an operation finishes is the root.

use tracing::{debug, trace};

use crate::types::{BTree, NodeId};

impl<K: Ord> BTree<K> {
    // ============================================================================
    // PUBLIC DELETE OPERATIONS
    // ============================================================================

    /// Remove a key from the tree.
    ///
    /// Returns `true` if the key was present and removed. Removing an absent
    /// key returns `false` and leaves the tree untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let mut tree = BTree::new(2).unwrap();
    /// tree.insert(1);
    /// assert!(tree.remove(&1));
    /// assert!(!tree.remove(&1));
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, key: &K) -> bool {
        let removed = self.remove_recursive(self.root, key);
        if removed {
            self.collapse_root_if_needed();
        }
        removed
    }

    // ============================================================================
    // HELPERS FOR DELETE OPERATIONS
    // ============================================================================

    fn remove_recursive(&mut self, node: NodeId, key: &K) -> bool {
        let is_leaf = self.arena[node].is_leaf();

        match self.arena[node].search_keys(key) {
            Ok(index) if is_leaf => {
                self.arena[node].remove_at(index);
                true
            }
            Ok(index) => {
                let left = self.arena[node].children[index];
                let predecessor = self.remove_largest(left);
                self.arena[node].keys[index] = predecessor;
                self.fix_violation(node, index);
                true
            }
            Err(_) if is_leaf => false,
            Err(index) => {
                let child = self.arena[node].children[index];
                if !self.remove_recursive(child, key) {
                    return false;
                }
                self.fix_violation(node, index);
                true
            }
        }
    }

    /// Remove and return the largest key in the subtree rooted at `node`,
    /// repairing each level on the way back up.
    ///
    /// `node` is never the root, so it holds at least `t - 1 >= 1` keys.
    fn remove_largest(&mut self, node: NodeId) -> K {
        if self.arena[node].is_leaf() {
            debug_assert!(
                !self.arena[node].is_empty(),
                "remove_largest reached an empty leaf"
            );
            return self.arena[node]
                .pop_last()
                .unwrap_or_else(|| panic!("leaf {node} below a separator holds no keys"));
        }

        let last_index = self.arena[node].children.len() - 1;
        let last_child = self.arena[node].children[last_index];
        let key = self.remove_largest(last_child);
        self.fix_violation(node, last_index);
        key
    }

    /// Restore the degree bound of `parent.children[index]` after it may
    /// have lost a key.
    ///
    /// Tries a rotation through the left sibling, then through the right
    /// sibling, and merges with a sibling (preferring the left) only when
    /// neither can spare a key. A merge takes one key from `parent`, which
    /// the caller one level up repairs in turn.
    pub(crate) fn fix_violation(&mut self, parent: NodeId, index: usize) {
        let min_degree = self.min_degree;
        let child = self.arena[parent].children[index];
        if !self.arena[child].is_underfull(min_degree) {
            return;
        }

        let sibling_count = self.arena[parent].children.len();

        if index > 0 {
            let left = self.arena[parent].children[index - 1];
            if self.arena[left].can_donate(min_degree) {
                self.rotate_right(parent, index);
                return;
            }
        }

        if index + 1 < sibling_count {
            let right = self.arena[parent].children[index + 1];
            if self.arena[right].can_donate(min_degree) {
                self.rotate_left(parent, index);
                return;
            }
        }

        if index > 0 {
            self.merge_children(parent, index - 1);
        } else {
            self.merge_children(parent, index);
        }
    }

    /// Move the left sibling's largest key up into the separator and the old
    /// separator down to the front of `parent.children[index]`.
    fn rotate_right(&mut self, parent: NodeId, index: usize) {
        let left = self.arena[parent].children[index - 1];
        let child = self.arena[parent].children[index];

        if let Some((moved_key, moved_child)) = self.arena[left].borrow_last() {
            let separator = std::mem::replace(&mut self.arena[parent].keys[index - 1], moved_key);
            self.arena[child].accept_from_left(separator, moved_child);
            trace!(parent, from = left, to = child, "rotated key from left sibling");
        }
    }

    /// Move the right sibling's smallest key up into the separator and the
    /// old separator down to the back of `parent.children[index]`.
    fn rotate_left(&mut self, parent: NodeId, index: usize) {
        let child = self.arena[parent].children[index];
        let right = self.arena[parent].children[index + 1];

        if let Some((moved_key, moved_child)) = self.arena[right].borrow_first() {
            let separator = std::mem::replace(&mut self.arena[parent].keys[index], moved_key);
            self.arena[child].accept_from_right(separator, moved_child);
            trace!(parent, from = right, to = child, "rotated key from right sibling");
        }
    }

    /// Fuse `parent.children[left_index]`, the separator at `left_index`, and
    /// `parent.children[left_index + 1]` into the left node.
    fn merge_children(&mut self, parent: NodeId, left_index: usize) {
        let parent_node = &mut self.arena[parent];
        let separator = parent_node.keys.remove(left_index);
        let right = parent_node.children.remove(left_index + 1);
        let left = parent_node.children[left_index];

        let right_node = self.take_node(right);
        self.arena[left].merge_from(separator, right_node);

        trace!(parent, left, right, "merged siblings");
    }

    /// Promote the only child of a keyless root, shrinking the height by one.
    fn collapse_root_if_needed(&mut self) {
        let root = &self.arena[self.root];
        if !root.is_empty() || root.children.len() != 1 {
            return;
        }

        let old_root = self.root;
        let only_child = root.children[0];
        self.root = only_child;
        self.take_node(old_root);

        debug!(
            root = self.root,
            height = self.height(),
            "collapsed empty root, tree shrank by one level"
        );
    }
}
