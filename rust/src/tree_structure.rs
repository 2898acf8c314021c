//! Tree structure management operations for BTree.
//!
//! This module contains tree-level queries that walk the structure rather
//! than search it: size and height, clearing, node counting, and the
//! per-level diagnostic export.

use std::fmt::Debug;

use crate::types::{BTree, Node, NodeId};

// ============================================================================
// TREE STRUCTURE OPERATIONS
// ============================================================================

impl<K> BTree<K> {
    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len_recursive(self.root)
    }

    fn len_recursive(&self, node: NodeId) -> usize {
        let node = &self.arena[node];
        node.len()
            + node
                .children
                .iter()
                .map(|&child| self.len_recursive(child))
                .sum::<usize>()
    }

    /// Returns true if the tree holds no keys.
    ///
    /// A keyless root is always a leaf, because a root left with no keys and
    /// one child is replaced by that child.
    pub fn is_empty(&self) -> bool {
        self.arena[self.root].is_empty()
    }

    /// Returns the number of levels, counting the root. An empty tree has
    /// height 1.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut node = &self.arena[self.root];
        while let Some(&child) = node.children.first() {
            height += 1;
            node = &self.arena[child];
        }
        height
    }

    /// Returns true if the root is a leaf node.
    pub fn is_leaf_root(&self) -> bool {
        self.arena[self.root].is_leaf()
    }

    /// Id of the current root node.
    pub fn root_id(&self) -> NodeId {
        self.root
    }

    /// Clear all keys from the tree.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = self.arena.allocate(Node::new_leaf(self.min_degree));
    }

    /// Count the number of leaf and internal nodes reachable from the root.
    pub fn count_nodes_in_tree(&self) -> (usize, usize) {
        self.count_nodes_recursive(self.root)
    }

    fn count_nodes_recursive(&self, node: NodeId) -> (usize, usize) {
        let node = &self.arena[node];
        if node.is_leaf() {
            return (1, 0);
        }

        node.children
            .iter()
            .map(|&child| self.count_nodes_recursive(child))
            .fold((0, 1), |(leaves, internals), (l, i)| {
                (leaves + l, internals + i)
            })
    }
}

impl<K: Clone> BTree<K> {
    /// Export every node as `(level, keys)` in pre-order, the root at level 0.
    ///
    /// This is a debugging and test-inspection aid, not part of the set API.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let mut tree = BTree::new(2).unwrap();
    /// tree.extend([1, 2, 3, 4]);
    /// assert_eq!(
    ///     tree.traverse(),
    ///     vec![(0, vec![2]), (1, vec![1]), (1, vec![3, 4])]
    /// );
    /// ```
    pub fn traverse(&self) -> Vec<(usize, Vec<K>)> {
        let mut levels = Vec::new();
        self.traverse_recursive(self.root, 0, &mut levels);
        levels
    }

    fn traverse_recursive(&self, node: NodeId, level: usize, out: &mut Vec<(usize, Vec<K>)>) {
        let node = &self.arena[node];
        out.push((level, node.keys.clone()));
        for &child in &node.children {
            self.traverse_recursive(child, level + 1, out);
        }
    }
}

impl<K: Clone + Debug> BTree<K> {
    /// Prints the tree level by level for debugging.
    pub fn print_tree(&self) {
        for (level, keys) in self.traverse() {
            println!("Level {} Keys: {:?}", level, keys);
        }
    }
}
