//! Validation and debugging utilities for BTree.
//!
//! This module contains invariant checking, debugging utilities, and test
//! helpers. None of it runs on the plain `insert`/`remove`/`contains` path;
//! the checked `try_*` operations and the tests call it explicitly.

use tracing::debug;

use crate::error::{BTreeError, BTreeResult, BTreeResultExt, TreeResult};
use crate::types::{BTree, NodeId};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<K: Ord> BTree<K> {
    /// Check if the tree maintains B-tree invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    ///
    /// Verifies key order and child ranges, node degree bounds, child
    /// arity, uniform leaf depth, and that the arena holds exactly the
    /// nodes reachable from the root.
    pub fn check_invariants_detailed(&self) -> BTreeResult<()> {
        let mut leaf_depth = None;
        self.check_node_invariants(self.root, None, None, 0, &mut leaf_depth)?;
        self.check_arena_tree_consistency()?;
        Ok(())
    }

    /// Check that arena allocation matches tree structure
    fn check_arena_tree_consistency(&self) -> TreeResult<()> {
        let (leaves, internals) = self.count_nodes_in_tree();
        let allocated = self.allocated_node_count();

        if leaves + internals != allocated {
            return Err(BTreeError::arena_error(
                "Node consistency check",
                &format!(
                    "{} nodes in tree vs {} in arena",
                    leaves + internals,
                    allocated
                ),
            ));
        }

        Ok(())
    }

    /// Recursively check invariants for a node and its subtree.
    ///
    /// Every key must lie strictly between `min_key` and `max_key`.
    fn check_node_invariants(
        &self,
        id: NodeId,
        min_key: Option<&K>,
        max_key: Option<&K>,
        depth: usize,
        leaf_depth: &mut Option<usize>,
    ) -> TreeResult<()> {
        let node = self.get_node(id).ok_or_else(|| {
            BTreeError::arena_error("Node lookup", &format!("node {} is not allocated", id))
        })?;
        let is_root = id == self.root;

        if node.keys.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(BTreeError::corrupted_tree(
                "Key order",
                &format!("node {} keys are not strictly increasing", id),
            ));
        }

        if node.keys.len() > self.max_keys() {
            return Err(BTreeError::corrupted_tree(
                "Degree",
                &format!(
                    "node {} holds {} keys, maximum is {}",
                    id,
                    node.keys.len(),
                    self.max_keys()
                ),
            ));
        }

        if !is_root && node.keys.len() < self.min_keys() {
            return Err(BTreeError::corrupted_tree(
                "Degree",
                &format!(
                    "node {} holds {} keys, minimum is {}",
                    id,
                    node.keys.len(),
                    self.min_keys()
                ),
            ));
        }

        if let (Some(min), Some(first)) = (min_key, node.keys.first()) {
            if first <= min {
                return Err(BTreeError::corrupted_tree(
                    "Child range",
                    &format!("node {} starts at or below its lower separator", id),
                ));
            }
        }
        if let (Some(max), Some(last)) = (max_key, node.keys.last()) {
            if last >= max {
                return Err(BTreeError::corrupted_tree(
                    "Child range",
                    &format!("node {} ends at or above its upper separator", id),
                ));
            }
        }

        if node.is_leaf() {
            match *leaf_depth {
                None => *leaf_depth = Some(depth),
                Some(expected) if expected != depth => {
                    return Err(BTreeError::corrupted_tree(
                        "Depth",
                        &format!("leaf {} at depth {}, expected {}", id, depth, expected),
                    ));
                }
                Some(_) => {}
            }
            return Ok(());
        }

        if node.children.len() != node.keys.len() + 1 {
            return Err(BTreeError::corrupted_tree(
                "Arity",
                &format!(
                    "node {} has {} keys but {} children",
                    id,
                    node.keys.len(),
                    node.children.len()
                ),
            ));
        }

        for (i, &child) in node.children.iter().enumerate() {
            let child_min = if i == 0 { min_key } else { Some(&node.keys[i - 1]) };
            let child_max = node.keys.get(i).or(max_key);
            self.check_node_invariants(child, child_min, child_max, depth + 1, leaf_depth)?;
        }

        Ok(())
    }

    // ============================================================================
    // DEBUGGING AND TESTING UTILITIES
    // ============================================================================

    /// Alias for check_invariants_detailed (for test compatibility).
    pub fn validate(&self) -> BTreeResult<()> {
        self.check_invariants_detailed()
    }

    /// Returns the depth of every leaf, left to right.
    pub fn leaf_depths(&self) -> Vec<usize> {
        let mut depths = Vec::new();
        self.collect_leaf_depths(self.root, 0, &mut depths);
        depths
    }

    fn collect_leaf_depths(&self, node: NodeId, depth: usize, depths: &mut Vec<usize>) {
        let node = &self.arena[node];
        if node.is_leaf() {
            depths.push(depth);
            return;
        }
        for &child in &node.children {
            self.collect_leaf_depths(child, depth + 1, depths);
        }
    }

    // ============================================================================
    // VALIDATION HELPERS FOR OPERATIONS
    // ============================================================================

    /// Check if tree is in a valid state for operations
    pub fn validate_for_operation(&self, operation: &str) -> BTreeResult<()> {
        self.check_invariants_detailed()
            .with_operation(operation)
            .map_err(|e| {
                debug!(operation, error = %e, "tree failed validation");
                e
            })
    }
}

impl<K: Ord + Clone> BTree<K> {
    /// Returns all keys in order (for testing/debugging).
    pub fn in_order_keys(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.len());
        self.collect_in_order(self.root, &mut keys);
        keys
    }

    fn collect_in_order(&self, node: NodeId, keys: &mut Vec<K>) {
        let node = &self.arena[node];
        if node.is_leaf() {
            keys.extend(node.keys.iter().cloned());
            return;
        }
        for (i, &child) in node.children.iter().enumerate() {
            self.collect_in_order(child, keys);
            if let Some(key) = node.keys.get(i) {
                keys.push(key.clone());
            }
        }
    }
}
