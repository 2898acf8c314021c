//! GET operations for BTree.
//!
//! This module contains the read-only descents: membership lookup, the
//! located search used for diagnostics, and smallest/largest key lookup.

use crate::types::{BTree, SearchResult};

impl<K: Ord> BTree<K> {
    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Check if key exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let mut tree = BTree::new(2).unwrap();
    /// tree.insert(1);
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&2));
    /// ```
    pub fn contains(&self, key: &K) -> bool {
        self.search_node(key).is_found()
    }

    /// Search for `key`, reporting the node where the descent ended.
    ///
    /// Each level either matches one of its keys or descends into the single
    /// child whose range contains `key`, so the walk is O(log_t n) and never
    /// mutates the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::{BTree, SearchResult};
    ///
    /// let mut tree = BTree::new(2).unwrap();
    /// tree.insert(7);
    /// assert!(matches!(tree.search_node(&7), SearchResult::Found(_)));
    /// assert!(matches!(tree.search_node(&8), SearchResult::NotFound(_)));
    /// ```
    pub fn search_node(&self, key: &K) -> SearchResult {
        let mut current = self.root;

        loop {
            let node = &self.arena[current];
            match node.search_keys(key) {
                Ok(_) => return SearchResult::Found(current),
                Err(_) if node.is_leaf() => return SearchResult::NotFound(current),
                Err(child_index) => current = node.children[child_index],
            }
        }
    }

    /// Returns the smallest key in the tree.
    pub fn first(&self) -> Option<&K> {
        let mut node = &self.arena[self.root];
        while let Some(&child) = node.children.first() {
            node = &self.arena[child];
        }
        node.first_key()
    }

    /// Returns the largest key in the tree.
    pub fn last(&self) -> Option<&K> {
        let mut node = &self.arena[self.root];
        while let Some(&child) = node.children.last() {
            node = &self.arena[child];
        }
        node.last_key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with(min_degree: usize, keys: &[i32]) -> BTree<i32> {
        let mut tree = BTree::new(min_degree).unwrap();
        for &key in keys {
            tree.insert(key);
        }
        tree
    }

    #[test]
    fn test_contains_on_empty_tree() {
        let tree = BTree::<i32>::new(2).unwrap();
        assert!(!tree.contains(&0));
        assert_eq!(tree.search_node(&0), SearchResult::NotFound(tree.root_id()));
    }

    #[test]
    fn test_search_descends_to_leaf_when_absent() {
        let tree = tree_with(2, &[10, 20, 5, 6, 12, 30, 7, 17]);
        let result = tree.search_node(&18);
        assert!(!result.is_found());
        assert!(tree.get_node(result.node()).unwrap().is_leaf());
    }

    #[test]
    fn test_search_finds_separator_in_internal_node() {
        let tree = tree_with(2, &[1, 2, 3, 4]);
        // The first root split promotes 2 into a brand new root.
        assert_eq!(tree.search_node(&2), SearchResult::Found(tree.root_id()));
        assert!(!tree.get_node(tree.root_id()).unwrap().is_leaf());
    }

    #[test]
    fn test_first_and_last() {
        let tree = tree_with(2, &[40, 10, 30, 20, 50, 5, 45]);
        assert_eq!(tree.first(), Some(&5));
        assert_eq!(tree.last(), Some(&50));

        let empty = BTree::<i32>::new(3).unwrap();
        assert_eq!(empty.first(), None);
        assert_eq!(empty.last(), None);
    }
}
