//! B-tree set implementation in Rust.
//!
//! This crate provides an in-memory B-tree of configurable minimum degree
//! `t` holding a set of unique, ordered keys. It supports membership search,
//! insertion with proactive top-down splitting, and deletion with
//! borrow/merge repair of underflowing nodes.
//!
//! Nodes live in a compact arena and refer to their children by `NodeId`,
//! so splits and merges move ids rather than owned pointers.
//!
//! ```
//! use btree::BTree;
//!
//! let mut tree = BTree::new(3).unwrap();
//! tree.extend(0..100);
//! assert!(tree.contains(&42));
//! assert!(tree.remove(&42));
//! assert!(!tree.contains(&42));
//! assert_eq!(tree.len(), 99);
//! ```

mod compact_arena;
mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod node;
mod tree_structure;
mod types;
mod validation;

pub use compact_arena::{CompactArena, CompactArenaStats};
pub use construction::validation::{recommended_degree, validate_degree};
pub use construction::DEFAULT_DEGREE;
pub use error::{BTreeError, BTreeResult, BTreeResultExt, InitResult, ModifyResult};
pub use types::{BTree, Node, NodeId, SearchResult, NULL_NODE};

impl<K: Ord + Clone> BTree<K> {
    // ============================================================================
    // CHECKED OPERATIONS
    // ============================================================================

    /// Insert with invariant validation before and after the mutation.
    ///
    /// Returns whether the key was newly added.
    pub fn try_insert(&mut self, key: K) -> ModifyResult<bool> {
        self.validate_for_operation("insert")?;
        let inserted = self.insert(key);
        self.validate_for_operation("insert")?;
        Ok(inserted)
    }

    /// Remove with invariant validation, reporting an absent key as an error.
    pub fn try_remove(&mut self, key: &K) -> ModifyResult<()> {
        self.validate_for_operation("remove")?;

        if !self.remove(key) {
            return Err(BTreeError::KeyNotFound);
        }

        self.validate_for_operation("remove")?;
        Ok(())
    }

    /// Batch insert with rollback on any failure.
    ///
    /// Keys this call newly added are removed again if a later step fails;
    /// keys that were already present are left alone.
    pub fn batch_insert(&mut self, keys: Vec<K>) -> ModifyResult<Vec<bool>> {
        let mut results = Vec::with_capacity(keys.len());
        let mut inserted_keys = Vec::new();

        for key in keys {
            match self.try_insert(key.clone()) {
                Ok(inserted) => {
                    if inserted {
                        inserted_keys.push(key);
                    }
                    results.push(inserted);
                }
                Err(e) => {
                    for rollback_key in &inserted_keys {
                        self.remove(rollback_key);
                    }
                    return Err(e);
                }
            }
        }

        Ok(results)
    }
}

#[cfg(test)]
mod checked_operation_tests {
    use super::*;

    #[test]
    fn test_try_insert_reports_new_and_existing_keys() {
        let mut tree = BTree::new(2).unwrap();
        assert_eq!(tree.try_insert(5), Ok(true));
        assert_eq!(tree.try_insert(5), Ok(false));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_try_remove_absent_key_is_key_not_found() {
        let mut tree = BTree::new(2).unwrap();
        tree.extend([1, 2, 3]);
        assert_eq!(tree.try_remove(&2), Ok(()));
        assert_eq!(tree.try_remove(&2), Err(BTreeError::KeyNotFound));
        assert_eq!(tree.in_order_keys(), vec![1, 3]);
    }

    #[test]
    fn test_try_insert_refuses_corrupted_tree() {
        let mut tree = BTree::new(2).unwrap();
        tree.extend([1, 2, 3]);
        tree.arena[tree.root].keys.swap(0, 2);

        let err = tree.try_insert(10).unwrap_err();
        assert!(err.is_integrity_error());
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_batch_insert() {
        let mut tree = BTree::new(2).unwrap();
        tree.insert(3);
        let results = tree.batch_insert(vec![1, 2, 3, 4]).unwrap();
        assert_eq!(results, vec![true, true, false, true]);
        assert_eq!(tree.in_order_keys(), vec![1, 2, 3, 4]);
    }
}
