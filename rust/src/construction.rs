//! Construction and initialization logic for BTree and nodes.
//!
//! This module contains minimum-degree validation, tree initialization with
//! an empty root leaf, node constructors, and default implementations.

use crate::compact_arena::CompactArena;
use crate::error::{BTreeError, InitResult};
use crate::types::{BTree, Node, NodeId, MIN_DEGREE};

/// Default minimum degree for B-tree nodes
pub const DEFAULT_DEGREE: usize = 8;

impl<K> BTree<K> {
    /// Create a B-tree with the given minimum degree `t`.
    ///
    /// Every non-root node will hold between `t - 1` and `2t - 1` keys.
    ///
    /// # Arguments
    ///
    /// * `min_degree` - Minimum degree `t` (at least 2)
    ///
    /// # Returns
    ///
    /// Returns `Ok(BTree)` if the degree is valid, `Err(BTreeError)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let tree = BTree::<i32>::new(3).unwrap();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.max_keys(), 5);
    ///
    /// assert!(BTree::<i32>::new(1).is_err());
    /// ```
    pub fn new(min_degree: usize) -> InitResult<Self> {
        validation::validate_degree(min_degree)?;
        Ok(Self::with_validated_degree(min_degree))
    }

    /// Build an empty tree whose single root leaf is sized for `min_degree`.
    ///
    /// `min_degree` must already have passed `validate_degree`.
    fn with_validated_degree(min_degree: usize) -> Self {
        let mut arena = CompactArena::new();
        let root = arena.allocate(Node::new_leaf(min_degree));

        Self {
            min_degree,
            root,
            arena,
        }
    }

    /// Create a B-tree with default minimum degree.
    ///
    /// This is equivalent to calling `new(DEFAULT_DEGREE)`.
    pub fn with_default_degree() -> InitResult<Self> {
        Self::new(DEFAULT_DEGREE)
    }

    /// Returns the minimum degree `t`.
    pub fn min_degree(&self) -> usize {
        self.min_degree
    }

    /// Returns the maximum number of keys a node may hold, `2t - 1`.
    pub fn max_keys(&self) -> usize {
        2 * self.min_degree - 1
    }

    /// Returns the minimum number of keys a non-root node must hold, `t - 1`.
    pub fn min_keys(&self) -> usize {
        self.min_degree - 1
    }
}

impl<K> Node<K> {
    /// Creates an empty leaf sized for minimum degree `t`.
    pub fn new_leaf(min_degree: usize) -> Self {
        Self {
            keys: Vec::with_capacity(2 * min_degree - 1),
            children: Vec::new(),
        }
    }

    /// Creates an internal node from keys and children.
    ///
    /// The caller guarantees `children.len() == keys.len() + 1`.
    pub fn new_internal(keys: Vec<K>, children: Vec<NodeId>) -> Self {
        debug_assert_eq!(children.len(), keys.len() + 1);
        Self { keys, children }
    }
}

// Default implementations
impl<K> Default for BTree<K> {
    /// Create a B-tree with default minimum degree.
    fn default() -> Self {
        Self::with_validated_degree(DEFAULT_DEGREE)
    }
}

impl<K> Default for Node<K> {
    /// An empty leaf with no reserved capacity.
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            children: Vec::new(),
        }
    }
}

/// Validation utilities for construction
pub mod validation {
    use super::*;

    /// Validate that a minimum degree keeps the B-tree invariants well defined.
    ///
    /// Below `t = 2` the lower bound `t - 1` is zero, so underflow never
    /// triggers and borrow/merge repair degenerates.
    pub fn validate_degree(min_degree: usize) -> InitResult<()> {
        if min_degree < MIN_DEGREE {
            Err(BTreeError::invalid_degree(min_degree, MIN_DEGREE))
        } else {
            Ok(())
        }
    }

    /// Get a recommended minimum degree for a given expected number of keys.
    ///
    /// Always returns at least `MIN_DEGREE`.
    pub fn recommended_degree(expected_keys: usize) -> usize {
        if expected_keys < 100 {
            MIN_DEGREE
        } else if expected_keys < 10_000 {
            8
        } else if expected_keys < 1_000_000 {
            16
        } else {
            32
        }
    }
}
