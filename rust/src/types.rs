//! Core types and data structures for BTree.
//!
//! This module contains the tree and node structures, the node id type used
//! to address nodes in the arena, and the constants that bound the minimum
//! degree.

use crate::compact_arena::CompactArena;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Smallest minimum degree for which the degree invariants are well defined.
pub(crate) const MIN_DEGREE: usize = 2;

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

pub use crate::compact_arena::{NodeId, NULL_NODE};

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// An ordered set of keys stored in a B-tree of minimum degree `t`.
///
/// Every node other than the root holds between `t - 1` and `2t - 1` keys,
/// and every leaf sits at the same depth. Keys are unique: inserting a key
/// that is already present leaves the tree untouched.
///
/// Insertion splits full nodes on the way down, so a single downward pass
/// never has to back up. Deletion repairs underflowing children with a
/// rotation through a sibling or a merge as each recursive call returns.
///
/// # Examples
///
/// ```
/// use btree::BTree;
///
/// let mut tree = BTree::new(2).unwrap();
/// for key in [10, 20, 5, 6, 12, 30, 7, 17] {
///     tree.insert(key);
/// }
///
/// assert!(tree.contains(&17));
/// assert!(!tree.contains(&18));
/// assert!(tree.remove(&6));
/// assert_eq!(tree.len(), 7);
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion**: O(t log_t n)
/// - **Lookup**: O(log t · log_t n)
/// - **Deletion**: O(t log_t n)
#[derive(Debug, Clone)]
pub struct BTree<K> {
    /// Minimum degree `t`.
    pub(crate) min_degree: usize,
    /// The root node of the tree.
    pub(crate) root: NodeId,
    /// Arena holding every reachable node.
    pub(crate) arena: CompactArena<Node<K>>,
}

/// A B-tree node: sorted keys plus, when internal, one more child than keys.
#[derive(Debug, Clone)]
pub struct Node<K> {
    /// Strictly increasing keys.
    pub(crate) keys: Vec<K>,
    /// Child ids. Empty for a leaf.
    pub(crate) children: Vec<NodeId>,
}

// ============================================================================
// ENUMS AND RESULT TYPES
// ============================================================================

/// Outcome of a search descent, carrying the node where the descent ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchResult {
    /// The key lives in this node.
    Found(NodeId),
    /// The key is absent; the descent stopped at this leaf.
    NotFound(NodeId),
}

impl SearchResult {
    /// Returns true if the key was found.
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found(_))
    }

    /// The node where the descent terminated.
    pub fn node(&self) -> NodeId {
        match *self {
            SearchResult::Found(id) | SearchResult::NotFound(id) => id,
        }
    }
}

