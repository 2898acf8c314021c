//! INSERT operations for BTree.
//!
//! Insertion is a single downward pass. Any full node is split before the
//! descent enters it, so a leaf always has room for the new key and nothing
//! ever has to be split on the way back up. A full root is split first,
//! which is the only way the tree grows taller.

use tracing::{debug, trace};

use crate::types::{BTree, Node, NodeId};

impl<K: Ord> BTree<K> {
    // ============================================================================
    // PUBLIC INSERT OPERATIONS
    // ============================================================================

    /// Insert a key into the tree.
    ///
    /// Returns `true` if the key was added and `false` if it was already
    /// present, in which case the tree is left exactly as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let mut tree = BTree::new(2).unwrap();
    /// assert!(tree.insert(32));
    /// assert!(!tree.insert(32));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool {
        if self.contains(&key) {
            return false;
        }

        if self.arena[self.root].is_full(self.min_degree) {
            self.split_root();
        }

        self.insert_non_full(self.root, key);
        true
    }

    // ============================================================================
    // HELPERS FOR INSERT OPERATIONS
    // ============================================================================

    /// Install a new empty root above the full one and split the old root
    /// into its two children.
    fn split_root(&mut self) {
        let old_root = self.root;
        let new_root = self.allocate_node(Node::new_internal(Vec::new(), vec![old_root]));
        self.root = new_root;
        self.split_child(new_root, 0);

        debug!(
            root = new_root,
            height = self.height(),
            "split full root, tree grew by one level"
        );
    }

    /// Split the full child at `index` of `parent`, promoting its median
    /// into `parent` at `index` and linking the new right half at `index + 1`.
    ///
    /// `parent` must not be full itself.
    pub(crate) fn split_child(&mut self, parent: NodeId, index: usize) {
        let child = self.arena[parent].children[index];
        let (median, right) = self.arena[child].split(self.min_degree);
        let right_id = self.allocate_node(right);

        let parent_node = &mut self.arena[parent];
        parent_node.keys.insert(index, median);
        parent_node.children.insert(index + 1, right_id);

        trace!(parent, child, right = right_id, "split full child");
    }

    /// Descend from `node`, which is not full, splitting full children
    /// ahead of the descent, and insert `key` into the leaf it reaches.
    ///
    /// `key` must not already be in the tree.
    fn insert_non_full(&mut self, node: NodeId, key: K) {
        let mut current = node;

        loop {
            if self.arena[current].is_leaf() {
                let inserted = self.arena[current].insert_key(key);
                debug_assert!(inserted, "insert_non_full reached a duplicate key");
                return;
            }

            let mut index = self.arena[current].find_child_index(&key);
            let child = self.arena[current].children[index];

            if self.arena[child].is_full(self.min_degree) {
                self.split_child(current, index);
                // The promoted median now separates the two halves.
                if key > self.arena[current].keys[index] {
                    index += 1;
                }
            }

            current = self.arena[current].children[index];
        }
    }
}

impl<K: Ord> Extend<K> for BTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}
