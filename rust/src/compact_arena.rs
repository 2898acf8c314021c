//! Compact arena implementation using Vec<T> instead of Vec<Option<T>>
//! Freed slots go on a free list and are reused by the next allocation.

use std::convert::TryFrom;
use std::ops::{Index, IndexMut};

pub type NodeId = u32;
pub const NULL_NODE: NodeId = u32::MAX;

/// Statistics for a compact arena
#[derive(Debug, Clone, Copy)]
pub struct CompactArenaStats {
    pub total_capacity: usize,
    pub allocated_count: usize,
    pub free_count: usize,
    pub utilization: f64,
    pub fragmentation: f64,
}

/// Compact arena allocator addressed by `NodeId`
#[derive(Debug, Clone)]
pub struct CompactArena<T> {
    /// Direct storage without Option wrapper
    storage: Vec<T>,
    /// Free slot indices for reuse
    free_list: Vec<usize>,
    /// Track which slots are actually allocated
    allocated_mask: Vec<bool>,
}

impl<T> CompactArena<T> {
    /// Create a new empty compact arena
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
            free_list: Vec::new(),
            allocated_mask: Vec::new(),
        }
    }

    /// Allocate a new item in the arena and return its ID
    ///
    /// # Panics
    /// Panics if the arena outgrows the `NodeId` range.
    #[inline]
    pub fn allocate(&mut self, item: T) -> NodeId {
        let index = if let Some(free_index) = self.free_list.pop() {
            self.storage[free_index] = item;
            self.allocated_mask[free_index] = true;
            free_index
        } else {
            let index = self.storage.len();
            self.storage.push(item);
            self.allocated_mask.push(true);
            index
        };

        match NodeId::try_from(index) {
            Ok(id) if id != NULL_NODE => id,
            _ => panic!("arena exhausted the NodeId range at slot {index}"),
        }
    }

    #[inline]
    fn slot(&self, id: NodeId) -> Option<usize> {
        if id == NULL_NODE {
            return None;
        }
        let index = usize::try_from(id).ok()?;
        if self.allocated_mask.get(index).copied().unwrap_or(false) {
            Some(index)
        } else {
            None
        }
    }

    /// Get a reference to an item in the arena
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.slot(id).map(|index| &self.storage[index])
    }

    /// Check if an ID is valid and allocated
    pub fn contains(&self, id: NodeId) -> bool {
        self.slot(id).is_some()
    }

    /// Get arena statistics
    pub fn stats(&self) -> CompactArenaStats {
        let total_capacity = self.storage.capacity();
        let allocated_count = self.len();
        let free_count = self.free_list.len();
        let utilization = if total_capacity > 0 {
            allocated_count as f64 / total_capacity as f64
        } else {
            0.0
        };
        let fragmentation = if allocated_count > 0 {
            free_count as f64 / (allocated_count + free_count) as f64
        } else {
            0.0
        };

        CompactArenaStats {
            total_capacity,
            allocated_count,
            free_count,
            utilization,
            fragmentation,
        }
    }

    /// Get the number of allocated items
    pub fn len(&self) -> usize {
        self.allocated_mask
            .iter()
            .filter(|&&allocated| allocated)
            .count()
    }

    /// Check if the arena is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all items from the arena
    pub fn clear(&mut self) {
        self.storage.clear();
        self.allocated_mask.clear();
        self.free_list.clear();
    }

    /// Get the number of free slots
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }
}

impl<T: Default> CompactArena<T> {
    /// Deallocate an item, leaving a default value in its slot, and return it
    #[inline]
    pub fn deallocate(&mut self, id: NodeId) -> Option<T> {
        let index = self.slot(id)?;
        self.allocated_mask[index] = false;
        self.free_list.push(index);
        Some(std::mem::take(&mut self.storage[index]))
    }
}

impl<T> Default for CompactArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Ids handed out by the arena are trusted: indexing a freed or foreign id
/// panics the same way an out-of-bounds slice index does.
impl<T> Index<NodeId> for CompactArena<T> {
    type Output = T;

    #[inline]
    fn index(&self, id: NodeId) -> &T {
        match self.slot(id) {
            Some(index) => &self.storage[index],
            None => panic!("node {id} is not allocated in the arena"),
        }
    }
}

impl<T> IndexMut<NodeId> for CompactArena<T> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        match self.slot(id) {
            Some(index) => &mut self.storage[index],
            None => panic!("node {id} is not allocated in the arena"),
        }
    }
}

// ============================================================================
// BTREE ARENA ALLOCATION HELPERS
// ============================================================================

use crate::types::{BTree, Node};

impl<K> BTree<K> {
    /// Allocate a node in the arena and return its ID.
    #[inline]
    pub(crate) fn allocate_node(&mut self, node: Node<K>) -> NodeId {
        self.arena.allocate(node)
    }

    /// Remove a node from the arena, handing back its contents.
    #[inline]
    pub(crate) fn take_node(&mut self, id: NodeId) -> Node<K> {
        let node = std::mem::take(&mut self.arena[id]);
        self.arena.deallocate(id);
        node
    }

    /// Get a node by id, if it is allocated.
    #[inline]
    pub fn get_node(&self, id: NodeId) -> Option<&Node<K>> {
        self.arena.get(id)
    }

    /// Get statistics for the node arena.
    pub fn arena_stats(&self) -> CompactArenaStats {
        self.arena.stats()
    }

    /// Get the number of nodes currently allocated in the arena.
    pub fn allocated_node_count(&self) -> usize {
        self.arena.len()
    }

    /// Get the number of freed slots waiting for reuse.
    pub fn free_node_count(&self) -> usize {
        self.arena.free_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_arena_basic_operations() {
        let mut arena = CompactArena::new();

        let id1 = arena.allocate(42);
        let id2 = arena.allocate(84);
        let id3 = arena.allocate(126);

        assert_eq!(arena.get(id1), Some(&42));
        assert_eq!(arena.get(id2), Some(&84));
        assert_eq!(arena[id3], 126);

        assert!(arena.contains(id1));
        assert!(arena.contains(id2));
        assert!(arena.contains(id3));
        assert!(!arena.contains(NULL_NODE));

        let stats = arena.stats();
        assert_eq!(stats.allocated_count, 3);
        assert_eq!(stats.free_count, 0);
    }

    #[test]
    fn test_deallocate_reuses_slot() {
        let mut arena: CompactArena<i32> = CompactArena::new();

        let id1 = arena.allocate(42);
        let id2 = arena.allocate(84);

        assert_eq!(arena.deallocate(id1), Some(42));
        assert!(!arena.contains(id1));
        assert!(arena.contains(id2));
        assert_eq!(arena.deallocate(id1), None);

        let id3 = arena.allocate(168);
        assert_eq!(id3, id1);
        assert_eq!(arena.get(id3), Some(&168));

        let stats = arena.stats();
        assert_eq!(stats.allocated_count, 2);
        assert_eq!(stats.free_count, 0);
        assert_eq!(stats.fragmentation, 0.0);
    }

    #[test]
    fn test_stats_report_fragmentation_and_utilization() {
        let mut arena: CompactArena<i32> = CompactArena::new();
        assert_eq!(arena.stats().utilization, 0.0);

        let ids: Vec<NodeId> = (0..4).map(|i| arena.allocate(i)).collect();
        arena.deallocate(ids[1]);

        let stats = arena.stats();
        assert_eq!(stats.allocated_count, 3);
        assert_eq!(stats.free_count, 1);
        assert_eq!(stats.fragmentation, 0.25);
        assert!(stats.utilization > 0.0 && stats.utilization <= 1.0);
    }

    #[test]
    fn test_index_mut_updates_in_place() {
        let mut arena = CompactArena::new();
        let id = arena.allocate(vec![1, 2]);
        arena[id].push(3);
        assert_eq!(arena[id], vec![1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "not allocated")]
    fn test_index_of_freed_slot_panics() {
        let mut arena: CompactArena<i32> = CompactArena::new();
        let id = arena.allocate(7);
        arena.deallocate(id);
        let _value = arena[id];
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut arena = CompactArena::new();
        let id = arena.allocate(1);
        arena.allocate(2);
        arena.deallocate(id);
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.free_count(), 0);
    }
}
