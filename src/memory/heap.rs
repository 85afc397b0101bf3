//! Node heap
//!
//! This module provides heap memory management for chain nodes with:
//! - Explicit allocation/deallocation (malloc/free)
//! - A bound on simultaneously live blocks, so allocation can fail
//! - Tombstone tracking for freed blocks
//! - Use-after-free, double-free and invalid-free detection
//!
//! Allocation is all-or-nothing: when the bound is reached, `allocate`
//! returns [`DrillError::AllocationFailure`] without touching any state.

use super::value::Address;
use crate::chain::Node;
use crate::constants::{DEFAULT_MAX_NODES, HEAP_ADDRESS_START, NODE_SIZE};
use crate::errors::DrillError;
use rustc_hash::FxHashMap;

/// State of a heap block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockState {
    Allocated,
    Tombstone, // Freed but kept so stale addresses are detected
}

/// A block of heap memory holding one node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapBlock {
    pub node: Node,
    pub state: BlockState,
}

/// The heap
#[derive(Debug, Clone)]
pub struct Heap {
    allocations: FxHashMap<Address, HeapBlock>,
    next_address: Address,
    live_blocks: usize,
    max_blocks: usize,
}

impl Heap {
    /// Create a new heap holding at most `max_blocks` live nodes
    pub fn new(max_blocks: usize) -> Self {
        Heap {
            allocations: FxHashMap::default(),
            next_address: HEAP_ADDRESS_START,
            live_blocks: 0,
            max_blocks,
        }
    }

    /// Allocate a block and store `node` in it
    pub fn allocate(&mut self, node: Node) -> Result<Address, DrillError> {
        if self.live_blocks >= self.max_blocks {
            tracing::trace!(
                live = self.live_blocks,
                limit = self.max_blocks,
                "node allocation refused"
            );
            return Err(DrillError::AllocationFailure {
                live: self.live_blocks,
                limit: self.max_blocks,
            });
        }

        let addr = self.next_address;
        self.next_address += NODE_SIZE as u64;
        self.allocations.insert(
            addr,
            HeapBlock {
                node,
                state: BlockState::Allocated,
            },
        );
        self.live_blocks += 1;
        tracing::trace!(address = addr, "node allocated");

        Ok(addr)
    }

    /// Free a block (mark as tombstone)
    pub fn free(&mut self, addr: Address) -> Result<(), DrillError> {
        match self.allocations.get_mut(&addr) {
            Some(block) if block.state == BlockState::Allocated => {
                block.state = BlockState::Tombstone;
                self.live_blocks -= 1;
                tracing::trace!(address = addr, "node freed");
                Ok(())
            }
            Some(_) => Err(DrillError::DoubleFree { address: addr }),
            None => Err(DrillError::InvalidFree { address: addr }),
        }
    }

    /// Get the node stored at `addr` (error if tombstone or never allocated)
    pub fn get(&self, addr: Address) -> Result<&Node, DrillError> {
        match self.allocations.get(&addr) {
            Some(block) if block.state == BlockState::Allocated => Ok(&block.node),
            Some(_) => Err(DrillError::UseAfterFree { address: addr }),
            None => Err(DrillError::InvalidPointer { address: addr }),
        }
    }

    /// Drop every tombstone, returning how many were removed.
    ///
    /// Addresses of dropped blocks become invalid rather than freed, so
    /// only call this once no stale address can be dereferenced.
    pub fn reclaim(&mut self) -> usize {
        let before = self.allocations.len();
        self.allocations
            .retain(|_, block| block.state == BlockState::Allocated);
        let reclaimed = before - self.allocations.len();
        tracing::trace!(reclaimed, "tombstones reclaimed");
        reclaimed
    }

    /// All blocks sorted by address, tombstones included (for display)
    pub fn blocks(&self) -> Vec<(Address, &HeapBlock)> {
        let mut blocks: Vec<_> = self
            .allocations
            .iter()
            .map(|(addr, block)| (*addr, block))
            .collect();
        blocks.sort_by_key(|(addr, _)| *addr);
        blocks
    }

    /// Number of blocks held, tombstones included
    pub fn block_count(&self) -> usize {
        self.allocations.len()
    }

    /// Number of live (allocated, not freed) blocks
    pub fn live_blocks(&self) -> usize {
        self.live_blocks
    }

    /// Bytes held by live blocks
    pub fn total_allocated(&self) -> usize {
        self.live_blocks * NODE_SIZE
    }

    /// Maximum number of live blocks
    pub fn max_blocks(&self) -> usize {
        self.max_blocks
    }
}

impl Default for Heap {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_NODES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(value: i32) -> Node {
        Node { value, next: None }
    }

    #[test]
    fn test_allocate_assigns_distinct_addresses() {
        let mut heap = Heap::new(4);
        let a = heap.allocate(node(1)).unwrap();
        let b = heap.allocate(node(2)).unwrap();
        assert_eq!(a, HEAP_ADDRESS_START);
        assert_eq!(b, a + NODE_SIZE as u64);
        assert_eq!(heap.get(b).unwrap().value, 2);
        assert_eq!(heap.live_blocks(), 2);
        assert_eq!(heap.total_allocated(), 2 * NODE_SIZE);
    }

    #[test]
    fn test_allocation_failure_leaves_heap_untouched() {
        let mut heap = Heap::new(1);
        heap.allocate(node(1)).unwrap();
        let err = heap.allocate(node(2)).unwrap_err();
        assert_eq!(err, DrillError::AllocationFailure { live: 1, limit: 1 });
        assert_eq!(heap.live_blocks(), 1);
        assert_eq!(heap.blocks().len(), 1);
    }

    #[test]
    fn test_free_makes_room_again() {
        let mut heap = Heap::new(1);
        let a = heap.allocate(node(1)).unwrap();
        heap.free(a).unwrap();
        assert!(heap.allocate(node(2)).is_ok());
    }

    #[test]
    fn test_use_after_free() {
        let mut heap = Heap::new(2);
        let a = heap.allocate(node(7)).unwrap();
        heap.free(a).unwrap();
        assert_eq!(heap.get(a), Err(DrillError::UseAfterFree { address: a }));
        assert_eq!(heap.blocks()[0].1.state, BlockState::Tombstone);
    }

    #[test]
    fn test_double_and_invalid_free() {
        let mut heap = Heap::new(2);
        let a = heap.allocate(node(7)).unwrap();
        heap.free(a).unwrap();
        assert_eq!(heap.free(a), Err(DrillError::DoubleFree { address: a }));
        assert_eq!(
            heap.free(0xdead),
            Err(DrillError::InvalidFree { address: 0xdead })
        );
        assert_eq!(
            heap.get(0xdead),
            Err(DrillError::InvalidPointer { address: 0xdead })
        );
    }

    #[test]
    fn test_reclaim_drops_only_tombstones() {
        let mut heap = Heap::new(4);
        let a = heap.allocate(node(1)).unwrap();
        let b = heap.allocate(node(2)).unwrap();
        heap.free(a).unwrap();
        assert_eq!(heap.block_count(), 2);

        assert_eq!(heap.reclaim(), 1);
        assert_eq!(heap.block_count(), 1);
        assert_eq!(heap.get(b).unwrap().value, 2);
        assert_eq!(heap.get(a), Err(DrillError::InvalidPointer { address: a }));
        assert_eq!(heap.reclaim(), 0);
    }
}
