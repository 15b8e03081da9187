/*!
 * Memory Space
 *
 * Simulated allocator over a fixed range of addresses `0..capacity`.
 *
 * ## State
 *
 * Two ordered block lists:
 * - **free**: unallocated ranges, seeded with one block covering the space
 * - **allocated**: ranges handed out by `malloc`
 *
 * A block lives in exactly one of the lists. `malloc` and `free` move blocks
 * between them by value.
 *
 * ## Policy
 *
 * - **First-fit**: `malloc` takes the first free block (in list order) that
 *   is long enough, splitting it when it is strictly longer
 * - **No merging on free**: released blocks are appended to the free list
 * - **Explicit coalescing**: `defrag` merges contiguous free blocks and is
 *   never triggered by a failed `malloc`
 */

mod allocator;
mod defrag;
mod stats;

use super::list::BlockList;
use super::traits::{Allocator, Defragment, MemoryInfo};
use super::types::{Block, MemoryPressure, MemoryStats, Snapshot};
use crate::core::limits::DEFAULT_MEMORY_SPACE;
use crate::core::types::{Address, Size};
use std::fmt;
use tracing::info;

/// Simulated memory space with a free list and an allocated list
#[derive(Debug, Clone)]
pub struct MemorySpace {
    capacity: Size,
    // Sum of allocated lengths, kept in step with `allocated`
    used: Size,
    free: BlockList,
    allocated: BlockList,
}

impl MemorySpace {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MEMORY_SPACE)
    }

    /// Create a memory space managing addresses `0..max_size`
    pub fn with_capacity(max_size: Size) -> Self {
        let mut free = BlockList::new();
        free.insert_last(Block::new(0, max_size));
        info!(max_size, "Memory space initialized with a single free block");
        Self {
            capacity: max_size,
            used: 0,
            free,
            allocated: BlockList::new(),
        }
    }

    pub fn capacity(&self) -> Size {
        self.capacity
    }

    pub fn free_list(&self) -> &BlockList {
        &self.free
    }

    pub fn allocated_list(&self) -> &BlockList {
        &self.allocated
    }

    /// Owned copy of both lists
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            free: self.free.blocks(),
            allocated: self.allocated.blocks(),
        }
    }
}

impl fmt::Display for MemorySpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.free, self.allocated)
    }
}

// Implement trait interfaces
impl Allocator for MemorySpace {
    fn malloc(&mut self, length: Size) -> Option<Address> {
        MemorySpace::malloc(self, length)
    }

    fn free(&mut self, address: Address) -> bool {
        MemorySpace::free(self, address)
    }

    fn is_allocated(&self, address: Address) -> bool {
        MemorySpace::is_allocated(self, address)
    }

    fn block_size(&self, address: Address) -> Option<Size> {
        MemorySpace::block_size(self, address)
    }
}

impl Defragment for MemorySpace {
    fn defrag(&mut self) -> usize {
        MemorySpace::defrag(self)
    }
}

impl MemoryInfo for MemorySpace {
    fn stats(&self) -> MemoryStats {
        MemorySpace::stats(self)
    }

    fn info(&self) -> (Size, Size, Size) {
        MemorySpace::info(self)
    }

    fn pressure(&self) -> MemoryPressure {
        MemorySpace::pressure(self)
    }
}

impl Default for MemorySpace {
    fn default() -> Self {
        Self::new()
    }
}
