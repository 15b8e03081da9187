/*!
 * Memory Traits
 * Allocation abstractions over a simulated memory space
 */

use super::types::*;
use crate::core::types::{Address, Size};

/// Allocator interface
pub trait Allocator {
    /// Reserve `length` words; `None` when no free block is large enough
    fn malloc(&mut self, length: Size) -> Option<Address>;

    /// Release the block starting at `address`; false when nothing matched
    fn free(&mut self, address: Address) -> bool;

    /// Check if a block starting at `address` is currently allocated
    fn is_allocated(&self, address: Address) -> bool;

    /// Length of the allocated block starting at `address`
    fn block_size(&self, address: Address) -> Option<Size>;
}

/// Explicit coalescing of free space
pub trait Defragment {
    /// Merge contiguous free blocks, returning how many merges happened
    fn defrag(&mut self) -> usize;
}

/// Memory statistics provider
pub trait MemoryInfo {
    /// Get overall memory statistics
    fn stats(&self) -> MemoryStats;

    /// Get memory info as (total, used, available)
    fn info(&self) -> (Size, Size, Size);

    /// Get memory pressure level
    fn pressure(&self) -> MemoryPressure {
        self.stats().memory_pressure()
    }
}
