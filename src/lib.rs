/*!
 * Memory Space Simulator Library
 *
 * First-fit allocator over an abstract address range. Blocks are
 * `(base address, length)` pairs with no backing storage.
 */

pub mod core;
pub mod memory;
pub mod monitoring;

// Re-exports
pub use crate::core::types::{Address, Size};
pub use memory::{
    Allocator, Block, BlockList, CellId, Defragment, MemoryError, MemoryInfo, MemoryPressure,
    MemoryResult, MemorySpace, MemoryStats, Snapshot,
};
pub use monitoring::init_tracing;
