/*!
 * Memory Module
 * Simulated memory space with first-fit allocation
 */

pub mod list;
pub mod space;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use list::{BlockList, CellId, Cells, Cursor};
pub use space::MemorySpace;
pub use traits::*;
pub use types::*;
