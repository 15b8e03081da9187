/*!
 * Memory Space Statistics
 * Usage accounting over the free and allocated lists
 */

use super::super::types::{MemoryPressure, MemoryStats};
use super::MemorySpace;
use crate::core::types::Size;

impl MemorySpace {
    pub fn stats(&self) -> MemoryStats {
        let (total, used, available) = self.info();
        let usage_percentage = if total == 0 {
            0.0
        } else {
            (used as f64 / total as f64) * 100.0
        };

        MemoryStats {
            total_memory: total,
            used_memory: used,
            available_memory: available,
            usage_percentage,
            free_blocks: self.free.len(),
            allocated_blocks: self.allocated.len(),
            largest_free_block: self.largest_free_block(),
        }
    }

    /// (total, used, available)
    pub fn info(&self) -> (Size, Size, Size) {
        (
            self.capacity,
            self.used,
            self.free.total_length(),
        )
    }

    pub fn pressure(&self) -> MemoryPressure {
        if self.capacity == 0 {
            return MemoryPressure::Low;
        }
        MemoryPressure::from_ratio(self.used as f64 / self.capacity as f64)
    }

    /// Longest single request `malloc` can currently satisfy
    pub fn largest_free_block(&self) -> Size {
        self.free.iter().map(|block| block.length).max().unwrap_or(0)
    }
}
