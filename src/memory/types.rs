/*!
 * Memory Types
 * Common types for the simulated memory space
 */

use super::list::CellId;
use crate::core::limits::{
    CRITICAL_PRESSURE_THRESHOLD, MEDIUM_PRESSURE_THRESHOLD, WARNING_PRESSURE_THRESHOLD,
};
use crate::core::types::{Address, Size};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    #[error("Index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Block {0} not found in list")]
    NotFound(Block),

    #[error("Cell {0:?} is not a live cell of this list")]
    InvalidCell(CellId),
}

/// A contiguous range of simulated memory
///
/// Blocks are plain values: they carry no backing storage and are moved,
/// never shared, between the free and allocated lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    pub base_address: Address,
    pub length: Size,
}

impl Block {
    pub fn new(base_address: Address, length: Size) -> Self {
        Self {
            base_address,
            length,
        }
    }

    /// First address past the end of this block
    ///
    /// `None` when the range runs past `Address::MAX`.
    pub fn end(&self) -> Option<Address> {
        self.base_address.checked_add(self.length)
    }

    /// True when `other` starts exactly where this block ends
    pub fn precedes(&self, other: &Block) -> bool {
        self.end() == Some(other.base_address)
    }

    /// True when the two address ranges share at least one address
    ///
    /// A zero-length block holds no address and overlaps nothing.
    pub fn overlaps(&self, other: &Block) -> bool {
        if self.length == 0 || other.length == 0 {
            return false;
        }
        // Widened so ranges ending at Address::MAX + 1 compare correctly
        let self_end = self.base_address as u128 + self.length as u128;
        let other_end = other.base_address as u128 + other.length as u128;
        (self.base_address as u128) < other_end && (other.base_address as u128) < self_end
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.base_address, self.length)
    }
}

/// Memory statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryStats {
    pub total_memory: Size,
    pub used_memory: Size,
    pub available_memory: Size,
    pub usage_percentage: f64,
    pub free_blocks: usize,
    pub allocated_blocks: usize,
    pub largest_free_block: Size,
}

impl MemoryStats {
    pub fn memory_pressure(&self) -> MemoryPressure {
        MemoryPressure::from_ratio(self.usage_percentage / 100.0)
    }

    /// Free blocks beyond the first; zero means the free space is one range
    pub fn fragmentation(&self) -> usize {
        self.free_blocks.saturating_sub(1)
    }
}

/// Memory pressure levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MemoryPressure {
    Low,
    Medium,
    High,
    Critical,
}

impl MemoryPressure {
    pub fn from_ratio(usage_ratio: f64) -> Self {
        if usage_ratio >= CRITICAL_PRESSURE_THRESHOLD {
            MemoryPressure::Critical
        } else if usage_ratio >= WARNING_PRESSURE_THRESHOLD {
            MemoryPressure::High
        } else if usage_ratio >= MEDIUM_PRESSURE_THRESHOLD {
            MemoryPressure::Medium
        } else {
            MemoryPressure::Low
        }
    }
}

impl fmt::Display for MemoryPressure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MemoryPressure::Low => write!(f, "LOW"),
            MemoryPressure::Medium => write!(f, "MEDIUM"),
            MemoryPressure::High => write!(f, "HIGH"),
            MemoryPressure::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Owned copy of both lists, in list order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub free: Vec<Block>,
    pub allocated: Vec<Block>,
}
