/*!
 * Memory Space Allocator
 * First-fit allocation and release logic
 */

use super::super::types::{Block, MemoryPressure};
use super::MemorySpace;
use crate::core::types::{Address, Size};
use tracing::{debug, error, info, warn};

impl MemorySpace {
    /// Allocate `length` words from the first free block that can hold them
    ///
    /// Returns the base address of the new allocation, or `None` when no free
    /// block is long enough. Failure has no side effects and never triggers
    /// `defrag`. A zero `length` is accepted and yields a zero-length block.
    pub fn malloc(&mut self, length: Size) -> Option<Address> {
        let found = self
            .free
            .cells()
            .find(|(_, block)| block.length >= length)
            .map(|(id, block)| (id, block.length));

        let Some((id, available)) = found else {
            warn!(
                requested = length,
                free_blocks = self.free.len(),
                "Allocation failed: no free block is large enough"
            );
            return None;
        };

        let address = if available == length {
            // Exact fit: the free block itself becomes the allocation
            match self.free.remove_cell(id) {
                Ok(block) => {
                    let address = block.base_address;
                    self.allocated.insert_last(block);
                    address
                }
                Err(err) => {
                    error!(%err, requested = length, "Free list lost the selected block");
                    return None;
                }
            }
        } else {
            let selected = self.free.get_mut(id)?;
            let address = selected.base_address;
            selected.base_address += length;
            selected.length -= length;
            debug!(
                address,
                requested = length,
                remainder = selected.length,
                remainder_address = selected.base_address,
                "Split free block"
            );
            self.allocated.insert_last(Block::new(address, length));
            address
        };

        self.used += length;

        let pressure = self.pressure();
        if pressure >= MemoryPressure::High {
            warn!(
                address,
                length,
                %pressure,
                used = self.used,
                total = self.capacity,
                "Allocated block under memory pressure"
            );
        } else {
            info!(address, length, "Allocated block");
        }

        Some(address)
    }

    /// Release the first allocated block whose base address is `address`
    ///
    /// The block moves to the end of the free list unmerged. An address with
    /// no matching block leaves both lists untouched and returns false.
    pub fn free(&mut self, address: Address) -> bool {
        let found = self
            .allocated
            .cells()
            .find(|(_, block)| block.base_address == address)
            .map(|(id, _)| id);

        let Some(id) = found else {
            warn!(address, "Attempted to free an address that is not allocated");
            return false;
        };

        match self.allocated.remove_cell(id) {
            Ok(block) => {
                self.used -= block.length;
                info!(
                    address,
                    length = block.length,
                    free_blocks = self.free.len() + 1,
                    "Freed block"
                );
                self.free.insert_last(block);
                true
            }
            Err(err) => {
                error!(%err, address, "Allocated list lost the matched block");
                false
            }
        }
    }

    /// Check if a block starting at `address` is currently allocated
    pub fn is_allocated(&self, address: Address) -> bool {
        self.allocated
            .iter()
            .any(|block| block.base_address == address)
    }

    /// Length of the allocated block starting at `address`
    pub fn block_size(&self, address: Address) -> Option<Size> {
        self.allocated
            .iter()
            .find(|block| block.base_address == address)
            .map(|block| block.length)
    }
}
