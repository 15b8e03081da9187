/*!
 * Defragmentation
 * Coalescing of contiguous free blocks
 */

use super::super::types::MemoryResult;
use super::MemorySpace;
use tracing::{debug, error, info, instrument};

impl MemorySpace {
    /// Merge free blocks that are contiguous in address space
    ///
    /// The free list is scanned in list order and never sorted. For each
    /// position, later blocks starting exactly where the accumulated block
    /// ends are absorbed into it and removed. Adjacent blocks that only become
    /// reachable through an earlier merge may need another call. The
    /// allocated list is never touched.
    ///
    /// Returns the number of merges performed.
    #[instrument(level = "debug", skip(self), fields(free_blocks = self.free.len()))]
    pub fn defrag(&mut self) -> usize {
        let before = self.free.len();
        let mut merges = 0;
        let mut i = 0;

        while i < self.free.len() {
            match self.absorb_successors(i) {
                Ok(absorbed) => merges += absorbed,
                Err(err) => {
                    error!(%err, index = i, "Defragmentation stopped early");
                    break;
                }
            }
            i += 1;
        }

        if merges > 0 {
            info!(
                merges,
                before,
                after = self.free.len(),
                "Coalesced adjacent free blocks"
            );
        }
        merges
    }

    /// Grow the block at `index` by every later block that continues it
    fn absorb_successors(&mut self, index: usize) -> MemoryResult<usize> {
        let block = self.free.block_at(index)?;
        let base_address = block.base_address;
        let mut length = block.length;
        let mut absorbed = 0;

        loop {
            let mut merged = false;
            let mut j = index + 1;
            while j < self.free.len() {
                let candidate = self.free.block_at(j)?;
                if base_address.checked_add(length) == Some(candidate.base_address) {
                    let removed = self.free.remove_at(j)?;
                    debug!(
                        base_address,
                        absorbed_address = removed.base_address,
                        absorbed_length = removed.length,
                        "Merged free block"
                    );
                    length += removed.length;
                    absorbed += 1;
                    merged = true;
                    // Removal shifted the next candidate into position j
                } else {
                    j += 1;
                }
            }
            if !merged {
                break;
            }
        }

        self.free.block_at_mut(index)?.length = length;
        Ok(absorbed)
    }
}
