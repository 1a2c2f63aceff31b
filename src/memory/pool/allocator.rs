/*!
 * Allocation and Deallocation
 * Best-fit search with recursive block splitting
 */

use super::{round_up_to_power_of_two, BuddyPool};
use crate::core::types::{Address, Size};
use crate::memory::types::{Block, PoolError, PoolResult};
use log::{info, warn};

impl BuddyPool {
    /// Allocate a block large enough for `size` KB
    ///
    /// The request is rounded up to the next power of two, the smallest
    /// adequate free block is selected (lowest address on ties), and that
    /// block is halved until it matches the rounded size. On failure the
    /// block list is left untouched.
    pub fn allocate(&mut self, size: Size) -> PoolResult<Address> {
        self.check_size(size)?;
        let target = round_up_to_power_of_two(size);

        // The list stays address-sorted, so replacing the candidate only on a
        // strictly smaller size lands on the lowest start among equal fits.
        let mut best: Option<usize> = None;
        for (idx, block) in self.blocks.iter().enumerate() {
            if block.free && block.size >= target {
                match best {
                    Some(b) if self.blocks[b].size <= block.size => {}
                    _ => best = Some(idx),
                }
            }
        }

        let Some(idx) = best else {
            warn!(
                "Allocation of {} KB failed: no free block of {} KB or larger",
                size, target
            );
            return Err(PoolError::InsufficientMemory {
                requested: size,
                rounded: target,
            });
        };

        // Halve the candidate until it matches the target. The lower half
        // keeps its start and stays the candidate; each upper half becomes a
        // new free block inserted right after it, preserving address order.
        while self.blocks[idx].size > target {
            let half = self.blocks[idx].size / 2;
            self.blocks[idx].size = half;
            let upper = Block::new(self.blocks[idx].start + half, half, true);
            self.blocks.insert(idx + 1, upper);
        }

        self.blocks[idx].free = false;
        let start = self.blocks[idx].start;
        info!(
            "Allocated {} KB ({} KB requested) at offset {}",
            target, size, start
        );
        Ok(start)
    }

    /// Free the first allocated block of exactly `size` KB, in address order
    ///
    /// Lookup is by size alone, not by address: when several allocated blocks
    /// share a size, the lowest-addressed one is freed. The size must match
    /// the block's rounded size exactly; the request is not rounded here.
    pub fn deallocate(&mut self, size: Size) -> PoolResult<Address> {
        self.check_size(size)?;

        let Some(block) = self.blocks.iter_mut().find(|b| !b.free && b.size == size) else {
            warn!(
                "Deallocation of {} KB failed: no allocated block of that size",
                size
            );
            return Err(PoolError::BlockNotFound { size });
        };

        block.free = true;
        let start = block.start;
        info!("Deallocated {} KB at offset {}", size, start);

        self.coalesce();
        Ok(start)
    }

    fn check_size(&self, size: Size) -> PoolResult<()> {
        if size == 0 || size > self.capacity {
            return Err(PoolError::InvalidSize {
                requested: size,
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}
