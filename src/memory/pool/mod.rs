/*!
 * Buddy Pool
 *
 * Fixed-capacity memory pool managed with buddy allocation:
 * - **Power-of-two sizing**: requests are rounded up before the search
 * - **Best-fit search**: smallest adequate free block, lowest address on ties
 * - **Block splitting**: the winning block is halved until it matches the target
 * - **Coalescing**: freed buddy pairs are merged back into their parent block
 *
 * The pool exclusively owns its block list; every observable state partitions
 * `[0, capacity)` with contiguous, power-of-two-sized blocks.
 */

mod allocator;
mod coalesce;

use super::traits::{Allocator, PoolInfo};
use super::types::{Block, PoolError, PoolResult, PoolStats};
use crate::core::limits::DEFAULT_POOL_SIZE;
use crate::core::types::{Address, Size};
use log::info;

/// Smallest power of two greater than or equal to `requested`
///
/// Callers must guarantee `requested >= 1`; the pool's public operations
/// reject zero before reaching this.
pub fn round_up_to_power_of_two(requested: Size) -> Size {
    requested.next_power_of_two()
}

/// Fixed-size buddy-allocation pool
pub struct BuddyPool {
    // Kept sorted by start address at every observable point
    blocks: Vec<Block>,
    capacity: Size,
}

impl BuddyPool {
    /// Create a pool with the default capacity
    pub fn new() -> Self {
        // DEFAULT_POOL_SIZE is a power of two, so this cannot fail
        Self {
            blocks: vec![Block::new(0, DEFAULT_POOL_SIZE, true)],
            capacity: DEFAULT_POOL_SIZE,
        }
    }

    /// Create a pool with a custom capacity (useful for testing)
    ///
    /// The capacity must be a nonzero power of two so that every split
    /// produces power-of-two halves down to a single KB.
    pub fn with_capacity(capacity: Size) -> PoolResult<Self> {
        if capacity == 0 || !capacity.is_power_of_two() {
            return Err(PoolError::InvalidCapacity { capacity });
        }

        info!("Buddy pool initialized with {} KB", capacity);
        Ok(Self {
            blocks: vec![Block::new(0, capacity, true)],
            capacity,
        })
    }

    /// Total pool capacity in KB
    pub fn capacity(&self) -> Size {
        self.capacity
    }

    /// Address-ordered read-only view of every block; the caller owns formatting
    pub fn report(&self) -> &[Block] {
        &self.blocks
    }

    /// Owned copy of the current block list
    pub fn snapshot(&self) -> Vec<Block> {
        self.blocks.clone()
    }

    /// Overall pool statistics
    pub fn stats(&self) -> PoolStats {
        let used = self
            .blocks
            .iter()
            .filter(|b| !b.free)
            .map(|b| b.size)
            .sum::<Size>();
        let largest_free_block = self
            .blocks
            .iter()
            .filter(|b| b.free)
            .map(|b| b.size)
            .max()
            .unwrap_or(0);

        PoolStats {
            capacity: self.capacity,
            used,
            available: self.capacity - used,
            block_count: self.blocks.len(),
            largest_free_block,
        }
    }
}

impl Default for BuddyPool {
    fn default() -> Self {
        Self::new()
    }
}

// Implement trait interfaces
impl Allocator for BuddyPool {
    fn allocate(&mut self, size: Size) -> PoolResult<Address> {
        BuddyPool::allocate(self, size)
    }

    fn deallocate(&mut self, size: Size) -> PoolResult<Address> {
        BuddyPool::deallocate(self, size)
    }
}

impl PoolInfo for BuddyPool {
    fn capacity(&self) -> Size {
        BuddyPool::capacity(self)
    }

    fn snapshot(&self) -> Vec<Block> {
        BuddyPool::snapshot(self)
    }

    fn stats(&self) -> PoolStats {
        BuddyPool::stats(self)
    }
}
