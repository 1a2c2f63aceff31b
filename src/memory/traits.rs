/*!
 * Memory Traits
 * Pool abstractions
 */

use super::types::{Block, PoolResult, PoolStats};
use crate::core::types::{Address, Size};

/// Allocation interface
pub trait Allocator {
    /// Allocate a block large enough for `size` KB, returning its start address
    fn allocate(&mut self, size: Size) -> PoolResult<Address>;

    /// Free the first allocated block of exactly `size` KB, returning its start address
    fn deallocate(&mut self, size: Size) -> PoolResult<Address>;
}

/// Pool inspection interface
pub trait PoolInfo {
    /// Total pool capacity in KB
    fn capacity(&self) -> Size;

    /// Address-ordered snapshot of every block
    fn snapshot(&self) -> Vec<Block>;

    /// Overall pool statistics
    fn stats(&self) -> PoolStats;
}
