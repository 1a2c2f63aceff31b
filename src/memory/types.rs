/*!
 * Memory Types
 * Common types for the buddy pool
 */

use crate::core::types::{Address, Size};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pool operation result
pub type PoolResult<T> = Result<T, PoolError>;

/// Pool errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    #[error("Invalid size: requested {requested} KB, pool capacity is {capacity} KB")]
    InvalidSize { requested: Size, capacity: Size },

    #[error("Insufficient memory: requested {requested} KB, no free block of {rounded} KB or larger")]
    InsufficientMemory { requested: Size, rounded: Size },

    #[error("Block not found: no allocated block of {size} KB")]
    BlockNotFound { size: Size },

    #[error("Invalid capacity: {capacity} KB is not a nonzero power of two")]
    InvalidCapacity { capacity: Size },
}

/// Memory block metadata
///
/// A block has no identity beyond this triple; splitting shrinks the lower
/// half in place and merging grows the lower block in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub start: Address,
    pub size: Size,
    pub free: bool,
}

impl Block {
    pub fn new(start: Address, size: Size, free: bool) -> Self {
        Self { start, size, free }
    }

    /// One past the last address covered by this block
    pub fn end(&self) -> Address {
        self.start + self.size
    }

    /// True if this block is the lower half of its buddy pair
    pub fn is_lower_buddy(&self) -> bool {
        self.start % (self.size * 2) == 0
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Address: {}, Size: {} KB, Free: {}",
            self.start, self.size, self.free
        )
    }
}

/// Pool statistics, computed on demand from the block list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolStats {
    pub capacity: Size,
    pub used: Size,
    pub available: Size,
    pub block_count: usize,
    pub largest_free_block: Size,
}
