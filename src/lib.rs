/*!
 * Buddy Pool Library
 * Fixed-size memory pool managed with the buddy-allocation algorithm
 */

pub mod core;
pub mod memory;

// Re-exports
pub use crate::core::types::{Address, Size};
pub use memory::{
    round_up_to_power_of_two, Allocator, Block, BuddyPool, PoolError, PoolInfo, PoolResult,
    PoolStats,
};
