/*!
 * Memory Module
 * Buddy pool engine: block bookkeeping, split/merge logic, best-fit search
 */

pub mod pool;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use pool::{round_up_to_power_of_two, BuddyPool};
pub use traits::*;
pub use types::*;
