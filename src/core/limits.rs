/*!
 * Pool Limits and Constants
 */

use crate::core::types::Size;

/// Default pool capacity (1024 KB)
/// Used when a pool is created without an explicit capacity
pub const DEFAULT_POOL_SIZE: Size = 1024;
