/*!
 * Core Types
 * Common types used across the pool engine
 */

/// Address type: offset in KB from the pool origin
pub type Address = usize;

/// Size type for pool operations, in KB
pub type Size = usize;
