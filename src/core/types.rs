/*!
 * Core Types
 * Common types used across the simulator
 */

/// Address type for simulated memory ranges
pub type Address = usize;

/// Size type for simulated memory ranges
pub type Size = usize;
