/*!
 * Simulator Limits and Constants
 *
 * Centralized location for default sizes and pressure thresholds.
 */

use super::types::Size;

// =============================================================================
// MEMORY SPACE
// =============================================================================

/// Default managed space size (in words)
/// Used by `MemorySpace::new()` when no capacity is given
pub const DEFAULT_MEMORY_SPACE: Size = 100;

// =============================================================================
// MEMORY PRESSURE THRESHOLDS (fraction of managed space in use)
// =============================================================================

/// Medium pressure starts at 60% usage
pub const MEDIUM_PRESSURE_THRESHOLD: f64 = 0.60;

/// High pressure (warning) starts at 80% usage
pub const WARNING_PRESSURE_THRESHOLD: f64 = 0.80;

/// Critical pressure starts at 95% usage
pub const CRITICAL_PRESSURE_THRESHOLD: f64 = 0.95;

// =============================================================================
// TRACING
// =============================================================================

/// Environment variable selecting JSON trace output
pub const TRACE_JSON_ENV: &str = "MEMSPACE_TRACE_JSON";

/// Filter applied when `RUST_LOG` is unset
pub const DEFAULT_TRACE_FILTER: &str = "info";
