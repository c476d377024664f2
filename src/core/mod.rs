/*!
 * Core Types, Limits, and Errors
 */

pub mod errors;
pub mod limits;
pub mod types;

pub use errors::ConfigError;
pub use types::{Baseline, MemoryMetrics, MemorySample, MemoryTrend, ReloadBoundary};
