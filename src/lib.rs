/*!
 * Leakwatch
 * Memory leak detection engine for long-running browser sessions
 *
 * Ingests periodic memory samples and reload-boundary events from a
 * Chrome/Chromium-like process, maintains a bounded history window, and
 * emits leak signals: multi-window regression trends, GC staleness,
 * cross-reload cumulative growth, and single-sample spikes.
 */

pub mod analysis;
pub mod config;
pub mod core;
pub mod detector;

// Re-exports
pub use config::{
    ChromeMemoryThresholds, DetectionThresholds, DetectorConfig, JsHeapThresholds,
    PerReloadThresholds,
};
pub use crate::core::errors::ConfigError;
pub use crate::core::types::{Baseline, MemoryMetrics, MemorySample, MemoryTrend, ReloadBoundary};
pub use detector::{MemoryLeakDetector, MemoryStatistics, SampleHistory};
