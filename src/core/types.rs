/*!
 * Core Value Types
 * Sample, boundary, baseline, and trend records shared by the analyzers
 */

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Raw metrics supplied by the sampling loop for one observation.
///
/// Missing fields deserialize to 0 rather than erroring; a zero-valued
/// sample participates in trend math as a legitimate data point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryMetrics {
    /// Resident memory of the browser process tree, in MB
    #[serde(default)]
    pub chrome_memory_mb: f64,
    /// Script heap of the monitored page, in MB (0 when unavailable)
    #[serde(default)]
    pub js_heap_mb: f64,
    /// System-wide memory usage, 0-100
    #[serde(default)]
    pub system_memory_percent: f64,
}

/// One stored observation. Immutable once appended to history.
#[derive(Debug, Clone, Copy)]
pub struct MemorySample {
    /// Monotonic capture instant
    pub timestamp: Instant,
    pub chrome_memory_mb: f64,
    pub js_heap_mb: f64,
    pub system_memory_percent: f64,
    /// Caller-supplied reload counter, monotonically non-decreasing
    pub reload_count: u64,
}

impl MemorySample {
    #[inline]
    pub fn new(metrics: &MemoryMetrics, reload_count: u64, timestamp: Instant) -> Self {
        Self {
            timestamp,
            chrome_memory_mb: metrics.chrome_memory_mb,
            js_heap_mb: metrics.js_heap_mb,
            system_memory_percent: metrics.system_memory_percent,
            reload_count,
        }
    }
}

/// Snapshot taken when the reload counter advances between consecutive
/// samples. The backing log is append-only and never trimmed.
#[derive(Debug, Clone, Copy)]
pub struct ReloadBoundary {
    pub timestamp: Instant,
    pub reload_count: u64,
    pub chrome_memory_mb: f64,
    pub js_heap_mb: f64,
}

/// Reference memory level from the initial stable period.
/// Set once per session; immutable until reset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Baseline {
    pub chrome_memory_mb: f64,
    pub js_heap_mb: f64,
}

/// Growth statistics for one trend window. Ephemeral, recomputed per ingest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MemoryTrend {
    /// MB per minute, last minus first over elapsed minutes
    pub growth_rate: f64,
    /// MB, last minus first in window (signed)
    pub total_growth: f64,
    /// Percent relative to the window-start value. The divisor falls back
    /// to 1 MB when the start value is 0, so near-zero starting memory can
    /// yield very large percentages.
    pub percentage_growth: f64,
    /// Least-squares slope of chrome memory over elapsed seconds
    pub slope: f64,
    /// Coefficient of determination; 0 when the window is flat
    pub r_squared: f64,
}
