/*!
 * Memory Statistics
 * Point-in-time snapshot for the reporting collaborator
 */

use serde::Serialize;

/// Snapshot of detector state. Baseline-relative fields are present only
/// once the baseline has been established.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemoryStatistics {
    pub current_chrome_memory_mb: f64,
    pub current_js_heap_mb: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_chrome_memory_mb: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_js_heap_mb: Option<f64>,
    /// Samples currently held in the bounded history window
    pub total_samples: usize,
    /// Full boundary-log count, not the analyzed tail
    pub reload_boundaries_tracked: usize,
    /// Seconds between the last detected GC and the newest sample
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds_since_last_gc: Option<f64>,
    /// Ingest calls that produced at least one leak signal
    pub leak_alerts_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome_memory_growth_mb: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub js_heap_growth_mb: Option<f64>,
}
