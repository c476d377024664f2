/*!
 * Memory Leak Detector
 * Stateful engine: sample ingestion, baseline, and leak-signal emission
 *
 * Strategy: a bounded history ring feeding independent per-ingest
 * analyzers (trend regression, GC staleness, per-reload growth, spikes),
 * with their labels concatenated into one ordered signal list.
 *
 * State is exclusively owned and not internally synchronized: one engine
 * per monitored session, fed by a single sampling loop. Callers running
 * sampling elsewhere serialize access externally.
 */

mod history;
mod stats;

pub use history::SampleHistory;
pub use stats::MemoryStatistics;

use crate::analysis::{
    calculate_trends, detect_spike, evaluate_reload_growth, evaluate_trends, GcTracker,
};
use crate::config::DetectorConfig;
use crate::core::errors::ConfigError;
use crate::core::limits::{BASELINE_SAMPLE_COUNT, MIN_ANALYSIS_SAMPLES};
use crate::core::types::{Baseline, MemoryMetrics, MemorySample, MemoryTrend, ReloadBoundary};
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{info, warn};

/// Memory leak detection engine.
///
/// Ingests one sample per call and returns the leak signals that fired.
/// Never errors after construction: malformed input degrades to zeros and
/// divide-by-zero cases degrade to neutral values, so the monitor keeps
/// monitoring.
pub struct MemoryLeakDetector {
    config: DetectorConfig,
    history: SampleHistory,
    /// Append-only and never trimmed. Analysis reads only the most recent
    /// few; the statistics surface reports the full count.
    reload_boundaries: Vec<ReloadBoundary>,
    baseline: Option<Baseline>,
    gc: GcTracker,
    /// Ingest calls that produced at least one signal
    leak_alerts: u64,
}

impl MemoryLeakDetector {
    /// Construction validates the config; this is the engine's only
    /// fallible operation.
    pub fn new(config: DetectorConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        info!(
            sampling_window_minutes = config.sampling_window_minutes,
            sensitivity = %config.alert_sensitivity,
            "memory leak detector initialized"
        );

        Ok(Self {
            history: SampleHistory::with_capacity(config.max_history_samples()),
            reload_boundaries: Vec::new(),
            baseline: None,
            gc: GcTracker::new(),
            leak_alerts: 0,
            config,
        })
    }

    /// Ingest one observation stamped with the current time.
    pub fn ingest(&mut self, metrics: &MemoryMetrics, reload_count: u64) -> Vec<String> {
        self.ingest_at(metrics, reload_count, Instant::now())
    }

    /// Ingest one observation with an explicit capture instant.
    ///
    /// The explicit timestamp keeps analysis deterministic for callers
    /// that buffer samples or replay recorded sessions; `ingest` is this
    /// with `Instant::now()`.
    pub fn ingest_at(
        &mut self,
        metrics: &MemoryMetrics,
        reload_count: u64,
        timestamp: Instant,
    ) -> Vec<String> {
        let sample = MemorySample::new(metrics, reload_count, timestamp);

        if let Some(previous) = self.history.latest() {
            // Boundary when the caller's counter strictly advanced
            if reload_count > previous.reload_count {
                self.reload_boundaries.push(ReloadBoundary {
                    timestamp,
                    reload_count,
                    chrome_memory_mb: sample.chrome_memory_mb,
                    js_heap_mb: sample.js_heap_mb,
                });
            }

            self.gc.observe(
                previous.js_heap_mb,
                sample.js_heap_mb,
                timestamp,
                self.config.log_detailed_analysis,
            );
        }

        self.history.push(sample);

        if self.baseline.is_none() && self.history.len() >= BASELINE_SAMPLE_COUNT {
            self.establish_baseline();
        }

        // Gate the full analysis on a settled baseline and a minute of
        // history; anything less is noise
        if self.baseline.is_none() || self.history.len() < MIN_ANALYSIS_SAMPLES {
            return Vec::new();
        }

        let signals = self.analyze_leak_patterns(timestamp);
        if !signals.is_empty() {
            self.leak_alerts += 1;
            if self.config.log_detailed_analysis {
                warn!(signals = ?signals, "memory leak signals detected");
            }
        }

        signals
    }

    /// Mean of the most recent baseline window. Idempotent: a no-op once
    /// set or while history is still short.
    fn establish_baseline(&mut self) {
        if self.baseline.is_some() || self.history.len() < BASELINE_SAMPLE_COUNT {
            return;
        }

        let recent: Vec<&MemorySample> = self.history.tail(BASELINE_SAMPLE_COUNT).collect();
        let n = recent.len() as f64;
        let baseline = Baseline {
            chrome_memory_mb: recent.iter().map(|s| s.chrome_memory_mb).sum::<f64>() / n,
            js_heap_mb: recent.iter().map(|s| s.js_heap_mb).sum::<f64>() / n,
        };

        info!(
            chrome_mb = baseline.chrome_memory_mb,
            js_heap_mb = baseline.js_heap_mb,
            "memory baseline established"
        );

        self.baseline = Some(baseline);
    }

    /// Run all analyzers and concatenate their labels: trend signals in
    /// window-iteration order, then GC, per-reload, and spike signals.
    fn analyze_leak_patterns(&self, now: Instant) -> Vec<String> {
        let mut signals = Vec::new();

        let trends = self.trends_at(now);
        signals.extend(evaluate_trends(
            &trends,
            &self.config.detection_thresholds.chrome_process_memory,
        ));

        signals.extend(self.gc.evaluate(
            now,
            self.history.len(),
            self.config
                .detection_thresholds
                .js_heap_memory
                .no_gc_duration_threshold_seconds,
        ));

        signals.extend(evaluate_reload_growth(
            &self.reload_boundaries,
            self.config
                .detection_thresholds
                .per_reload_analysis
                .cumulative_leak_per_reload_mb,
        ));

        signals.extend(detect_spike(&self.history));

        signals
    }

    /// Current per-window trends keyed by window name. Windows with too
    /// few samples are absent. Empty until the first sample.
    pub fn trends(&self) -> BTreeMap<String, MemoryTrend> {
        match self.history.latest() {
            Some(sample) => self.trends_at(sample.timestamp),
            None => BTreeMap::new(),
        }
    }

    fn trends_at(&self, now: Instant) -> BTreeMap<String, MemoryTrend> {
        calculate_trends(&self.history, now, &self.config.trend_analysis)
    }

    #[inline]
    pub fn baseline(&self) -> Option<Baseline> {
        self.baseline
    }

    #[inline]
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Snapshot for the reporting collaborator. None until the first
    /// sample arrives.
    pub fn statistics(&self) -> Option<MemoryStatistics> {
        let latest = self.history.latest()?;

        let seconds_since_last_gc = self
            .gc
            .last_gc()
            .map(|at| latest.timestamp.duration_since(at).as_secs_f64());

        Some(MemoryStatistics {
            current_chrome_memory_mb: latest.chrome_memory_mb,
            current_js_heap_mb: latest.js_heap_mb,
            baseline_chrome_memory_mb: self.baseline.map(|b| b.chrome_memory_mb),
            baseline_js_heap_mb: self.baseline.map(|b| b.js_heap_mb),
            total_samples: self.history.len(),
            reload_boundaries_tracked: self.reload_boundaries.len(),
            seconds_since_last_gc,
            leak_alerts_count: self.leak_alerts,
            chrome_memory_growth_mb: self
                .baseline
                .map(|b| latest.chrome_memory_mb - b.chrome_memory_mb),
            js_heap_growth_mb: self.baseline.map(|b| latest.js_heap_mb - b.js_heap_mb),
        })
    }

    /// Clear all session state; configuration is retained.
    pub fn reset(&mut self) {
        self.history.clear();
        self.reload_boundaries.clear();
        self.baseline = None;
        self.gc.reset();
        self.leak_alerts = 0;

        info!("memory leak detector reset");
    }
}
