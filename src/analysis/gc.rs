/*!
 * Garbage Collection Detection
 * Heap-contraction heuristic and GC-staleness signals
 *
 * A drop of 10% or more between consecutive heap readings is treated as a
 * collection. This is a proxy, not an instrumented GC hook: legitimate
 * heap shrinkage from navigation or unload also registers. On a platform
 * with real GC instrumentation, prefer a dedicated event feed and keep
 * this heuristic as the fallback.
 */

use crate::core::limits::{GC_CONTRACTION_RATIO, NO_GC_OBSERVATION_SAMPLES};
use std::time::Instant;
use tracing::debug;

/// Tracks garbage-collection recency from consecutive heap readings.
#[derive(Debug, Default)]
pub struct GcTracker {
    last_gc: Option<Instant>,
}

impl GcTracker {
    pub fn new() -> Self {
        Self { last_gc: None }
    }

    /// Record a collection when the heap contracted by 10% or more.
    pub fn observe(
        &mut self,
        previous_heap_mb: f64,
        current_heap_mb: f64,
        at: Instant,
        log_detail: bool,
    ) {
        if current_heap_mb < previous_heap_mb * GC_CONTRACTION_RATIO {
            self.last_gc = Some(at);
            if log_detail {
                debug!(
                    previous_mb = previous_heap_mb,
                    current_mb = current_heap_mb,
                    "garbage collection detected"
                );
            }
        }
    }

    #[inline]
    pub fn last_gc(&self) -> Option<Instant> {
        self.last_gc
    }

    /// Staleness signals, evaluated against the newest sample's timestamp.
    ///
    /// "Observed but stale" and "never observed" are distinct signals; the
    /// latter only fires once enough history exists to make the absence
    /// meaningful.
    pub fn evaluate(
        &self,
        now: Instant,
        history_len: usize,
        no_gc_threshold_seconds: u64,
    ) -> Vec<String> {
        let mut signals = Vec::new();

        match self.last_gc {
            Some(last_gc) => {
                let since_gc = now.duration_since(last_gc).as_secs_f64();
                if since_gc > no_gc_threshold_seconds as f64 {
                    signals.push("no_garbage_collection".to_string());
                }
            }
            None => {
                if history_len > NO_GC_OBSERVATION_SAMPLES {
                    signals.push("no_garbage_collection_detected".to_string());
                }
            }
        }

        signals
    }

    pub fn reset(&mut self) {
        self.last_gc = None;
    }
}
