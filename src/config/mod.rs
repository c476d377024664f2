/*!
 * Detector Configuration
 * Threshold tree, defaults, fail-fast validation, and JSON file loading
 */

use crate::core::errors::ConfigError;
use crate::core::limits::SAMPLES_PER_MINUTE;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;
use tracing::warn;

/// Growth thresholds for Chrome process memory trend evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeMemoryThresholds {
    pub growth_rate_threshold_mb_per_min: f64,
    pub total_growth_threshold_mb: f64,
    pub percentage_growth_threshold: f64,
}

impl Default for ChromeMemoryThresholds {
    fn default() -> Self {
        Self {
            growth_rate_threshold_mb_per_min: 10.0,
            total_growth_threshold_mb: 500.0,
            percentage_growth_threshold: 200.0,
        }
    }
}

/// Script-heap thresholds. Only the no-GC duration is consulted by the
/// analyzers; the growth-rate and fragmentation fields are accepted and
/// retained config surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsHeapThresholds {
    pub growth_rate_threshold_mb_per_min: f64,
    pub no_gc_duration_threshold_seconds: u64,
    pub heap_fragmentation_threshold: f64,
}

impl Default for JsHeapThresholds {
    fn default() -> Self {
        Self {
            growth_rate_threshold_mb_per_min: 5.0,
            no_gc_duration_threshold_seconds: 300,
            heap_fragmentation_threshold: 0.7,
        }
    }
}

/// Cross-reload thresholds. The not-freed field is retained config surface;
/// the cumulative per-reload threshold drives the analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerReloadThresholds {
    pub memory_not_freed_threshold_mb: f64,
    pub cumulative_leak_per_reload_mb: f64,
}

impl Default for PerReloadThresholds {
    fn default() -> Self {
        Self {
            memory_not_freed_threshold_mb: 50.0,
            cumulative_leak_per_reload_mb: 10.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionThresholds {
    pub chrome_process_memory: ChromeMemoryThresholds,
    pub js_heap_memory: JsHeapThresholds,
    pub per_reload_analysis: PerReloadThresholds,
}

/// Full detector configuration, supplied once at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// History capacity in minutes of samples at the assumed 1 Hz cadence
    pub sampling_window_minutes: u64,
    pub detection_thresholds: DetectionThresholds,
    /// Named look-back windows in seconds. Open-ended; ordered so signal
    /// emission order is deterministic across ingest calls.
    pub trend_analysis: BTreeMap<String, u64>,
    /// Informational label carried through to logs
    pub alert_sensitivity: String,
    /// Gates detail-level log lines (GC events, per-call signal dumps)
    pub log_detailed_analysis: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        let mut trend_analysis = BTreeMap::new();
        trend_analysis.insert("short_term".to_string(), 300);
        trend_analysis.insert("medium_term".to_string(), 1800);
        trend_analysis.insert("long_term".to_string(), 3600);

        Self {
            sampling_window_minutes: 60,
            detection_thresholds: DetectionThresholds::default(),
            trend_analysis,
            alert_sensitivity: "medium".to_string(),
            log_detailed_analysis: true,
        }
    }
}

impl DetectorConfig {
    /// Load configuration from a JSON file.
    ///
    /// A missing file falls back to the defaults; malformed JSON or an
    /// invalid field is an error.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "config file not found, using defaults");
                let config = Self::default();
                config.validate()?;
                return Ok(config);
            }
            Err(err) => return Err(ConfigError::ReadFailed(err.to_string())),
        };

        let config: Self =
            serde_json::from_str(&raw).map_err(|err| ConfigError::ParseFailed(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Fail-fast structural validation, run once at detector construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sampling_window_minutes == 0 {
            return Err(ConfigError::InvalidValue(
                "sampling_window_minutes must be positive".to_string(),
            ));
        }

        if self.trend_analysis.is_empty() {
            return Err(ConfigError::MissingField(
                "trend_analysis requires at least one named window".to_string(),
            ));
        }
        for (name, seconds) in &self.trend_analysis {
            if *seconds == 0 {
                return Err(ConfigError::InvalidValue(format!(
                    "trend window '{name}' must be positive"
                )));
            }
        }

        let chrome = &self.detection_thresholds.chrome_process_memory;
        let heap = &self.detection_thresholds.js_heap_memory;
        let reload = &self.detection_thresholds.per_reload_analysis;
        let bounded = [
            (
                "chrome_process_memory.growth_rate_threshold_mb_per_min",
                chrome.growth_rate_threshold_mb_per_min,
            ),
            (
                "chrome_process_memory.total_growth_threshold_mb",
                chrome.total_growth_threshold_mb,
            ),
            (
                "chrome_process_memory.percentage_growth_threshold",
                chrome.percentage_growth_threshold,
            ),
            (
                "js_heap_memory.growth_rate_threshold_mb_per_min",
                heap.growth_rate_threshold_mb_per_min,
            ),
            (
                "js_heap_memory.heap_fragmentation_threshold",
                heap.heap_fragmentation_threshold,
            ),
            (
                "per_reload_analysis.memory_not_freed_threshold_mb",
                reload.memory_not_freed_threshold_mb,
            ),
            (
                "per_reload_analysis.cumulative_leak_per_reload_mb",
                reload.cumulative_leak_per_reload_mb,
            ),
        ];
        for (field, value) in bounded {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue(format!(
                    "{field} must be a non-negative number"
                )));
            }
        }

        Ok(())
    }

    /// History capacity in samples at the assumed 1 Hz cadence.
    #[inline]
    pub fn max_history_samples(&self) -> usize {
        (self.sampling_window_minutes * SAMPLES_PER_MINUTE) as usize
    }
}
