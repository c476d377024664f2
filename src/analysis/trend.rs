/*!
 * Trend Analysis
 * Per-window growth statistics via least squares over the shared history
 *
 * Each configured window is computed independently from a filtered view of
 * the same history; there is no cross-window mutable state.
 */

use super::regression::linear_regression;
use crate::config::ChromeMemoryThresholds;
use crate::core::limits::{MIN_TREND_SAMPLES, SUSTAINED_GROWTH_R_SQUARED};
use crate::core::types::{MemorySample, MemoryTrend};
use crate::detector::SampleHistory;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// One trend per configured window, keyed by window name.
///
/// Windows with fewer than `MIN_TREND_SAMPLES` matching samples are absent
/// from the result, not present with zeroed values.
pub fn calculate_trends(
    history: &SampleHistory,
    now: Instant,
    windows: &BTreeMap<String, u64>,
) -> BTreeMap<String, MemoryTrend> {
    let mut trends = BTreeMap::new();

    for (name, &window_seconds) in windows {
        let window: Vec<&MemorySample> = match now.checked_sub(Duration::from_secs(window_seconds))
        {
            Some(cutoff) => history.iter().filter(|s| s.timestamp >= cutoff).collect(),
            // Window reaches past the process start: everything matches
            None => history.iter().collect(),
        };

        if window.len() < MIN_TREND_SAMPLES {
            continue;
        }

        trends.insert(name.clone(), trend_for_window(&window));
    }

    trends
}

fn trend_for_window(samples: &[&MemorySample]) -> MemoryTrend {
    if samples.len() < 2 {
        return MemoryTrend::default();
    }

    let start = samples[0].timestamp;
    let times: Vec<f64> = samples
        .iter()
        .map(|s| s.timestamp.duration_since(start).as_secs_f64())
        .collect();
    let values: Vec<f64> = samples.iter().map(|s| s.chrome_memory_mb).collect();

    let total_growth = values[values.len() - 1] - values[0];

    let elapsed_minutes = times[times.len() - 1] / 60.0;
    let growth_rate = if elapsed_minutes > 0.0 {
        total_growth / elapsed_minutes
    } else {
        0.0
    };

    // Divisor falls back to 1 MB when the window starts at zero memory
    let start_value = if values[0] > 0.0 { values[0] } else { 1.0 };
    let percentage_growth = total_growth / start_value * 100.0;

    let (slope, r_squared) = linear_regression(&times, &values);

    MemoryTrend {
        growth_rate,
        total_growth,
        percentage_growth,
        slope,
        r_squared,
    }
}

/// Evaluate trends against the chrome-memory thresholds.
///
/// Emits up to four labels per window, in window-iteration order.
pub fn evaluate_trends(
    trends: &BTreeMap<String, MemoryTrend>,
    thresholds: &ChromeMemoryThresholds,
) -> Vec<String> {
    let mut signals = Vec::new();

    for (window, trend) in trends {
        if trend.growth_rate > thresholds.growth_rate_threshold_mb_per_min {
            signals.push(format!("{window}_rapid_growth"));
        }
        if trend.total_growth > thresholds.total_growth_threshold_mb {
            signals.push(format!("{window}_excessive_growth"));
        }
        if trend.percentage_growth > thresholds.percentage_growth_threshold {
            signals.push(format!("{window}_percentage_growth"));
        }
        // High-confidence monotonic growth, independent of magnitude
        if trend.r_squared > SUSTAINED_GROWTH_R_SQUARED && trend.slope > 0.0 {
            signals.push(format!("{window}_sustained_growth"));
        }
    }

    signals
}
