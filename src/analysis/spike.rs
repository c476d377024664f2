/*!
 * Spike Detection
 * Latest sample against the short-term recent average
 *
 * A single-sample jump well above the recent mean, distinct from the
 * sustained growth the trend analyzer looks for.
 */

use crate::core::limits::{SPIKE_RATIO, SPIKE_WINDOW_SAMPLES};
use crate::detector::SampleHistory;

/// Compare the latest chrome-memory value to the mean of the preceding
/// window. Requires a full spike window of history.
pub fn detect_spike(history: &SampleHistory) -> Vec<String> {
    let mut signals = Vec::new();

    if history.len() < SPIKE_WINDOW_SAMPLES {
        return signals;
    }

    let recent: Vec<f64> = history
        .tail(SPIKE_WINDOW_SAMPLES)
        .map(|s| s.chrome_memory_mb)
        .collect();
    let (current, preceding) = match recent.split_last() {
        Some(parts) => parts,
        None => return signals,
    };

    let recent_avg = preceding.iter().sum::<f64>() / preceding.len() as f64;

    if *current > recent_avg * SPIKE_RATIO {
        signals.push("memory_spike_detected".to_string());
    }

    signals
}
