/*!
 * Per-Reload Analysis
 * Cross-reload cumulative growth detection
 *
 * A healthy page returns to a similar footprint after each reload; a
 * persistently positive boundary-to-boundary delta is memory the reload
 * did not release.
 */

use crate::core::limits::RELOAD_ANALYSIS_DEPTH;
use crate::core::types::ReloadBoundary;

/// Mean consecutive chrome-memory delta across the most recent boundaries.
///
/// Requires at least two boundaries; reads only the last
/// `RELOAD_ANALYSIS_DEPTH` of the unbounded log.
pub fn evaluate_reload_growth(
    boundaries: &[ReloadBoundary],
    leak_per_reload_mb: f64,
) -> Vec<String> {
    let mut signals = Vec::new();

    if boundaries.len() < 2 {
        return signals;
    }

    let start = boundaries.len().saturating_sub(RELOAD_ANALYSIS_DEPTH);
    let recent = &boundaries[start..];

    let deltas: Vec<f64> = recent
        .windows(2)
        .map(|pair| pair[1].chrome_memory_mb - pair[0].chrome_memory_mb)
        .collect();
    let avg_growth = deltas.iter().sum::<f64>() / deltas.len() as f64;

    if avg_growth > leak_per_reload_mb {
        signals.push("cumulative_reload_leak".to_string());
    }

    signals
}
