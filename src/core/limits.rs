/*!
 * Engine Limits and Constants
 *
 * Centralized location for the detector's fixed thresholds and window
 * sizes. Configurable thresholds live in `config`; these are the values
 * the detection heuristics hard-code.
 */

/// Samples averaged to establish the memory baseline
pub const BASELINE_SAMPLE_COUNT: usize = 10;

/// Minimum history before leak-pattern analysis runs
/// One minute at the assumed 1 Hz cadence; shorter histories are too
/// noisy and produce false positives
pub const MIN_ANALYSIS_SAMPLES: usize = 60;

/// Minimum samples for a trend window to be evaluated
/// Windows below this are skipped, not reported as zero
pub const MIN_TREND_SAMPLES: usize = 5;

/// Heap contraction ratio treated as a garbage-collection event
/// current < previous * ratio, i.e. a drop of 10% or more
pub const GC_CONTRACTION_RATIO: f64 = 0.9;

/// History length after which a never-observed GC becomes a signal
/// Five minutes at the assumed 1 Hz cadence
pub const NO_GC_OBSERVATION_SAMPLES: usize = 300;

/// Boundaries consulted by per-reload analysis
/// The boundary log itself is unbounded; only this tail is analyzed
pub const RELOAD_ANALYSIS_DEPTH: usize = 5;

/// Samples in the spike comparison window (latest vs mean of the rest)
pub const SPIKE_WINDOW_SAMPLES: usize = 10;

/// Latest-over-average ratio treated as a spike (50% above recent mean)
pub const SPIKE_RATIO: f64 = 1.5;

/// r-squared above which any positive slope counts as sustained growth,
/// independent of the magnitude thresholds
pub const SUSTAINED_GROWTH_R_SQUARED: f64 = 0.8;

/// Assumed sampling cadence, used to size history from a window in minutes
pub const SAMPLES_PER_MINUTE: u64 = 60;
