/*!
 * Leak Pattern Analysis
 * Trend, GC, per-reload, and spike analyzers over the shared history
 */

mod gc;
mod regression;
mod reload;
mod spike;
mod trend;

pub use gc::GcTracker;
pub use regression::linear_regression;
pub use reload::evaluate_reload_growth;
pub use spike::detect_spike;
pub use trend::{calculate_trends, evaluate_trends};
