/*!
 * Error Types
 * Construction-time configuration errors with thiserror and miette support
 *
 * The engine fails fast at construction and never again: per-ingest
 * anomalies are leak-signal strings, not typed error conditions.
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ConfigError {
    #[error("Missing required configuration field: {0}")]
    #[diagnostic(
        code(config::missing_field),
        help("Compare the memory_leak_detection section against the documented defaults.")
    )]
    MissingField(String),

    #[error("Invalid configuration value: {0}")]
    #[diagnostic(
        code(config::invalid_value),
        help("Thresholds must be non-negative and windows must be positive.")
    )]
    InvalidValue(String),

    #[error("Failed to parse configuration: {0}")]
    #[diagnostic(
        code(config::parse_failed),
        help("The configuration file must be valid JSON.")
    )]
    ParseFailed(String),

    #[error("Failed to read configuration file: {0}")]
    #[diagnostic(
        code(config::read_failed),
        help("Check that the path exists and is readable.")
    )]
    ReadFailed(String),
}
