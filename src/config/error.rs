//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading rule message configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration text was not valid JSON for the expected shape
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// A resource type name has no registered resources
    #[error("Unknown resource type '{type_name}'")]
    UnknownResourceType { type_name: String },
}
