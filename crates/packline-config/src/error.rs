//! Error types for option validation and configuration building.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors produced while validating compile options or building an engine
/// configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required option was absent or empty.
    ///
    /// Raised synchronously, before any engine work is attempted.
    #[error("missing configuration: `{0}` is required")]
    MissingConfiguration(&'static str),

    /// The installed-dependency directory could not be enumerated.
    #[error("failed to enumerate installed dependencies: {0}")]
    DependencyScan(#[from] std::io::Error),
}
