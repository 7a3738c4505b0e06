//! # packline-compile
//!
//! Engine-driving compile runner and stream adapter for packline.
//!
//! This crate turns a set of high-level compile options into a single
//! composable pipe stage: incoming entry-point files are named, the
//! external bundling engine is invoked with a freshly built configuration,
//! and the produced artifacts flow downstream unchanged. Engine failures
//! surface as stream errors, never as panics.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use futures::stream::{self, StreamExt};
//! use packline_compile::{CompileOptions, Engine, InputFile, InstalledPackages, Target};
//!
//! # async fn example(engine: Arc<dyn Engine>) -> packline_compile::Result<()> {
//! let options = CompileOptions::new(Target::Node).sourcemaps(true);
//! let stage = packline_compile::compile(&options, engine, &InstalledPackages::new("node_modules"))?;
//!
//! let input = stream::iter([InputFile::new("src/index.ts", b"export {};".to_vec())]);
//! let mut artifacts = Box::pin(stage.run(input));
//! while let Some(artifact) = artifacts.next().await {
//!     let artifact = artifact?;
//!     std::fs::write(format!("dist/{}", artifact.filename), &artifact.contents)?;
//! }
//! # Ok(())
//! # }
//! ```

// Re-export the configuration layer so one import path covers the pipeline.
pub use packline_config::*;

pub mod artifact;
pub mod engine;
pub mod runner;
pub mod stats;

pub use artifact::{Artifact, InputFile};
pub use engine::{Engine, EngineError, EngineReport, EngineResult, EntrySpec};
pub use runner::{CompileStage, LOG_PREFIX, compile};
pub use stats::CompileStats;

// Logging utilities (optional, enabled with the "logging" feature)
#[cfg(feature = "logging")]
pub mod logging;

#[cfg(feature = "logging")]
pub use logging::{LogLevel, init_logging};

/// Error types for compile-pipeline operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Options failed validation or the configuration could not be built.
    #[error(transparent)]
    Config(#[from] packline_config::ConfigError),

    /// The engine reported a failed compile cycle.
    #[error("compile failed: {0}")]
    Compile(String),

    /// I/O failure while feeding or draining the pipeline.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for compile-pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Translates an engine failure, falling back to a generic message
    /// when the engine gave none.
    pub(crate) fn from_engine(error: engine::EngineError) -> Self {
        Error::Compile(error.message.unwrap_or_else(|| "engine error".to_string()))
    }
}
