//! The bundling-engine interface boundary.
//!
//! The engine is an external collaborator: module resolution, dependency
//! graph walking, code generation, minification and source-map math all
//! happen behind this trait. This layer only hands over a configuration
//! and adapts the completion cycles it gets back.

use std::sync::Arc;

use futures::stream::BoxStream;

use packline_config::BuildConfiguration;

use crate::artifact::{Artifact, InputFile};
use crate::stats::CompileStats;

/// Named entry point handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySpec {
    pub name: String,
    pub import: String,
}

impl EntrySpec {
    /// Names an incoming file so the engine can treat it as an entry.
    pub fn from_input(file: &InputFile) -> Self {
        Self {
            name: file.entry_name(),
            import: file.path.to_string_lossy().into_owned(),
        }
    }
}

/// Failure reported by the engine for one compile cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineError {
    /// Engine-supplied description, if any.
    pub message: Option<String>,
}

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

/// Successful completion of one compile cycle.
#[derive(Debug, Clone, Default)]
pub struct EngineReport {
    pub stats: CompileStats,
    pub artifacts: Vec<Artifact>,
}

pub type EngineResult = std::result::Result<EngineReport, EngineError>;

/// The external bundling engine.
///
/// `compile` yields one item per completion cycle: exactly one for a plain
/// build, one per rebuild when the configuration has `watch` set. Failures
/// arrive as `Err` items; an engine must never unwind across this
/// boundary.
pub trait Engine: Send + Sync {
    fn compile(
        &self,
        configuration: Arc<BuildConfiguration>,
        entries: Vec<EntrySpec>,
    ) -> BoxStream<'static, EngineResult>;
}
