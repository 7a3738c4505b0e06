//! Engine plugin handles.
//!
//! Plugins are opaque to this layer: the configuration carries them and the
//! engine interprets them. The builder itself only ever constructs the
//! three built-in values below; anything else arrives from the caller as a
//! shared handle.

use std::borrow::Cow;
use std::fmt::Debug;
use std::sync::Arc;

/// Handle to an engine plugin.
pub trait EnginePlugin: Debug + Send + Sync {
    /// Identifies the plugin for inspection and logging.
    fn name(&self) -> Cow<'static, str>;
}

/// Shared, caller-supplied plugin handle.
pub type SharedPlugin = Arc<dyn EnginePlugin>;

/// Plugin entry recorded in a built configuration.
///
/// Built-in entries stay inspectable; caller-supplied handles pass through
/// untouched.
#[derive(Debug, Clone)]
pub enum ConfiguredPlugin {
    Prefetch(PrefetchPlugin),
    ExtractStyles(ExtractStylesPlugin),
    Minify(MinifyPlugin),
    Custom(SharedPlugin),
}

impl ConfiguredPlugin {
    pub fn name(&self) -> Cow<'static, str> {
        match self {
            ConfiguredPlugin::Prefetch(plugin) => plugin.name(),
            ConfiguredPlugin::ExtractStyles(plugin) => plugin.name(),
            ConfiguredPlugin::Minify(plugin) => plugin.name(),
            ConfiguredPlugin::Custom(plugin) => plugin.name(),
        }
    }
}

/// Emits a prefetch hint for the given module request.
#[derive(Debug, Clone)]
pub struct PrefetchPlugin {
    pub request: String,
}

impl PrefetchPlugin {
    pub fn new(request: impl Into<String>) -> Self {
        Self {
            request: request.into(),
        }
    }
}

impl EnginePlugin for PrefetchPlugin {
    fn name(&self) -> Cow<'static, str> {
        "prefetch".into()
    }
}

/// Aggregates style rules from all chunks into one named stylesheet
/// artifact.
#[derive(Debug, Clone)]
pub struct ExtractStylesPlugin {
    pub filename: String,
    pub all_chunks: bool,
}

impl ExtractStylesPlugin {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            all_chunks: true,
        }
    }
}

impl EnginePlugin for ExtractStylesPlugin {
    fn name(&self) -> Cow<'static, str> {
        "extract-styles".into()
    }
}

/// Runs the engine's minification pass over emitted chunks.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinifyPlugin;

impl EnginePlugin for MinifyPlugin {
    fn name(&self) -> Cow<'static, str> {
        "minify".into()
    }
}
