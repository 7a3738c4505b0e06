//! The engine configuration value produced by the builder.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::plugin::ConfiguredPlugin;
use crate::rules::{ModuleRule, StylePass};
use crate::target::Target;

/// Complete configuration for one engine invocation.
///
/// Exactly one value exists per compile invocation: it is constructed
/// fresh, handed to the engine, and discarded when the run completes.
/// Plugin lists and externals maps are never shared between invocations.
#[derive(Debug, Clone)]
pub struct BuildConfiguration {
    pub target: Target,
    pub output: OutputOptions,
    pub devtool: Option<Devtool>,
    pub resolve: ResolveOptions,
    pub module: ModuleOptions,
    /// Modules resolved through the platform's own loader at runtime.
    /// Populated for the node target only.
    pub externals: Option<FxHashMap<String, String>>,
    pub plugins: Vec<ConfiguredPlugin>,
    /// Preprocessing macro stages applied to stylesheet sources.
    pub style_passes: Vec<StylePass>,
    pub transpile: TranspileOptions,
    pub stats: StatsOptions,
    pub watch: bool,
}

/// Output artifact descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputOptions {
    /// Filename pattern; `[name]` is replaced with the entry name.
    pub filename: String,
    pub library: Option<String>,
    pub library_target: Option<LibraryTarget>,
    pub devtool_module_filename_template: Option<String>,
}

impl OutputOptions {
    /// Applies the filename pattern to a named entry.
    pub fn render_filename(&self, entry_name: &str) -> String {
        self.filename.replace("[name]", entry_name)
    }
}

/// Wrapping applied to library output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LibraryTarget {
    /// Loadable under CommonJS, AMD, or as a browser global.
    Umd,
}

/// Source-map production mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Devtool {
    /// Emit a full external source map per artifact.
    SourceMap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolveOptions {
    /// Ordered resolvable extensions; earlier entries win ties.
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleOptions {
    pub rules: Vec<ModuleRule>,
}

/// Settings for the type-aware transpile step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranspileOptions {
    /// Suppress the transpiler's own diagnostic printing.
    pub silent: bool,
    pub jsx: JsxDialect,
    pub source_map: bool,
}

/// Syntax dialect the transpiler lowers component markup to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JsxDialect {
    React,
}

/// Controls for the printed statistics summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsOptions {
    /// Top-level fields hidden from the summary.
    pub exclude: Vec<String>,
}
