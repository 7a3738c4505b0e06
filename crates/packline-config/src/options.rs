//! Compile options accepted from the caller.

use crate::error::Result;
use crate::plugin::{EnginePlugin, SharedPlugin};
use crate::rules::ModuleRule;
use crate::target::Target;
use std::sync::Arc;

/// Default name of the extracted stylesheet artifact on the web target.
pub const DEFAULT_OUTPUT_STYLES: &str = "styles.css";

/// High-level options for one compile invocation.
///
/// `target` is the only required field. The three tri-state flags are
/// genuine three-valued options: `None` means "derive from `watch`" (or,
/// for `silent`, "keep the summary enabled"), while an explicit boolean is
/// used verbatim.
///
/// Options are read once per compile call and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    /// Platform the artifact executes on. Required.
    pub target: Option<Target>,
    /// Output filename pattern; `[name]` is replaced with the entry name.
    pub filename: Option<String>,
    /// Extra resolvable extensions, appended after the baseline list.
    pub extensions: Vec<String>,
    /// Repeated-rebuild mode. Also supplies the defaults for `sourcemaps`
    /// and `minify`.
    pub watch: bool,
    /// Module names to leave unbundled. Node target only.
    pub externals: Vec<String>,
    /// Statistics fields hidden from the printed summary.
    pub exclude_stats: Vec<String>,
    /// Tri-state: `None` defers to `watch`.
    pub sourcemaps: Option<bool>,
    /// Tri-state: `None` defers to the negation of `watch`.
    pub minify: Option<bool>,
    /// Tri-state: `Some(true)` suppresses the success summary entirely.
    pub silent: Option<bool>,
    /// Wrap the output as a universal module under this library name.
    pub library: Option<String>,
    /// Extra engine plugins.
    pub plugins: Vec<SharedPlugin>,
    /// Name of the extracted stylesheet artifact. Web target only.
    pub output_styles: Option<String>,
    /// Extra module-transform rules, appended after the baseline rules.
    pub loaders: Vec<ModuleRule>,
}

impl CompileOptions {
    pub fn new(target: Target) -> Self {
        Self {
            target: Some(target),
            ..Default::default()
        }
    }

    /// Set the output filename pattern.
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Add resolvable extensions after the baseline list.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions.extend(extensions.into_iter().map(Into::into));
        self
    }

    /// Enable or disable repeated-rebuild mode.
    pub fn watch(mut self, enabled: bool) -> Self {
        self.watch = enabled;
        self
    }

    /// Add module names that should not be bundled (node target only).
    pub fn external<I, S>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for module in modules {
            let value = module.into();
            if !self.externals.contains(&value) {
                self.externals.push(value);
            }
        }
        self
    }

    /// Hide statistics fields from the printed summary.
    pub fn exclude_stats<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_stats.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Force source-map generation on or off, overriding the
    /// `watch`-derived default.
    pub fn sourcemaps(mut self, enabled: bool) -> Self {
        self.sourcemaps = Some(enabled);
        self
    }

    /// Force the minification pass on or off, overriding the
    /// `watch`-derived default.
    pub fn minify(mut self, enabled: bool) -> Self {
        self.minify = Some(enabled);
        self
    }

    /// Suppress (or explicitly keep) the one-line success summary.
    pub fn silent(mut self, enabled: bool) -> Self {
        self.silent = Some(enabled);
        self
    }

    /// Wrap the output as a universal module under this name.
    pub fn library(mut self, name: impl Into<String>) -> Self {
        self.library = Some(name.into());
        self
    }

    /// Add an engine plugin.
    pub fn plugin<P>(mut self, plugin: P) -> Self
    where
        P: EnginePlugin + 'static,
    {
        self.plugins.push(Arc::new(plugin));
        self
    }

    /// Name the extracted stylesheet artifact (web target only).
    pub fn output_styles(mut self, filename: impl Into<String>) -> Self {
        self.output_styles = Some(filename.into());
        self
    }

    /// Add a module-transform rule after the baseline rules.
    pub fn loader(mut self, rule: ModuleRule) -> Self {
        self.loaders.push(rule);
        self
    }

    /// Check that every required option is present.
    ///
    /// Runs synchronously before any engine work; a failure here means no
    /// partial work was attempted.
    pub fn validate(&self) -> Result<()> {
        crate::validation::validate(self)
    }

    /// Effective source-map decision: explicit flag, else `watch`.
    pub fn effective_sourcemaps(&self) -> bool {
        self.sourcemaps.unwrap_or(self.watch)
    }

    /// Effective minify decision: explicit flag, else the negation of
    /// `watch`.
    pub fn effective_minify(&self) -> bool {
        self.minify.unwrap_or(!self.watch)
    }

    /// Whether the success summary is suppressed.
    pub fn suppress_summary(&self) -> bool {
        self.silent == Some(true)
    }
}
