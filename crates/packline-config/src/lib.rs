//! # packline-config
//!
//! Option schema and engine-configuration mapping for the packline compile
//! pipeline.
//!
//! This crate is the pure half of the pipeline: it validates a small set of
//! high-level [`CompileOptions`] and maps them onto a complete
//! [`BuildConfiguration`] for the bundling engine. The only environment
//! input is the [`DependencyLister`] capability used to auto-populate
//! externals for the node target.
//!
//! ```no_run
//! use packline_config::{CompileOptions, InstalledPackages, Target, build_configuration};
//!
//! # fn main() -> packline_config::Result<()> {
//! let options = CompileOptions::new(Target::Node).sourcemaps(true);
//! let configuration = build_configuration(&options, &InstalledPackages::new("node_modules"))?;
//! assert_eq!(configuration.output.filename, "[name].js");
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod configuration;
pub mod error;
pub mod externals;
pub mod options;
pub mod plugin;
pub mod rules;
pub mod target;
pub mod validation;

pub use builder::{BASELINE_EXTENSIONS, DEFAULT_FILENAME, build_configuration};
pub use configuration::{
    BuildConfiguration, Devtool, JsxDialect, LibraryTarget, ModuleOptions, OutputOptions,
    ResolveOptions, StatsOptions, TranspileOptions,
};
pub use error::{ConfigError, Result};
pub use externals::{DependencyLister, InstalledPackages, external_reference};
pub use options::{CompileOptions, DEFAULT_OUTPUT_STYLES};
pub use plugin::{
    ConfiguredPlugin, EnginePlugin, ExtractStylesPlugin, MinifyPlugin, PrefetchPlugin,
    SharedPlugin,
};
pub use rules::{Loader, ModuleRule, StyleEmit, StylePass, StyleRule, SuffixPattern};
pub use target::Target;
