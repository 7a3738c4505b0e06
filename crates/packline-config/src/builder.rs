//! Maps validated compile options onto a full engine configuration.

use crate::configuration::{
    BuildConfiguration, Devtool, JsxDialect, LibraryTarget, ModuleOptions, OutputOptions,
    ResolveOptions, StatsOptions, TranspileOptions,
};
use crate::error::{ConfigError, Result};
use crate::externals::{self, DependencyLister};
use crate::options::{CompileOptions, DEFAULT_OUTPUT_STYLES};
use crate::plugin::{ConfiguredPlugin, ExtractStylesPlugin, MinifyPlugin, PrefetchPlugin};
use crate::rules::{Loader, ModuleRule, StylePass, StyleRule, SuffixPattern};
use crate::target::Target;

/// Resolvable-extension baseline. The empty entry keeps exact-path
/// requests resolvable; caller additions come after and lose ties.
pub const BASELINE_EXTENSIONS: &[&str] =
    &["", ".pack.js", ".web.js", ".ts", ".tsx", ".js", ".json"];

/// Default output filename pattern.
pub const DEFAULT_FILENAME: &str = "[name].js";

/// Devtool path template used when source maps are enabled.
pub const DEVTOOL_MODULE_TEMPLATE: &str = "../[resource-path]";

/// Module request given a prefetch hint on the web target.
const PREFETCH_REQUEST: &str = "react";

/// Builds the configuration for one engine invocation.
///
/// Pure over its explicit inputs plus the injected dependency lister (the
/// one environment-dependent step, consulted for the node target only).
/// Fails with [`ConfigError::MissingConfiguration`] when `target` is
/// absent; no engine work happens before that check.
pub fn build_configuration(
    options: &CompileOptions,
    deps: &dyn DependencyLister,
) -> Result<BuildConfiguration> {
    let target = options
        .target
        .ok_or(ConfigError::MissingConfiguration("target"))?;

    let mut extensions: Vec<String> =
        BASELINE_EXTENSIONS.iter().map(|s| s.to_string()).collect();
    extensions.extend(options.extensions.iter().cloned());

    let mut rules = vec![
        ModuleRule::new(SuffixPattern::new([".ts", ".tsx"]), Loader::TypeScript),
        ModuleRule::new(SuffixPattern::new([".json"]), Loader::Json),
    ];
    rules.extend(options.loaders.iter().cloned());

    let mut plugins: Vec<ConfiguredPlugin> = options
        .plugins
        .iter()
        .cloned()
        .map(ConfiguredPlugin::Custom)
        .collect();

    let (style_rule, style_passes, externals) = match target {
        Target::Node => (
            StyleRule::locals_only(),
            vec![StylePass::Precss],
            Some(externals::collect(&options.externals, deps)?),
        ),
        Target::Web => {
            let styles_name = options
                .output_styles
                .clone()
                .unwrap_or_else(|| DEFAULT_OUTPUT_STYLES.to_string());
            // The web baseline replaces any caller-supplied plugin list.
            plugins = vec![
                ConfiguredPlugin::Prefetch(PrefetchPlugin::new(PREFETCH_REQUEST)),
                ConfiguredPlugin::ExtractStyles(ExtractStylesPlugin::new(styles_name.clone())),
            ];
            (
                StyleRule::extract(styles_name),
                vec![StylePass::Autoprefixer, StylePass::Precss],
                None,
            )
        }
    };
    rules.push(ModuleRule::new(
        SuffixPattern::new([".css", ".scss"]),
        Loader::Styles(style_rule),
    ));

    let mut output = OutputOptions {
        filename: options
            .filename
            .clone()
            .unwrap_or_else(|| DEFAULT_FILENAME.to_string()),
        library: None,
        library_target: None,
        devtool_module_filename_template: None,
    };
    if let Some(library) = &options.library {
        output.library = Some(library.clone());
        output.library_target = Some(LibraryTarget::Umd);
    }

    let sourcemaps = options.effective_sourcemaps();
    let devtool = if sourcemaps {
        output.devtool_module_filename_template = Some(DEVTOOL_MODULE_TEMPLATE.to_string());
        Some(Devtool::SourceMap)
    } else {
        None
    };

    if options.effective_minify() {
        plugins.push(ConfiguredPlugin::Minify(MinifyPlugin));
    }

    Ok(BuildConfiguration {
        target,
        output,
        devtool,
        resolve: ResolveOptions { extensions },
        module: ModuleOptions { rules },
        externals,
        plugins,
        style_passes,
        transpile: TranspileOptions {
            // Transpiler diagnostics stay quiet unless the caller
            // explicitly passed `silent: false`.
            silent: options.silent.unwrap_or(true),
            jsx: JsxDialect::React,
            source_map: sourcemaps,
        },
        stats: StatsOptions {
            exclude: options.exclude_stats.clone(),
        },
        watch: options.watch,
    })
}
