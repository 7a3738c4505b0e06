use std::borrow::Cow;
use std::io;

use packline_config::{
    CompileOptions, ConfiguredPlugin, DependencyLister, EnginePlugin, Target,
    build_configuration, external_reference,
};

struct Installed(Vec<&'static str>);

impl DependencyLister for Installed {
    fn list(&self) -> io::Result<Vec<String>> {
        Ok(self.0.iter().map(|s| s.to_string()).collect())
    }
}

#[derive(Debug)]
struct CallerPlugin;

impl EnginePlugin for CallerPlugin {
    fn name(&self) -> Cow<'static, str> {
        "caller-plugin".into()
    }
}

fn plugin_names(plugins: &[ConfiguredPlugin]) -> Vec<String> {
    plugins.iter().map(|plugin| plugin.name().into_owned()).collect()
}

#[test]
fn node_externals_cover_every_installed_dependency() {
    let options = CompileOptions::new(Target::Node);
    let configuration =
        build_configuration(&options, &Installed(vec!["react", "lodash", ".bin"])).unwrap();

    let externals = configuration.externals.expect("node target has externals");
    assert_eq!(externals.len(), 2);
    assert_eq!(externals["react"], external_reference("react"));
    assert_eq!(externals["lodash"], external_reference("lodash"));
    assert!(!externals.contains_key(".bin"));
}

#[test]
fn declared_externals_merge_with_installed_ones() {
    let options = CompileOptions::new(Target::Node).external(["alpha"]);
    let configuration =
        build_configuration(&options, &Installed(vec!["alpha", "beta"])).unwrap();

    // A name present on both sides yields exactly one entry; the declared
    // mapping is established first and the enumeration only fills gaps.
    let externals = configuration.externals.unwrap();
    assert_eq!(externals.len(), 2);
    assert_eq!(externals["alpha"], "commonjs alpha");
    assert_eq!(externals["beta"], "commonjs beta");
}

#[test]
fn web_target_never_wires_externals() {
    let options = CompileOptions::new(Target::Web).external(["react"]);
    let configuration = build_configuration(&options, &Installed(vec!["react"])).unwrap();
    assert!(configuration.externals.is_none());
}

#[test]
fn node_passes_caller_plugins_through() {
    let options = CompileOptions::new(Target::Node)
        .minify(false)
        .plugin(CallerPlugin);
    let configuration = build_configuration(&options, &Installed(vec![])).unwrap();
    assert_eq!(plugin_names(&configuration.plugins), ["caller-plugin"]);
}

#[test]
fn web_baseline_replaces_caller_plugins() {
    let options = CompileOptions::new(Target::Web)
        .minify(false)
        .plugin(CallerPlugin);
    let configuration = build_configuration(&options, &Installed(vec![])).unwrap();
    assert_eq!(
        plugin_names(&configuration.plugins),
        ["prefetch", "extract-styles"]
    );
}

#[test]
fn minify_plugin_lands_last_on_both_targets() {
    let node = build_configuration(
        &CompileOptions::new(Target::Node).minify(true),
        &Installed(vec![]),
    )
    .unwrap();
    assert_eq!(plugin_names(&node.plugins), ["minify"]);

    let web = build_configuration(
        &CompileOptions::new(Target::Web).minify(true),
        &Installed(vec![]),
    )
    .unwrap();
    assert_eq!(
        plugin_names(&web.plugins),
        ["prefetch", "extract-styles", "minify"]
    );
}

#[test]
fn repeated_builds_are_independent() {
    // Two invocations with the same options must not share plugin lists or
    // externals maps.
    let options = CompileOptions::new(Target::Node).external(["alpha"]);
    let deps = Installed(vec!["beta"]);

    let first = build_configuration(&options, &deps).unwrap();
    let mut second = build_configuration(&options, &deps).unwrap();

    second.externals.as_mut().unwrap().clear();
    assert_eq!(first.externals.unwrap().len(), 2);
}
