//! Externalization policy for the node target.
//!
//! Declared externals come from the caller; the rest are auto-populated
//! from whatever is installed in the surrounding environment. Both map to
//! the same runtime reference expression, but the caller's entries are
//! established first and a later environment entry never overrides one.

use std::fs;
use std::io;
use std::path::PathBuf;

use rustc_hash::FxHashMap;

/// Enumerates the top-level dependencies installed in the surrounding
/// environment.
///
/// This is the one environment-dependent input to configuration building.
/// Injecting it keeps the builder deterministic over its explicit inputs
/// and lets tests substitute a fixed set.
pub trait DependencyLister: Send + Sync {
    fn list(&self) -> io::Result<Vec<String>>;
}

/// Lists the entries of an installed-dependency directory on disk.
#[derive(Debug, Clone)]
pub struct InstalledPackages {
    root: PathBuf,
}

impl InstalledPackages {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DependencyLister for InstalledPackages {
    fn list(&self) -> io::Result<Vec<String>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if let Some(name) = entry.file_name().to_str() {
                entries.push(name.to_string());
            }
        }
        entries.sort();
        Ok(entries)
    }
}

/// Runtime reference expression for an external module.
pub fn external_reference(module: &str) -> String {
    format!("commonjs {module}")
}

/// Reserved directory entries that are never dependencies.
fn is_reserved(name: &str) -> bool {
    name.starts_with('.')
}

/// Maps each caller-declared external to its reference expression.
pub(crate) fn declared(externals: &[String]) -> FxHashMap<String, String> {
    externals
        .iter()
        .map(|module| (module.clone(), external_reference(module)))
        .collect()
}

/// Merges every installed dependency into `externals`, filling gaps only:
/// an existing entry always wins over an enumerated one.
pub(crate) fn merge_installed(
    externals: &mut FxHashMap<String, String>,
    deps: &dyn DependencyLister,
) -> io::Result<()> {
    for module in deps.list()? {
        if is_reserved(&module) {
            continue;
        }
        externals
            .entry(module.clone())
            .or_insert_with(|| external_reference(&module));
    }
    Ok(())
}

/// Builds the full externals map: declared entries first, then the
/// installed set merged in.
pub(crate) fn collect(
    externals: &[String],
    deps: &dyn DependencyLister,
) -> io::Result<FxHashMap<String, String>> {
    let mut map = declared(externals);
    merge_installed(&mut map, deps)?;
    Ok(map)
}
