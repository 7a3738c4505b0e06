//! Module-transform rule descriptors.
//!
//! Rules are data only: this layer decides which transform applies to which
//! files, the engine interprets the result.

use serde::{Deserialize, Serialize};

/// Local class-name hashing scheme shared by both stylesheet policies.
pub const LOCAL_IDENT: &str = "[hash:base64:5]";

/// Matches files by name suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixPattern(Vec<String>);

impl SuffixPattern {
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(suffixes.into_iter().map(Into::into).collect())
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.0.iter().any(|suffix| file_name.ends_with(suffix.as_str()))
    }

    pub fn suffixes(&self) -> &[String] {
        &self.0
    }
}

/// One module-transform rule: which files it applies to and how they are
/// transformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleRule {
    pub test: SuffixPattern,
    pub loader: Loader,
}

impl ModuleRule {
    pub fn new(test: SuffixPattern, loader: Loader) -> Self {
        Self { test, loader }
    }
}

/// Transform applied to matching files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Loader {
    /// Type-aware transpile step for statically-typed sources.
    TypeScript,
    /// Structured data parsed as a module.
    Json,
    /// Stylesheet handling; the policy depends on the target.
    Styles(StyleRule),
    /// Caller-supplied loader chain, handed to the engine untouched.
    Custom(String),
}

/// How stylesheet sources are transformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleRule {
    pub emit: StyleEmit,
    /// Hashing scheme for local class names.
    pub local_ident: String,
    /// Number of preceding loaders applied to imported stylesheets.
    pub import_loaders: u8,
}

impl StyleRule {
    /// Expose only the local class-name mapping; no styling is emitted.
    pub fn locals_only() -> Self {
        Self {
            emit: StyleEmit::LocalsOnly,
            local_ident: LOCAL_IDENT.to_string(),
            import_loaders: 1,
        }
    }

    /// Emit a script module with the class-name mapping plus one aggregated
    /// stylesheet artifact with the given name.
    pub fn extract(filename: impl Into<String>) -> Self {
        Self {
            emit: StyleEmit::Extract {
                filename: filename.into(),
            },
            local_ident: LOCAL_IDENT.to_string(),
            import_loaders: 1,
        }
    }
}

/// Where transformed stylesheet output ends up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StyleEmit {
    /// Script-only output: the local class-name mapping.
    LocalsOnly,
    /// Script output plus a separate stylesheet artifact aggregating all
    /// style rules from all chunks.
    Extract { filename: String },
}

/// Cascading-style preprocessing macro stages, run in list order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StylePass {
    Precss,
    Autoprefixer,
}
