//! Compile statistics and their printable summary.

use serde_json::{Map, Value};

/// Statistics reported by the engine for one compile cycle.
///
/// The fields are opaque to this layer; they exist only to be rendered
/// into the one-line success summary. Keys render in a fixed order, so the
/// summary is deterministic for a given report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompileStats {
    fields: Map<String, Value>,
}

impl CompileStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one top-level field.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Renders the human-readable summary, omitting excluded fields.
    pub fn render(&self, exclude: &[String]) -> String {
        let mut parts = Vec::with_capacity(self.fields.len());
        for (key, value) in &self.fields {
            if exclude.iter().any(|field| field == key) {
                continue;
            }
            match value {
                Value::String(text) => parts.push(format!("{key}: {text}")),
                other => parts.push(format!("{key}: {other}")),
            }
        }
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_skips_excluded_fields() {
        let stats = CompileStats::new()
            .with("assets", 3_u64)
            .with("chunks", 1_u64)
            .with("time", "12ms");

        let summary = stats.render(&["chunks".to_string()]);
        assert!(summary.contains("assets: 3"));
        assert!(summary.contains("time: 12ms"));
        assert!(!summary.contains("chunks"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let stats = CompileStats::new().with("b", 2_u64).with("a", 1_u64);
        assert_eq!(stats.render(&[]), stats.render(&[]));
    }
}
