//! Target platforms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Platform the produced artifact executes on.
///
/// The target selects the module-loader chain, the externalization policy
/// and the stylesheet policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Server-side execution. Installed dependencies stay out of the bundle
    /// and are loaded through the platform's own module system at runtime.
    Node,
    /// Browser execution. Dependencies are bundled; stylesheet output is
    /// extracted into a separate artifact.
    Web,
}

impl Target {
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Node => "node",
            Target::Web => "web",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "node" => Ok(Target::Node),
            "web" => Ok(Target::Web),
            other => Err(format!("unknown target: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_round_trip() {
        assert_eq!("node".parse::<Target>().unwrap(), Target::Node);
        assert_eq!("web".parse::<Target>().unwrap(), Target::Web);
        assert_eq!(Target::Node.to_string(), "node");
        assert!("browser".parse::<Target>().is_err());
    }
}
