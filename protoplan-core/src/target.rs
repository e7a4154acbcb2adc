//! Target identity and the naming policy applied to every derived path.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The logical target a build unit is constructed for.
///
/// Immutable once a build unit starts. Every derived path is namespaced by
/// the target name so parallel targets never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetIdentity {
    name: String,
    package: String,
}

impl TargetIdentity {
    pub fn new(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
        }
    }

    /// The target name (e.g. `api_proto`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The package owning the target (e.g. `services/api`).
    pub fn package(&self) -> &str {
        &self.package
    }

    /// The canonical label, `//package:name`.
    pub fn label(&self) -> String {
        format!("//{}:{}", self.package, self.name)
    }
}

impl fmt::Display for TargetIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "//{}:{}", self.package, self.name)
    }
}

/// Controls whether the target name is injected into derived paths.
///
/// Used when several targets share one output root and would otherwise
/// produce same-named artifacts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingPolicy {
    #[serde(default)]
    pub include_target_name: bool,
    #[serde(default)]
    pub qualifier: Option<String>,
}

impl NamingPolicy {
    /// Policy that leaves paths untouched.
    pub fn plain() -> Self {
        Self::default()
    }

    /// Policy that injects the target name into every path.
    pub fn with_target_name() -> Self {
        Self {
            include_target_name: true,
            qualifier: None,
        }
    }

    pub fn qualified(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }

    /// The path segment to inject for `target`, if any.
    pub fn segment(&self, target: &TargetIdentity) -> Option<String> {
        if !self.include_target_name {
            return None;
        }
        match self.qualifier.as_deref() {
            Some(q) if !q.is_empty() => Some(format!("{}.{}", target.name(), q)),
            _ => Some(target.name().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        let target = TargetIdentity::new("api_proto", "services/api");
        assert_eq!(target.label(), "//services/api:api_proto");
        assert_eq!(target.to_string(), "//services/api:api_proto");
    }

    #[test]
    fn test_segment() {
        let target = TargetIdentity::new("lib", "pkg");
        assert_eq!(NamingPolicy::plain().segment(&target), None);
        assert_eq!(
            NamingPolicy::with_target_name().segment(&target).as_deref(),
            Some("lib")
        );
        assert_eq!(
            NamingPolicy::with_target_name()
                .qualified("v2")
                .segment(&target)
                .as_deref(),
            Some("lib.v2")
        );
    }

    #[test]
    fn test_qualifier_ignored_without_flag() {
        let target = TargetIdentity::new("lib", "pkg");
        let policy = NamingPolicy::plain().qualified("v2");
        assert_eq!(policy.segment(&target), None);
    }

    #[test]
    fn test_deserialize_defaults() {
        let policy: NamingPolicy = serde_json::from_str("{}").unwrap();
        assert_eq!(policy, NamingPolicy::plain());
    }
}
