//! Generated implementation artifacts.

use serde::{Deserialize, Serialize};

use super::Property;

/// One named, rendered text artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// Stable artifact name, e.g. `type-definition` or `pr-description`.
    pub name: String,
    /// Suggested target path inside an AOSP checkout.
    pub path: String,
    pub content: String,
}

/// The full artifact set produced by one generation call, plus the resolved
/// property it was rendered from. Immutable after creation — regeneration
/// produces a new set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedArtifactSet {
    pub property: Property,
    /// Fixed order: type-definition, binding, unit-test, build-fragment,
    /// pr-description.
    pub artifacts: Vec<Artifact>,
}

impl GeneratedArtifactSet {
    pub fn get(&self, name: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.artifacts.iter().map(|a| a.name.as_str()).collect()
    }
}
