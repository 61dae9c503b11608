//! Artifact generation for a fully specified property.
//!
//! Validation runs first and is all-or-nothing: a property with any
//! violation produces no artifacts, and the error carries every violation
//! found so the caller can fix them in one pass. Generation itself is a pure
//! function of the property and options — same input, byte-identical output.

mod render;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::PropertyCatalog;
use crate::model::{Artifact, GeneratedArtifactSet, Property, PropertyType};
use crate::{Error, Result};

// ============================================================================
// Violations
// ============================================================================

/// A single reason a property is not generatable. Collected exhaustively,
/// never short-circuited.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize, Deserialize)]
pub enum Violation {
    #[error("name `{0}` is not canonical (uppercase alphanumeric segments joined by `_`)")]
    MalformedName(String),
    #[error("identifier must be non-zero")]
    ZeroId,
    #[error("identifier {0} for a VENDOR property is outside the reserved vendor range")]
    VendorIdOutOfRange(String),
    #[error("identifier {id} is already assigned to `{existing}`")]
    IdCollision { id: String, existing: String },
    #[error("min_value {min} exceeds max_value {max}")]
    InvertedRange { min: f64, max: f64 },
    #[error("value range is only meaningful for numeric types, not {0}")]
    RangeOnNonNumeric(String),
    #[error("units are only meaningful for numeric types, not {0}")]
    UnitsOnNonNumeric(String),
    #[error("CONTINUOUS properties must declare a positive sample rate")]
    MissingSampleRate,
    #[error("sample rate {0} Hz is not positive")]
    NonPositiveSampleRate(f32),
    #[error("sample rate is only meaningful for CONTINUOUS properties")]
    SampleRateOnNonContinuous,
    #[error("enumerated values are only meaningful for INT32 properties, not {0}")]
    EnumOnNonInt32(String),
    #[error("dependency `{0}` is neither a catalog property nor the property itself")]
    DanglingDependency(String),
    #[error("dependency `{0}` leads back to the property itself")]
    DependencyCycle(String),
}

// ============================================================================
// Options
// ============================================================================

/// Knobs for the review-facing artifacts. Everything here is appended, never
/// substituted: defaults produce a complete artifact set on their own.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Extra items appended to the review checklist of the change
    /// description.
    pub reviewer_notes: Vec<String>,
    /// Tracker link or requirement reference appended to the references
    /// section of the change description.
    pub source_reference: Option<String>,
}

// ============================================================================
// Generator
// ============================================================================

/// Artifact names, in emission order.
pub const ARTIFACT_TYPE_DEFINITION: &str = "type-definition";
pub const ARTIFACT_BINDING: &str = "binding";
pub const ARTIFACT_UNIT_TEST: &str = "unit-test";
pub const ARTIFACT_BUILD_FRAGMENT: &str = "build-fragment";
pub const ARTIFACT_PR_DESCRIPTION: &str = "pr-description";

/// Validates a property against the catalog and renders its artifact set.
pub struct ArtifactGenerator {
    catalog: Arc<PropertyCatalog>,
}

impl ArtifactGenerator {
    pub fn new(catalog: Arc<PropertyCatalog>) -> Self {
        Self { catalog }
    }

    /// Every violation in `property`, in a deterministic order. Empty means
    /// generatable.
    pub fn validate(&self, property: &Property) -> Vec<Violation> {
        let mut violations = Vec::new();

        if !is_canonical_name(&property.name) {
            violations.push(Violation::MalformedName(property.name.clone()));
        }

        if property.id.0 == 0 {
            violations.push(Violation::ZeroId);
        } else if property.group == "VENDOR" && !property.id.is_vendor() {
            violations.push(Violation::VendorIdOutOfRange(property.id.to_hex()));
        }
        if let Some(existing) = self
            .catalog
            .all()
            .find(|entry| entry.id == property.id && entry.name != property.name)
        {
            violations.push(Violation::IdCollision {
                id: property.id.to_hex(),
                existing: existing.name.clone(),
            });
        }

        let type_label = property.property_type.label();
        if let (Some(min), Some(max)) = (property.min_value, property.max_value) {
            if min > max {
                violations.push(Violation::InvertedRange { min, max });
            }
        }
        if !property.property_type.is_numeric() {
            if property.min_value.is_some() || property.max_value.is_some() {
                violations.push(Violation::RangeOnNonNumeric(type_label.to_string()));
            }
            if property.units.is_some() {
                violations.push(Violation::UnitsOnNonNumeric(type_label.to_string()));
            }
        }

        match (property.change_mode, property.sample_rate_hz) {
            (crate::model::ChangeMode::Continuous, None) => {
                violations.push(Violation::MissingSampleRate);
            }
            (crate::model::ChangeMode::Continuous, Some(rate)) if rate <= 0.0 => {
                violations.push(Violation::NonPositiveSampleRate(rate));
            }
            (crate::model::ChangeMode::Continuous, Some(_)) => {}
            (_, Some(_)) => violations.push(Violation::SampleRateOnNonContinuous),
            (_, None) => {}
        }

        if !property.enum_values.is_empty() && property.property_type != PropertyType::Int32 {
            violations.push(Violation::EnumOnNonInt32(type_label.to_string()));
        }

        for dep in &property.dependencies {
            if dep != &property.name && !self.catalog.contains(dep) {
                violations.push(Violation::DanglingDependency(dep.clone()));
            }
        }
        if let Some(entry) = self.cycle_entry(property) {
            violations.push(Violation::DependencyCycle(entry));
        }

        violations
    }

    /// First direct dependency whose transitive closure (through the
    /// catalog) reaches back to the property, if any.
    fn cycle_entry(&self, property: &Property) -> Option<String> {
        for direct in &property.dependencies {
            if direct == &property.name {
                return Some(direct.clone());
            }
            let mut stack: Vec<&str> = vec![direct.as_str()];
            let mut seen: hashbrown::HashSet<&str> = stack.iter().copied().collect();
            while let Some(node) = stack.pop() {
                if node == property.name {
                    return Some(direct.clone());
                }
                if let Some(entry) = self.catalog.get(node) {
                    for dep in &entry.dependencies {
                        if seen.insert(dep.as_str()) {
                            stack.push(dep.as_str());
                        }
                    }
                }
            }
        }
        None
    }

    /// Render the full artifact set for `property`.
    ///
    /// Fails with [`Error::InvalidProperty`] carrying every violation when
    /// the property is not generatable. Otherwise returns five artifacts in
    /// a fixed order: type definition, framework binding, HAL unit test,
    /// build fragment, change description.
    pub fn generate(
        &self,
        property: &Property,
        options: &GenerateOptions,
    ) -> Result<GeneratedArtifactSet> {
        let violations = self.validate(property);
        if !violations.is_empty() {
            tracing::warn!(
                name = %property.name,
                count = violations.len(),
                "property failed validation"
            );
            return Err(Error::InvalidProperty { violations });
        }

        let lower = property.name.to_ascii_lowercase();
        let artifacts = vec![
            Artifact {
                name: ARTIFACT_TYPE_DEFINITION.to_string(),
                path: format!("hardware/interfaces/automotive/vehicle/aidl/{lower}.aidl"),
                content: render::type_definition(property),
            },
            Artifact {
                name: ARTIFACT_BINDING.to_string(),
                path: format!("packages/services/Car/car-lib/src/{lower}_binding.java"),
                content: render::binding(property),
            },
            Artifact {
                name: ARTIFACT_UNIT_TEST.to_string(),
                path: format!(
                    "hardware/interfaces/automotive/vehicle/aidl/impl/vhal/test/{lower}_test.cpp"
                ),
                content: render::unit_test(property),
            },
            Artifact {
                name: ARTIFACT_BUILD_FRAGMENT.to_string(),
                path: format!(
                    "hardware/interfaces/automotive/vehicle/aidl/impl/default_config/{lower}.json"
                ),
                content: render::build_fragment(property),
            },
            Artifact {
                name: ARTIFACT_PR_DESCRIPTION.to_string(),
                path: format!("{lower}_pr.md"),
                content: render::pr_description(property, options),
            },
        ];
        tracing::info!(name = %property.name, id = %property.id, "generated artifact set");
        Ok(GeneratedArtifactSet {
            property: property.clone(),
            artifacts,
        })
    }
}

/// Canonical form: non-empty `_`-separated segments of uppercase ASCII
/// letters and digits.
fn is_canonical_name(name: &str) -> bool {
    !name.is_empty()
        && name.split('_').all(|seg| {
            !seg.is_empty()
                && seg
                    .chars()
                    .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        })
}
