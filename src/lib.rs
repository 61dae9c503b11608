//! # vhal-props
//!
//! Property knowledge engine for Android vHAL property authoring.
//!
//! The crate answers one question end to end: *"I need vehicle property X —
//! does it already exist, what does it depend on, and what do I have to
//! write?"* It holds an in-memory catalog of the platform property set, a
//! dependency graph over it, a similarity matcher for reuse-vs-create
//! decisions, a collision-free vendor identifier allocator, and a
//! deterministic generator for the implementation artifacts.
//!
//! ## Quick start
//!
//! ```
//! use vhal_props::PropertyEngine;
//!
//! let engine = PropertyEngine::new();
//!
//! // Does the property already exist?
//! let result = engine.lookup_or_match(
//!     "HVAC_FAN_SPEED",
//!     "fan speed for the climate system",
//!     &Default::default(),
//! );
//! assert!(result.is_exact());
//!
//! // In what order do I implement a set of properties?
//! let order = engine.implementation_order(["HVAC_MAX_AC_ON"]).unwrap();
//! assert_eq!(order.first().unwrap().name, "HVAC_POWER_ON");
//! ```
//!
//! All components are read-only after construction except the allocator,
//! which serializes its check-then-record step internally; the engine is
//! safe to share across threads behind an `Arc`.

pub mod allocator;
pub mod catalog;
pub mod generate;
pub mod graph;
pub mod matcher;
pub mod model;

use std::sync::Arc;

use allocator::VendorIdAllocator;
use catalog::PropertyCatalog;
use generate::{ArtifactGenerator, GenerateOptions, Violation};
use graph::RelationshipGraph;
use matcher::{MatchEngine, ProposedMetadata, ScoringPolicy};
use model::{GeneratedArtifactSet, MatchResult, Property, PropertyId};

// ============================================================================
// Errors
// ============================================================================

/// Crate-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The name matches neither a catalog property nor a category.
    #[error("unknown property or category: {0}")]
    UnknownProperty(String),

    /// The requested implementation order is impossible; `cycle` names every
    /// property on one offending cycle.
    #[error("dependency cycle: {}", cycle.join(" -> "))]
    CyclicDependency { cycle: Vec<String> },

    /// Every identifier in the vendor range is taken.
    #[error("vendor identifier range exhausted")]
    RangeExhausted,

    /// The property is not generatable; `violations` lists every reason.
    #[error("property is invalid: {}", format_violations(violations))]
    InvalidProperty { violations: Vec<Violation> },

    /// Two catalog entries collide on a name or an identifier.
    #[error("catalog conflict: {0}")]
    CatalogConflict(String),
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, Error>;

// ============================================================================
// Engine
// ============================================================================

/// The assembled engine: one handle over catalog, graph, matcher, allocator
/// and generator, all sharing a single catalog snapshot.
pub struct PropertyEngine {
    catalog: Arc<PropertyCatalog>,
    graph: RelationshipGraph,
    matcher: MatchEngine,
    allocator: VendorIdAllocator,
    generator: ArtifactGenerator,
}

impl PropertyEngine {
    /// Engine over the builtin platform property set with default scoring.
    pub fn new() -> Self {
        Self::with_policy(PropertyCatalog::builtin(), ScoringPolicy::default())
    }

    /// Engine over a caller-supplied catalog with default scoring.
    pub fn from_catalog(catalog: PropertyCatalog) -> Self {
        Self::with_policy(catalog, ScoringPolicy::default())
    }

    /// Engine over a caller-supplied catalog and scoring policy.
    pub fn with_policy(catalog: PropertyCatalog, policy: ScoringPolicy) -> Self {
        let catalog = Arc::new(catalog);
        tracing::info!(properties = catalog.len(), "property engine assembled");
        Self {
            graph: RelationshipGraph::build(Arc::clone(&catalog)),
            matcher: MatchEngine::with_policy(Arc::clone(&catalog), policy),
            allocator: VendorIdAllocator::new(Arc::clone(&catalog)),
            generator: ArtifactGenerator::new(Arc::clone(&catalog)),
            catalog,
        }
    }

    /// The underlying catalog snapshot.
    pub fn catalog(&self) -> &PropertyCatalog {
        &self.catalog
    }

    /// Exact (case-insensitive, whitespace-tolerant) catalog lookup.
    pub fn lookup(&self, name: &str) -> Result<&Property> {
        self.catalog.lookup(name)
    }

    /// Match a proposed property against the catalog: exact match, ranked
    /// similar candidates, or a clean miss, each with a recommendation.
    pub fn lookup_or_match(
        &self,
        name: &str,
        description: &str,
        metadata: &ProposedMetadata,
    ) -> MatchResult {
        self.matcher.validate(name, description, metadata)
    }

    /// Related properties for a property name or a category name.
    pub fn related(&self, name_or_category: &str) -> Result<Vec<Property>> {
        self.graph.related(name_or_category)
    }

    /// Direct dependencies of a property, ordered by name.
    pub fn dependencies_of(&self, name: &str) -> Result<Vec<String>> {
        self.graph.dependencies_of(name)
    }

    /// Properties that directly depend on `name`, ordered by name.
    pub fn dependents_of(&self, name: &str) -> Result<Vec<String>> {
        self.graph.dependents_of(name)
    }

    /// Deterministic dependencies-first implementation order over the given
    /// properties and their transitive dependencies.
    pub fn implementation_order<I, S>(&self, names: I) -> Result<Vec<Property>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.graph.implementation_order(names)
    }

    /// Allocate a collision-free vendor identifier for `name`. An in-range,
    /// unclaimed `preferred` identifier is honored verbatim.
    pub fn allocate_vendor_id(
        &self,
        name: &str,
        preferred: Option<PropertyId>,
    ) -> Result<PropertyId> {
        self.allocator.allocate(name, preferred)
    }

    /// Validate `property` and render its full artifact set.
    pub fn generate(
        &self,
        property: &Property,
        options: &GenerateOptions,
    ) -> Result<GeneratedArtifactSet> {
        self.generator.generate(property, options)
    }

    /// Build a ready-to-generate vendor property: canonical `VENDOR_`-prefixed
    /// name, freshly allocated identifier, caller-supplied shape.
    pub fn scaffold_vendor_property(
        &self,
        name: &str,
        description: &str,
        metadata: &ProposedMetadata,
    ) -> Result<Property> {
        let canonical = model::canonical_name(name);
        let vendor_name = if canonical.starts_with("VENDOR_") {
            canonical
        } else {
            format!("VENDOR_{canonical}")
        };
        let id = self.allocator.allocate(&vendor_name, None)?;
        tracing::info!(name = %vendor_name, id = %id, "scaffolded vendor property");
        Ok(Property::new(
            vendor_name,
            id,
            metadata.property_type,
            "VENDOR",
            metadata.access,
            metadata.change_mode,
            description,
        ))
    }
}

impl Default for PropertyEngine {
    fn default() -> Self {
        Self::new()
    }
}
