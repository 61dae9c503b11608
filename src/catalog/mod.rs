//! Property catalog — the immutable-after-build table of known properties.
//!
//! Built once from a fixed definition set (see [`defs`]) and treated as
//! read-only for the remainder of the process lifetime. Lookups are
//! case-insensitive and whitespace-trimmed; the stored form is canonical
//! (uppercase, trimmed). Concurrent reads need no coordination.

pub mod defs;

use std::collections::BTreeMap;

use hashbrown::{HashMap, HashSet};

use crate::model::{canonical_name, Property, PropertyId};
use crate::{Error, Result};

/// Immutable snapshot of the known property set.
///
/// The primary table is name-ordered so `all()` iterates deterministically;
/// the category index is the catalog's poor man's secondary index.
#[derive(Debug)]
pub struct PropertyCatalog {
    by_name: BTreeMap<String, Property>,
    /// category → canonical names, kept sorted.
    by_category: HashMap<String, Vec<String>>,
    ids: HashSet<u32>,
}

impl PropertyCatalog {
    /// Catalog of the builtin platform property set.
    pub fn builtin() -> Self {
        // The builtin table is validated by tests; duplicates there are a bug.
        Self::from_properties(defs::builtin_properties())
            .unwrap_or_else(|e| panic!("builtin property table is inconsistent: {e}"))
    }

    /// Build a catalog from an explicit property list.
    ///
    /// Fails with [`Error::CatalogConflict`] if two entries share a name or
    /// an identifier.
    pub fn from_properties(properties: Vec<Property>) -> Result<Self> {
        let mut by_name = BTreeMap::new();
        let mut by_category: HashMap<String, Vec<String>> = HashMap::new();
        let mut ids = HashSet::new();

        for prop in properties {
            if !ids.insert(prop.id.0) {
                return Err(Error::CatalogConflict(format!(
                    "duplicate property id {} ({})",
                    prop.id, prop.name
                )));
            }
            by_category
                .entry(prop.group.clone())
                .or_default()
                .push(prop.name.clone());
            if let Some(previous) = by_name.insert(prop.name.clone(), prop) {
                return Err(Error::CatalogConflict(format!(
                    "duplicate property name {}",
                    previous.name
                )));
            }
        }
        for names in by_category.values_mut() {
            names.sort_unstable();
        }

        tracing::info!(properties = by_name.len(), "property catalog built");
        Ok(Self { by_name, by_category, ids })
    }

    /// Case-insensitive, whitespace-trimmed lookup.
    pub fn lookup(&self, name: &str) -> Result<&Property> {
        self.get(name)
            .ok_or_else(|| Error::UnknownProperty(canonical_name(name)))
    }

    /// Like [`lookup`](Self::lookup) but without the error wrapping.
    pub fn get(&self, name: &str) -> Option<&Property> {
        self.by_name.get(&canonical_name(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(&canonical_name(name))
    }

    /// All properties of a category, ordered by name. Empty for unknown
    /// categories.
    pub fn by_category(&self, group: &str) -> Vec<&Property> {
        self.by_category
            .get(&canonical_name(group))
            .map(|names| names.iter().map(|n| &self.by_name[n]).collect())
            .unwrap_or_default()
    }

    pub fn is_category(&self, group: &str) -> bool {
        self.by_category.contains_key(&canonical_name(group))
    }

    /// Every property, ordered by canonical name.
    pub fn all(&self) -> impl Iterator<Item = &Property> {
        self.by_name.values()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Whether any catalog entry already carries this identifier.
    pub fn id_in_use(&self, id: PropertyId) -> bool {
        self.ids.contains(&id.0)
    }
}
