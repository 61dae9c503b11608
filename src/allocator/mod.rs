//! Vendor identifier allocation.
//!
//! Mints collision-free identifiers from the reserved vendor range. The
//! in-run allocation record is the only mutable shared state in the crate;
//! the check-then-record step is serialized behind one mutex so two
//! concurrent requests can never receive the same identifier.

use std::sync::Arc;

use hashbrown::{HashMap, HashSet};
use parking_lot::Mutex;

use crate::catalog::PropertyCatalog;
use crate::model::property::{VENDOR_RANGE_END, VENDOR_RANGE_START};
use crate::model::{canonical_name, PropertyId};
use crate::{Error, Result};

/// FNV-1a, 64-bit. A stable, dependency-free hash: the derived identifier
/// for a property name must not change across runs or platforms.
fn fnv1a64(text: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    let mut hash = OFFSET;
    for byte in text.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

struct AllocatorState {
    /// Every identifier handed out during this process lifetime.
    used: HashSet<u32>,
    /// name → identifier, so re-deriving for the same name is idempotent.
    by_name: HashMap<String, u32>,
    /// Identifiers granted via an explicit preference; repeat requests for
    /// the same preference return the same value.
    preferred_grants: HashSet<u32>,
}

/// Allocates identifiers from a contiguous vendor range.
pub struct VendorIdAllocator {
    catalog: Arc<PropertyCatalog>,
    range_start: u32,
    range_end: u32,
    state: Mutex<AllocatorState>,
}

impl VendorIdAllocator {
    /// Allocator over the standard vendor range `0x70000000..=0x7FFFFFFF`.
    pub fn new(catalog: Arc<PropertyCatalog>) -> Self {
        Self::with_range(catalog, VENDOR_RANGE_START, VENDOR_RANGE_END)
    }

    /// Allocator over a custom contiguous range (inclusive bounds).
    pub fn with_range(catalog: Arc<PropertyCatalog>, range_start: u32, range_end: u32) -> Self {
        assert!(range_start <= range_end, "empty vendor range");
        Self {
            catalog,
            range_start,
            range_end,
            state: Mutex::new(AllocatorState {
                used: HashSet::new(),
                by_name: HashMap::new(),
                preferred_grants: HashSet::new(),
            }),
        }
    }

    fn in_range(&self, id: u32) -> bool {
        (self.range_start..=self.range_end).contains(&id)
    }

    /// Allocate an identifier for `name`.
    ///
    /// An explicit in-range `preferred` value is honored verbatim when no
    /// catalog entry and no earlier allocation (other than a previous grant
    /// of the same preference) holds it. Otherwise the identifier is derived
    /// from a stable hash of the canonical name, probing linearly (with
    /// wrap-around) past occupied slots. Fails with [`Error::RangeExhausted`]
    /// once every value in the range is taken.
    pub fn allocate(&self, name: &str, preferred: Option<PropertyId>) -> Result<PropertyId> {
        let name = canonical_name(name);
        let mut state = self.state.lock();

        if let Some(preferred) = preferred {
            if self.in_range(preferred.0) && !self.catalog.id_in_use(preferred) {
                if state.preferred_grants.contains(&preferred.0) {
                    return Ok(preferred);
                }
                if !state.used.contains(&preferred.0) {
                    state.used.insert(preferred.0);
                    state.preferred_grants.insert(preferred.0);
                    tracing::debug!(%name, id = %preferred, "granted preferred vendor id");
                    return Ok(preferred);
                }
            }
            // Unusable preference: fall through to derivation.
        }

        if let Some(&id) = state.by_name.get(&name) {
            return Ok(PropertyId(id));
        }

        let size = u64::from(self.range_end - self.range_start) + 1;
        let offset = fnv1a64(&name) % size;
        for probe in 0..size {
            let id = self.range_start + ((offset + probe) % size) as u32;
            if self.catalog.id_in_use(PropertyId(id)) || state.used.contains(&id) {
                continue;
            }
            state.used.insert(id);
            state.by_name.insert(name.clone(), id);
            tracing::debug!(%name, id = %PropertyId(id), probes = probe, "allocated vendor id");
            return Ok(PropertyId(id));
        }

        Err(Error::RangeExhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AccessMode, ChangeMode, Property, PropertyType};

    fn catalog() -> Arc<PropertyCatalog> {
        Arc::new(PropertyCatalog::builtin())
    }

    #[test]
    fn test_fnv1a64_is_stable() {
        // Pinned: a changed hash would silently re-map every derived id.
        assert_eq!(fnv1a64(""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(fnv1a64("a"), 0xaf63_dc4c_8601_ec8c);
    }

    #[test]
    fn test_derived_id_is_in_vendor_range_and_stable() {
        let alloc = VendorIdAllocator::new(catalog());
        let id = alloc.allocate("VENDOR_CABIN_SCENT", None).unwrap();
        assert!(id.is_vendor());
        // Same name, same run: same identifier.
        assert_eq!(alloc.allocate("VENDOR_CABIN_SCENT", None).unwrap(), id);
        // A fresh allocator (same catalog) derives the same identifier.
        let fresh = VendorIdAllocator::new(catalog());
        assert_eq!(fresh.allocate("vendor_cabin_scent", None).unwrap(), id);
    }

    #[test]
    fn test_distinct_names_get_distinct_ids() {
        let alloc = VendorIdAllocator::new(catalog());
        let a = alloc.allocate("VENDOR_A", None).unwrap();
        let b = alloc.allocate("VENDOR_B", None).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_preferred_is_idempotent() {
        let alloc = VendorIdAllocator::new(catalog());
        let want = PropertyId(0x7000_1234);
        assert_eq!(alloc.allocate("VENDOR_X", Some(want)).unwrap(), want);
        assert_eq!(alloc.allocate("VENDOR_X", Some(want)).unwrap(), want);
    }

    #[test]
    fn test_out_of_range_preferred_falls_back_to_derivation() {
        let alloc = VendorIdAllocator::new(catalog());
        let id = alloc
            .allocate("VENDOR_Y", Some(PropertyId(0x1540_0300)))
            .unwrap();
        assert!(id.is_vendor());
        assert_ne!(id.0, 0x1540_0300);
    }

    #[test]
    fn test_probing_skips_catalog_ids() {
        let vendor_prop = Property::new(
            "VENDOR_TAKEN",
            PropertyId(0x7000_0000),
            PropertyType::Int32,
            "VENDOR",
            AccessMode::ReadWrite,
            ChangeMode::OnChange,
            "occupies the first vendor slot",
        );
        let catalog = Arc::new(PropertyCatalog::from_properties(vec![vendor_prop]).unwrap());
        // Two-slot range: the catalog holds slot 0, so any name lands on 1.
        let alloc = VendorIdAllocator::with_range(catalog, 0x7000_0000, 0x7000_0001);
        let id = alloc.allocate("VENDOR_NEW", None).unwrap();
        assert_eq!(id, PropertyId(0x7000_0001));
    }

    #[test]
    fn test_range_exhaustion_is_fatal() {
        let catalog = Arc::new(PropertyCatalog::from_properties(Vec::new()).unwrap());
        let alloc = VendorIdAllocator::with_range(catalog, 0x7000_0000, 0x7000_0002);
        alloc.allocate("VENDOR_A", None).unwrap();
        alloc.allocate("VENDOR_B", None).unwrap();
        alloc.allocate("VENDOR_C", None).unwrap();
        assert!(matches!(
            alloc.allocate("VENDOR_D", None),
            Err(Error::RangeExhausted)
        ));
    }
}
