//! End-to-end tests for vendor identifier allocation.
//!
//! Each test exercises the full path: canonicalize -> hash-derive -> probe
//! against catalog and in-run record -> grant.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use proptest::prelude::*;
use vhal_props::model::PropertyId;
use vhal_props::{Error, PropertyEngine};

// ============================================================================
// 1. Basic grants
// ============================================================================

#[test]
fn test_allocated_ids_land_in_the_vendor_range() {
    let engine = PropertyEngine::new();
    for name in ["VENDOR_A", "VENDOR_B", "VENDOR_C"] {
        let id = engine.allocate_vendor_id(name, None).unwrap();
        assert!(id.is_vendor(), "{name} got {id} outside the vendor range");
    }
}

#[test]
fn test_same_name_is_idempotent_within_a_run() {
    let engine = PropertyEngine::new();
    let first = engine.allocate_vendor_id("VENDOR_CABIN_SCENT", None).unwrap();
    let second = engine.allocate_vendor_id("vendor_cabin_scent", None).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_derivation_is_stable_across_engines() {
    let a = PropertyEngine::new()
        .allocate_vendor_id("VENDOR_CABIN_SCENT", None)
        .unwrap();
    let b = PropertyEngine::new()
        .allocate_vendor_id("VENDOR_CABIN_SCENT", None)
        .unwrap();
    assert_eq!(a, b);
}

// ============================================================================
// 2. Preferred identifiers
// ============================================================================

#[test]
fn test_preferred_id_is_honored_when_free() {
    let engine = PropertyEngine::new();
    let want = PropertyId(0x7000_BEEF);
    assert_eq!(engine.allocate_vendor_id("VENDOR_X", Some(want)).unwrap(), want);
    // Re-requesting the same preference succeeds with the same value.
    assert_eq!(engine.allocate_vendor_id("VENDOR_X", Some(want)).unwrap(), want);
}

#[test]
fn test_platform_id_as_preference_falls_back_to_derivation() {
    let engine = PropertyEngine::new();
    let id = engine
        .allocate_vendor_id("VENDOR_Y", Some(PropertyId(0x1540_0300)))
        .unwrap();
    assert!(id.is_vendor());
    assert_ne!(id, PropertyId(0x1540_0300));
}

#[test]
fn test_taken_preference_falls_back_to_derivation() {
    let engine = PropertyEngine::new();
    let taken = engine.allocate_vendor_id("VENDOR_FIRST", None).unwrap();
    let other = engine.allocate_vendor_id("VENDOR_SECOND", Some(taken)).unwrap();
    assert_ne!(other, taken);
    assert!(other.is_vendor());
}

// ============================================================================
// 3. Uniqueness under load
// ============================================================================

#[test]
fn test_concurrent_allocations_never_collide() {
    let engine = Arc::new(PropertyEngine::new());
    let mut handles = Vec::new();
    for t in 0..8 {
        let engine = Arc::clone(&engine);
        handles.push(thread::spawn(move || {
            (0..50)
                .map(|i| {
                    engine
                        .allocate_vendor_id(&format!("VENDOR_T{t}_P{i}"), None)
                        .unwrap()
                })
                .collect::<Vec<_>>()
        }));
    }
    let mut seen = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(seen.insert(id.0), "{id} was handed out twice");
        }
    }
    assert_eq!(seen.len(), 400);
}

proptest! {
    #[test]
    fn test_distinct_names_get_distinct_ids(
        names in proptest::collection::hash_set("[A-Z][A-Z0-9_]{0,20}", 1..40)
    ) {
        let engine = PropertyEngine::new();
        let mut granted = HashSet::new();
        for name in &names {
            let id = engine.allocate_vendor_id(name, None).unwrap();
            prop_assert!(id.is_vendor());
            prop_assert!(granted.insert(id.0), "duplicate id for {name}");
        }
    }
}

// ============================================================================
// 4. Exhaustion
// ============================================================================

#[test]
fn test_exhausted_range_is_a_clean_error() {
    use vhal_props::allocator::VendorIdAllocator;
    use vhal_props::catalog::PropertyCatalog;

    let catalog = Arc::new(PropertyCatalog::from_properties(Vec::new()).unwrap());
    let alloc = VendorIdAllocator::with_range(catalog, 0x7000_0000, 0x7000_0003);
    for name in ["VENDOR_A", "VENDOR_B", "VENDOR_C", "VENDOR_D"] {
        alloc.allocate(name, None).unwrap();
    }
    assert!(matches!(
        alloc.allocate("VENDOR_E", None),
        Err(Error::RangeExhausted)
    ));
}
