//! End-to-end tests for relationship queries and implementation ordering.
//!
//! Each test exercises the full path: catalog -> relationship graph ->
//! neighborhood / topological queries.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use vhal_props::catalog::PropertyCatalog;
use vhal_props::model::{AccessMode, ChangeMode, Property, PropertyId, PropertyType};
use vhal_props::{Error, PropertyEngine};

fn prop_node(name: &str, id: u32, deps: &[&str]) -> Property {
    Property::new(
        name,
        PropertyId(id),
        PropertyType::Int32,
        "TEST",
        AccessMode::ReadWrite,
        ChangeMode::OnChange,
        format!("test property {name}"),
    )
    .with_dependencies(deps.iter().copied())
}

// ============================================================================
// 1. Related — category membership and dependency neighborhoods
// ============================================================================

#[test]
fn test_related_by_category_lists_all_members_sorted() {
    let engine = PropertyEngine::new();
    let lights = engine.related("LIGHTS").unwrap();
    assert!(!lights.is_empty());
    assert!(lights.iter().all(|p| p.group == "LIGHTS"));
    assert!(lights.windows(2).all(|w| w[0].name < w[1].name));
}

#[test]
fn test_related_by_name_walks_both_edge_directions() {
    let engine = PropertyEngine::new();
    let related = engine.related("HVAC_AC_ON").unwrap();
    let names: Vec<&str> = related.iter().map(|p| p.name.as_str()).collect();

    // Dependency direction.
    assert!(names.contains(&"HVAC_POWER_ON"));
    assert!(names.contains(&"HVAC_FAN_SPEED"));
    // Dependent direction.
    assert!(names.contains(&"HVAC_MAX_AC_ON"));
    // Never the property itself.
    assert!(!names.contains(&"HVAC_AC_ON"));
}

#[test]
fn test_related_unknown_name_fails() {
    let engine = PropertyEngine::new();
    assert!(matches!(
        engine.related("NOT_A_THING"),
        Err(Error::UnknownProperty(_))
    ));
}

// ============================================================================
// 2. Implementation order — dependencies first, always
// ============================================================================

#[test]
fn test_pair_is_reordered_dependency_first() {
    let catalog =
        PropertyCatalog::from_properties(vec![prop_node("A", 1, &["B"]), prop_node("B", 2, &[])])
            .unwrap();
    let engine = PropertyEngine::from_catalog(catalog);
    let order: Vec<String> = engine
        .implementation_order(["A", "B"])
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(order, vec!["B", "A"]);
}

#[test]
fn test_transitive_dependencies_are_included() {
    let engine = PropertyEngine::new();
    let order: Vec<String> = engine
        .implementation_order(["HVAC_MAX_AC_ON"])
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(
        order,
        vec!["HVAC_POWER_ON", "HVAC_FAN_SPEED", "HVAC_AC_ON", "HVAC_MAX_AC_ON"]
    );
}

#[test]
fn test_cycle_reports_every_member() {
    let catalog = PropertyCatalog::from_properties(vec![
        prop_node("A", 1, &["B"]),
        prop_node("B", 2, &["C"]),
        prop_node("C", 3, &["A"]),
    ])
    .unwrap();
    let engine = PropertyEngine::from_catalog(catalog);
    match engine.implementation_order(["A"]) {
        Err(Error::CyclicDependency { cycle }) => {
            let mut sorted = cycle;
            sorted.sort();
            assert_eq!(sorted, vec!["A", "B", "C"]);
        }
        other => panic!("expected CyclicDependency, got {other:?}"),
    }
}

// ============================================================================
// 3. Determinism — same inputs, same order, regardless of request order
// ============================================================================

proptest! {
    #[test]
    fn test_order_is_invariant_under_request_permutation(
        subset in proptest::sample::subsequence(
            vec![
                "HVAC_MAX_AC_ON",
                "HVAC_AUTO_ON",
                "SEAT_MEMORY_SET",
                "DOOR_MOVE",
                "HIGH_BEAM_LIGHTS_SWITCH",
                "WINDOW_MOVE",
            ],
            1..=6,
        ),
        seed in any::<u64>(),
    ) {
        let engine = PropertyEngine::new();
        let forward: Vec<String> = engine
            .implementation_order(subset.iter().copied())
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();

        // A cheap deterministic shuffle of the request order.
        let mut shuffled = subset.clone();
        let len = shuffled.len();
        for i in 0..len {
            let j = (seed as usize).wrapping_mul(31).wrapping_add(i) % len;
            shuffled.swap(i, j);
        }
        let reordered: Vec<String> = engine
            .implementation_order(shuffled.iter().copied())
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();

        prop_assert_eq!(&forward, &reordered);

        // And the order is a valid topological order.
        for (i, name) in forward.iter().enumerate() {
            for dep in engine.dependencies_of(name).unwrap() {
                let dep_pos = forward.iter().position(|n| *n == dep);
                prop_assert!(matches!(dep_pos, Some(p) if p < i));
            }
        }
    }
}
