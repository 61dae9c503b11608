//! End-to-end tests for the reuse-vs-create decision flow.
//!
//! Each test exercises the full path: canonicalize -> catalog lookup ->
//! similarity scoring -> verdict and recommendation.

use pretty_assertions::assert_eq;
use vhal_props::matcher::{ProposedMetadata, ScoringPolicy};
use vhal_props::model::{PropertyId, Verdict};
use vhal_props::PropertyEngine;

// ============================================================================
// 1. Exact match — the property already exists
// ============================================================================

#[test]
fn test_exact_match_returns_the_platform_property() {
    let engine = PropertyEngine::new();
    let result = engine.lookup_or_match(
        "HVAC_FAN_SPEED",
        "control the fan speed of the climate system",
        &ProposedMetadata::default(),
    );

    assert_eq!(result.verdict, Verdict::ExactMatch);
    assert_eq!(result.confidence, 1.0);
    let matched = result.matched.expect("exact match carries the property");
    assert_eq!(matched.name, "HVAC_FAN_SPEED");
    assert_eq!(matched.id, PropertyId(0x1540_0300));
    assert!(result.recommendation.contains("HVAC_FAN_SPEED"));
    assert!(result.recommendation.contains("existing"));
}

#[test]
fn test_exact_match_is_case_and_whitespace_insensitive() {
    let engine = PropertyEngine::new();
    let result =
        engine.lookup_or_match("  hvac_fan_speed\n", "", &ProposedMetadata::default());
    assert!(result.is_exact());
}

// ============================================================================
// 2. Similar found — a near-duplicate exists
// ============================================================================

#[test]
fn test_cooling_speed_proposal_surfaces_fan_speed() {
    let engine = PropertyEngine::new();
    let result = engine.lookup_or_match(
        "HVAC_COOLING_SPEED",
        "control cooling fan speed for the hvac climate control system",
        &ProposedMetadata::default(),
    );

    assert_eq!(result.verdict, Verdict::SimilarFound);
    assert!(result.matched.is_none());
    let top = result.top_candidate().expect("at least one candidate");
    assert_eq!(top.property.name, "HVAC_FAN_SPEED");
    assert!(top.score > 0.0);
    assert_eq!(result.confidence, top.score);
}

#[test]
fn test_candidates_are_ranked_and_capped() {
    let engine = PropertyEngine::new();
    let result = engine.lookup_or_match(
        "SEAT_POSITION_MEMORY",
        "store and recall seat positions",
        &ProposedMetadata::default(),
    );

    assert_eq!(result.verdict, Verdict::SimilarFound);
    assert!(result.candidates.len() <= ScoringPolicy::default().max_candidates);
    for pair in result.candidates.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

// ============================================================================
// 3. No match — genuinely new functionality
// ============================================================================

#[test]
fn test_novel_proposal_recommends_a_vendor_property() {
    let engine = PropertyEngine::new();
    let result = engine.lookup_or_match(
        "QUANTUM_FLUX_CAPACITOR",
        "",
        &ProposedMetadata::default(),
    );

    assert_eq!(result.verdict, Verdict::NoMatch);
    assert_eq!(result.confidence, 0.0);
    assert!(result.candidates.is_empty());
    assert!(result
        .recommendation
        .contains("VENDOR_QUANTUM_FLUX_CAPACITOR"));
}

// ============================================================================
// 4. Policy — thresholds steer the recommendation, not the verdict
// ============================================================================

#[test]
fn test_custom_policy_changes_recommendation_wording() {
    use vhal_props::catalog::PropertyCatalog;

    let lenient = PropertyEngine::with_policy(
        PropertyCatalog::builtin(),
        ScoringPolicy {
            similar_threshold: 0.05,
            ..ScoringPolicy::default()
        },
    );
    let result = lenient.lookup_or_match(
        "HVAC_FAN_BOOST",
        "fan speed boost",
        &ProposedMetadata::default(),
    );
    assert_eq!(result.verdict, Verdict::SimilarFound);
    assert!(result.recommendation.contains("evaluate similar existing properties"));

    let strict = PropertyEngine::new();
    let result = strict.lookup_or_match(
        "HVAC_FAN_BOOST",
        "fan speed boost",
        &ProposedMetadata::default(),
    );
    // Same verdict, but below the default 0.7 threshold the recommendation
    // leans toward creating a vendor property.
    assert_eq!(result.verdict, Verdict::SimilarFound);
    assert!(result.recommendation.contains("create a vendor property"));
}
