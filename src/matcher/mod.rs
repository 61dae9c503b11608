//! Match engine — decides reuse vs. create for a proposed property.
//!
//! Exact name matches short-circuit with full confidence. Everything else is
//! scored against the whole catalog with token-set Jaccard similarity over
//! the name and the description. The engine only recommends; it never
//! creates anything.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::PropertyCatalog;
use crate::model::{
    canonical_name, AccessMode, ChangeMode, MatchResult, Property, PropertyType,
    ScoredCandidate, Verdict,
};

/// Similarity scoring constants.
///
/// These are policy, not physics: the weights and threshold were chosen to
/// favor name overlap over description overlap and to demand strong overlap
/// before steering a caller toward reuse. Override via
/// [`MatchEngine::with_policy`] rather than editing call sites.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    /// Weight of the name-token Jaccard component.
    pub name_weight: f64,
    /// Weight of the description-token Jaccard component.
    pub description_weight: f64,
    /// Top score at or above which the recommendation leans toward reuse.
    pub similar_threshold: f64,
    /// Maximum number of candidates kept in a result.
    pub max_candidates: usize,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            name_weight: 0.6,
            description_weight: 0.4,
            similar_threshold: 0.7,
            max_candidates: 5,
        }
    }
}

/// Caller-supplied shape of the proposed property. Never a scoring input —
/// naming conventions already embed the category as a prefix token — but it
/// parameterizes the create-path recommendation and vendor scaffolding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProposedMetadata {
    pub property_type: PropertyType,
    pub access: AccessMode,
    pub change_mode: ChangeMode,
}

impl Default for ProposedMetadata {
    fn default() -> Self {
        Self {
            property_type: PropertyType::Int32,
            access: AccessMode::ReadWrite,
            change_mode: ChangeMode::OnChange,
        }
    }
}

/// Lowercase word set of a text: split on non-alphanumeric boundaries,
/// empty tokens discarded.
pub fn tokenize(text: &str) -> BTreeSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_ascii_lowercase())
        .collect()
}

/// `|A∩B| / |A∪B|`, defined as 0 when both sets are empty.
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// Scores proposed properties against a catalog snapshot.
pub struct MatchEngine {
    catalog: Arc<PropertyCatalog>,
    policy: ScoringPolicy,
}

impl MatchEngine {
    pub fn new(catalog: Arc<PropertyCatalog>) -> Self {
        Self { catalog, policy: ScoringPolicy::default() }
    }

    pub fn with_policy(catalog: Arc<PropertyCatalog>, policy: ScoringPolicy) -> Self {
        Self { catalog, policy }
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Match a proposed property against the catalog.
    pub fn validate(
        &self,
        candidate_name: &str,
        candidate_description: &str,
        metadata: &ProposedMetadata,
    ) -> MatchResult {
        let name = canonical_name(candidate_name);

        // Exact match wins outright; no scoring.
        if let Some(existing) = self.catalog.get(&name) {
            tracing::debug!(%name, "exact catalog match");
            return MatchResult {
                verdict: Verdict::ExactMatch,
                confidence: 1.0,
                matched: Some(existing.clone()),
                candidates: Vec::new(),
                recommendation: recommend_existing(existing),
            };
        }

        let name_tokens = tokenize(&name);
        let desc_tokens = tokenize(candidate_description);

        let mut candidates: Vec<ScoredCandidate> = self
            .catalog
            .all()
            .filter_map(|entry| {
                let score = self.score(entry, &name_tokens, &desc_tokens);
                (score > 0.0).then(|| ScoredCandidate { property: entry.clone(), score })
            })
            .collect();
        candidates.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.property.name.cmp(&b.property.name))
        });
        candidates.truncate(self.policy.max_candidates);

        let Some(top) = candidates.first() else {
            tracing::debug!(%name, "no catalog overlap");
            return MatchResult {
                verdict: Verdict::NoMatch,
                confidence: 0.0,
                matched: None,
                candidates: Vec::new(),
                recommendation: recommend_create(&name, metadata),
            };
        };

        let confidence = top.score;
        let recommendation = if confidence >= self.policy.similar_threshold {
            recommend_evaluate(&top.property, &name)
        } else {
            recommend_create_weak_overlap(&top.property, &name, metadata)
        };
        tracing::debug!(%name, confidence, candidates = candidates.len(), "similar properties found");
        MatchResult {
            verdict: Verdict::SimilarFound,
            confidence,
            matched: None,
            candidates,
            recommendation,
        }
    }

    fn score(
        &self,
        entry: &Property,
        name_tokens: &BTreeSet<String>,
        desc_tokens: &BTreeSet<String>,
    ) -> f64 {
        let entry_name_tokens = tokenize(&entry.name);
        let entry_desc_tokens = tokenize(&entry.description);
        self.policy.name_weight * jaccard(name_tokens, &entry_name_tokens)
            + self.policy.description_weight * jaccard(desc_tokens, &entry_desc_tokens)
    }
}

fn recommend_existing(existing: &Property) -> String {
    format!(
        "RECOMMENDATION: use the existing property `{name}` ({id}, {group}).\n\
         It is already part of the platform release; reusing it keeps your \
         implementation compatible and avoids a redundant vendor property.\n\
         Next: review its configuration ({ty}, {access}, {change_mode}) and \
         integrate it into your HAL.",
        name = existing.name,
        id = existing.id,
        group = existing.group,
        ty = existing.property_type,
        access = existing.access,
        change_mode = existing.change_mode,
    )
}

fn recommend_evaluate(top: &Property, requested: &str) -> String {
    format!(
        "RECOMMENDATION: evaluate similar existing properties before creating \
         `{requested}`.\n\
         `{name}` ({id}, {group}) closely matches your proposal and may fulfill \
         it with minor adjustments. If it fits, reuse it; only if it does not, \
         proceed with a vendor property and document why.",
        name = top.name,
        id = top.id,
        group = top.group,
    )
}

fn recommend_create_weak_overlap(
    top: &Property,
    requested: &str,
    metadata: &ProposedMetadata,
) -> String {
    format!(
        "RECOMMENDATION: create a vendor property.\n\
         The closest existing property `{name}` overlaps only weakly with \
         `{requested}`; reuse is unlikely to fit. Proceed with \
         `VENDOR_{requested}` ({ty}, {access}, {change_mode}) in the reserved \
         vendor range.",
        name = top.name,
        ty = metadata.property_type,
        access = metadata.access,
        change_mode = metadata.change_mode,
    )
}

fn recommend_create(requested: &str, metadata: &ProposedMetadata) -> String {
    format!(
        "RECOMMENDATION: create a vendor property.\n\
         No existing platform property overlaps `{requested}`. Proceed with \
         `VENDOR_{requested}` ({ty}, {access}, {change_mode}): allocate an \
         identifier in the reserved vendor range and generate the \
         implementation artifacts.",
        ty = metadata.property_type,
        access = metadata.access,
        change_mode = metadata.change_mode,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> MatchEngine {
        MatchEngine::new(Arc::new(PropertyCatalog::builtin()))
    }

    #[test]
    fn test_tokenize_splits_and_lowercases() {
        let tokens = tokenize("HVAC_FAN-SPEED  (rpm)");
        let expected: BTreeSet<String> =
            ["hvac", "fan", "speed", "rpm"].iter().map(|s| s.to_string()).collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_jaccard_of_empty_sets_is_zero() {
        assert_eq!(jaccard(&BTreeSet::new(), &BTreeSet::new()), 0.0);
    }

    #[test]
    fn test_identical_token_sets_score_one() {
        let a = tokenize("seat heater level");
        let b = tokenize("LEVEL_HEATER_SEAT");
        assert_eq!(jaccard(&a, &b), 1.0);
    }

    #[test]
    fn test_exact_match_ignores_description() {
        let meta = ProposedMetadata::default();
        let result = engine().validate(" hvac_fan_speed ", "totally unrelated words", &meta);
        assert_eq!(result.verdict, Verdict::ExactMatch);
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.matched.unwrap().name, "HVAC_FAN_SPEED");
        assert!(result.candidates.is_empty());
    }

    #[test]
    fn test_similar_found_ranks_fan_speed_first() {
        let meta = ProposedMetadata::default();
        let result = engine().validate(
            "HVAC_COOLING_SPEED",
            "control cooling fan speed for the hvac climate control system",
            &meta,
        );
        assert_eq!(result.verdict, Verdict::SimilarFound);
        assert_eq!(result.top_candidate().unwrap().property.name, "HVAC_FAN_SPEED");
        assert!(result.matched.is_none());
    }

    #[test]
    fn test_candidates_are_capped_and_ordered() {
        let meta = ProposedMetadata::default();
        let result = engine().validate("SEAT_POSITION_CONTROL", "seat position", &meta);
        assert!(result.candidates.len() <= ScoringPolicy::default().max_candidates);
        for pair in result.candidates.windows(2) {
            assert!(
                pair[0].score > pair[1].score
                    || (pair[0].score == pair[1].score
                        && pair[0].property.name < pair[1].property.name)
            );
        }
    }

    #[test]
    fn test_no_match_for_disjoint_tokens() {
        let meta = ProposedMetadata::default();
        let result = engine().validate("QUANTUM_FLUX_CAPACITOR", "", &meta);
        assert_eq!(result.verdict, Verdict::NoMatch);
        assert_eq!(result.confidence, 0.0);
        assert!(result.recommendation.contains("VENDOR_QUANTUM_FLUX_CAPACITOR"));
    }

    #[test]
    fn test_empty_description_scores_on_name_alone() {
        let meta = ProposedMetadata::default();
        let with_desc = engine().validate("HVAC_FAN_BOOST", "", &meta);
        assert_eq!(with_desc.verdict, Verdict::SimilarFound);
        let top = with_desc.top_candidate().unwrap();
        // Only the 0.6-weighted name component can contribute.
        assert!(top.score <= 0.6 + f64::EPSILON);
    }

    #[test]
    fn test_threshold_steers_recommendation() {
        let catalog = Arc::new(PropertyCatalog::builtin());
        let strict = MatchEngine::with_policy(
            catalog,
            ScoringPolicy { similar_threshold: 0.05, ..ScoringPolicy::default() },
        );
        let meta = ProposedMetadata::default();
        let result = strict.validate("HVAC_FAN_BOOST", "fan speed", &meta);
        assert_eq!(result.verdict, Verdict::SimilarFound);
        assert!(result.recommendation.contains("evaluate similar existing properties"));
    }
}
