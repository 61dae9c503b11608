//! Outcome of matching a proposed property against the catalog.

use serde::{Deserialize, Serialize};

use super::Property;

/// The match engine's verdict on a proposed property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The normalized name equals a catalog entry's name.
    ExactMatch,
    /// At least one catalog entry scored above zero.
    SimilarFound,
    /// Nothing in the catalog overlaps the proposal's tokens.
    NoMatch,
}

/// A catalog entry paired with its similarity score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub property: Property,
    pub score: f64,
}

/// Result of one `lookup_or_match` call. Created fresh per request,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub verdict: Verdict,
    /// In `[0, 1]`. 1.0 for exact matches, the top candidate score for
    /// similar matches, 0.0 when nothing matched.
    pub confidence: f64,
    /// Present iff `verdict == ExactMatch`.
    pub matched: Option<Property>,
    /// Present iff `verdict == SimilarFound`: descending score, ties broken
    /// by ascending canonical name, at most the policy's candidate cap.
    pub candidates: Vec<ScoredCandidate>,
    /// Human-readable guidance for the caller (reuse vs. create).
    pub recommendation: String,
}

impl MatchResult {
    pub fn is_exact(&self) -> bool {
        self.verdict == Verdict::ExactMatch
    }

    /// Best-scoring candidate, if any survived the cut.
    pub fn top_candidate(&self) -> Option<&ScoredCandidate> {
        self.candidates.first()
    }
}
