//! # Property Model
//!
//! Clean DTOs for the vHAL property domain. These types cross every
//! boundary: catalog ↔ graph ↔ matcher ↔ generator ↔ caller.
//!
//! Design rule: this module is pure data — no I/O, no state, no locks.

pub mod property;
pub mod match_result;
pub mod artifact;

pub use property::{
    Property, PropertyId, PropertyType, AccessMode, ChangeMode,
    canonical_name,
};
pub use match_result::{MatchResult, Verdict, ScoredCandidate};
pub use artifact::{Artifact, GeneratedArtifactSet};
