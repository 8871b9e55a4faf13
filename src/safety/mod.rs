//! Route safety scoring
//!
//! Derives a bounded, deterministic safety rating and descriptive tags for a
//! route from four categorical risk factors. Scoring is a pure function of
//! the factors; *acquiring* the factors for a given route (from real risk
//! data, or a placeholder source during development) is an external
//! collaborator's job behind the [`SafetyAssessor`] trait. Keeping the two
//! apart means a rating attached to a route can never drift between UI
//! refreshes.

mod factors;
mod profile;

pub use factors::{ActivityLevel, Construction, CrimeLevel, Lighting, SafetyFactors};
pub use profile::{SafetyProfile, safety_score};

use crate::model::RouteCandidate;

/// Source of safety factors for a route candidate.
///
/// Implementations inspect the route geometry against whatever risk data
/// they have. The selector calls this exactly once per candidate and caches
/// the result.
pub trait SafetyAssessor {
    fn assess(&self, route: &RouteCandidate) -> SafetyProfile;
}
