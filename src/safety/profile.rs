use serde::{Deserialize, Serialize};

use super::factors::SafetyFactors;

/// Maximum possible factor weight sum, used for normalization.
const MAX_WEIGHT_SUM: f64 = 16.0;

/// Derive the safety score for a set of factors.
///
/// The factor weights are summed, normalized against the maximum possible
/// sum and scaled to [0, 5], then rounded to one decimal place. Pure and
/// deterministic: the same factors always yield the same score.
pub fn safety_score(factors: SafetyFactors) -> f64 {
    let raw = f64::from(factors.weight_sum()) / MAX_WEIGHT_SUM * 5.0;
    (raw * 10.0).round() / 10.0
}

/// Categorical risk factors plus the derived rating for one route candidate.
///
/// The score is computed once at construction and cached in the struct —
/// re-reading a profile can never change a rating the user has already seen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyProfile {
    pub factors: SafetyFactors,
    pub score: f64,
    pub review_count: u32,
}

impl SafetyProfile {
    pub fn new(factors: SafetyFactors, review_count: u32) -> Self {
        Self {
            factors,
            score: safety_score(factors),
            review_count,
        }
    }

    /// Descriptive tags for display alongside the score.
    pub fn tags(&self) -> Vec<&'static str> {
        self.factors.tags()
    }
}
