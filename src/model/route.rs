use geo::Point;

use crate::Error;

/// One instruction-bearing segment of a route, ending at a waypoint.
#[derive(Debug, Clone)]
pub struct Step {
    /// Coordinate at which this step's instruction is completed.
    pub endpoint: Point<f64>,
    /// Instruction text as delivered by the provider. May contain markup;
    /// strip it with [`crate::tracking::strip_markup`] before display or
    /// speech.
    pub instruction: String,
    /// Length of this step's leg in meters.
    pub distance_m: f64,
    /// Expected walking time for this step in seconds.
    pub duration_s: f64,
}

/// One complete proposed walking route from origin to destination.
///
/// Steps are ordered from origin to destination. The sequence is validated
/// at construction and never reshaped afterwards.
#[derive(Debug, Clone)]
pub struct RouteCandidate {
    steps: Vec<Step>,
    summary: String,
}

impl RouteCandidate {
    /// Build a candidate from an ordered step sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unavailable`] when the sequence is empty, when any
    /// endpoint coordinate is not finite, or when a step carries a negative
    /// leg distance or duration.
    pub fn new(steps: Vec<Step>, summary: impl Into<String>) -> Result<Self, Error> {
        if steps.is_empty() {
            return Err(Error::Unavailable("route has no steps".to_string()));
        }

        for (idx, step) in steps.iter().enumerate() {
            if !step.endpoint.x().is_finite() || !step.endpoint.y().is_finite() {
                return Err(Error::Unavailable(format!(
                    "step {idx} has a non-finite endpoint"
                )));
            }
            if step.distance_m < 0.0 || step.duration_s < 0.0 {
                return Err(Error::Unavailable(format!(
                    "step {idx} has a negative leg distance or duration"
                )));
            }
        }

        Ok(Self {
            steps,
            summary: summary.into(),
        })
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Provider-supplied route summary, usually a street name. May be empty.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Endpoint of the final step — the destination.
    pub fn final_endpoint(&self) -> Point<f64> {
        // Non-empty by construction.
        self.steps[self.steps.len() - 1].endpoint
    }

    /// Total route length in meters, summed over the step legs.
    pub fn total_distance_m(&self) -> f64 {
        self.steps.iter().map(|s| s.distance_m).sum()
    }

    /// Total expected walking time in seconds, summed over the step legs.
    pub fn total_duration_s(&self) -> f64 {
        self.steps.iter().map(|s| s.duration_s).sum()
    }
}
