// Re-export key components
pub use crate::error::Error;
pub use crate::geo::{haversine_distance, initial_bearing, point_to_segment_distance};
pub use crate::loading::{DirectionsResponse, routes_from_json, routes_from_response};
pub use crate::model::{RouteCandidate, Step};
pub use crate::safety::{
    ActivityLevel, Construction, CrimeLevel, Lighting, SafetyAssessor, SafetyFactors,
    SafetyProfile, safety_score,
};
pub use crate::selection::RouteSelector;
pub use crate::tracking::{
    HeadingFilter, NavigationSession, ProgressEvent, ProgressTracker, SessionState, SpeechSink,
    TrackerConfig, strip_markup,
};

// Tunable thresholds
pub use crate::{ADVANCE_DISTANCE_METERS, HEADING_TOLERANCE_DEGREES, MOVEMENT_GATE_METERS};
pub use crate::StepIndex;
