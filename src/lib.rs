//! Safestep: pedestrian turn-by-turn navigation engine.
//!
//! The crate covers the algorithmic core of a walking-navigation app:
//! selecting among candidate routes returned by an external directions
//! provider, attaching a stable safety score to each candidate, and driving
//! an active navigation session from noisy position and heading samples.
//!
//! Map rendering, place search and speech synthesis are collaborators of
//! this crate, not part of it: routes come in as provider payloads
//! ([`loading`]), spoken instructions go out as plain strings through a
//! [`tracking::SpeechSink`].

pub mod error;
pub mod geo;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod safety;
pub mod selection;
pub mod tracking;

pub use error::Error;
pub use model::{RouteCandidate, Step};
pub use safety::{SafetyAssessor, SafetyFactors, SafetyProfile};
pub use selection::RouteSelector;
pub use tracking::{HeadingFilter, ProgressEvent, ProgressTracker, SessionState, TrackerConfig};

/// 0-based index into a route's step sequence.
pub type StepIndex = usize;

/// Displacement below which a position fix is treated as stationary GPS
/// noise and discarded.
pub const MOVEMENT_GATE_METERS: f64 = 5.0;

/// Perpendicular distance to a route segment below which the traveler is
/// considered on that segment.
pub const ADVANCE_DISTANCE_METERS: f64 = 20.0;

/// Maximum bearing deviation for the heading-correctness advance trigger.
pub const HEADING_TOLERANCE_DEGREES: f64 = 20.0;
