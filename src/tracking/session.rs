use geo::Point;

use crate::StepIndex;
use crate::model::RouteCandidate;

/// Observable state of a navigation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Navigating toward the endpoint of the given step.
    Active(StepIndex),
    /// The final step was completed; no further events will be emitted.
    Arrived,
    /// The session was stopped; all further updates are ignored.
    Stopped,
}

/// One active navigation over a committed route.
///
/// The session is created at commit time and mutated exclusively by the
/// [`super::ProgressTracker`] under its lock. `current_step` is monotone
/// non-decreasing; `current_step == route.len()` means arrival.
#[derive(Debug)]
pub struct NavigationSession {
    pub(crate) route: RouteCandidate,
    pub(crate) current_step: StepIndex,
    pub(crate) last_position: Option<Point<f64>>,
    pub(crate) heading_deg: f64,
    pub(crate) voice_enabled: bool,
    pub(crate) stopped: bool,
}

impl NavigationSession {
    pub(crate) fn new(route: RouteCandidate, voice_enabled: bool) -> Self {
        Self {
            route,
            current_step: 0,
            last_position: None,
            heading_deg: 0.0,
            voice_enabled,
            stopped: false,
        }
    }

    pub(crate) fn state(&self) -> SessionState {
        if self.stopped {
            SessionState::Stopped
        } else if self.current_step >= self.route.len() {
            SessionState::Arrived
        } else {
            SessionState::Active(self.current_step)
        }
    }
}
