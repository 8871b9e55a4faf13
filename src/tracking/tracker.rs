use std::sync::{Arc, Mutex};
use std::time::Duration;

use geo::Point;
use itertools::Itertools;
use log::{debug, trace};

use super::heading::HeadingFilter;
use super::instruction::strip_markup;
use super::session::{NavigationSession, SessionState};
use crate::geo::{angular_difference, haversine_distance, initial_bearing, point_to_segment_distance};
use crate::model::RouteCandidate;
use crate::{
    ADVANCE_DISTANCE_METERS, HEADING_TOLERANCE_DEGREES, MOVEMENT_GATE_METERS, StepIndex,
};

/// Sink for spoken instructions.
///
/// Called fire-and-forget outside the tracker's lock; implementations must
/// not assume the tracker waits for synthesis to finish.
pub trait SpeechSink: Send + Sync {
    fn speak(&self, text: &str);
}

/// Tunable thresholds for progress tracking.
#[derive(Debug, Clone, Copy)]
pub struct TrackerConfig {
    /// Displacement below which a fix is stationary noise.
    pub movement_gate_m: f64,
    /// Perpendicular distance below which the traveler is on a segment.
    pub advance_distance_m: f64,
    /// Maximum bearing deviation for the heading-correctness trigger.
    pub heading_tolerance_deg: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            movement_gate_m: MOVEMENT_GATE_METERS,
            advance_distance_m: ADVANCE_DISTANCE_METERS,
            heading_tolerance_deg: HEADING_TOLERANCE_DEGREES,
        }
    }
}

/// Outcome of one position update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// The sample was discarded (stationary, malformed, stopped or already
    /// arrived) or produced no advance. State is unchanged except possibly
    /// `last_position`.
    Ignored,
    /// The session advanced to a new step.
    Advanced {
        step_index: StepIndex,
        /// Stripped instruction text for the new step.
        instruction: String,
    },
    /// The final step was completed.
    Arrived,
}

struct Inner {
    session: NavigationSession,
    heading_filter: HeadingFilter,
}

/// The state machine advancing a traveler along a committed route.
///
/// Position and heading samples may arrive from independent execution
/// contexts; both are serialized through one lock so `current_step`
/// advancement and `last_position` updates never interleave with stale
/// reads. The lock is held only for the in-memory transition — speech is
/// dispatched after release.
pub struct ProgressTracker {
    inner: Mutex<Inner>,
    config: TrackerConfig,
    speech: Arc<dyn SpeechSink>,
}

impl ProgressTracker {
    pub fn new(
        route: RouteCandidate,
        config: TrackerConfig,
        heading_filter: HeadingFilter,
        speech: Arc<dyn SpeechSink>,
        voice_enabled: bool,
    ) -> Self {
        Self {
            inner: Mutex::new(Inner {
                session: NavigationSession::new(route, voice_enabled),
                heading_filter,
            }),
            config,
            speech,
        }
    }

    /// Consume one raw position fix.
    ///
    /// Applies the movement gate, scans the remaining route segments for the
    /// closest one, and advances the session when the fix is either near
    /// enough to that segment or heading-correct along it. A malformed
    /// sample is discarded with the state unchanged — a corrupt reading must
    /// never stall the machine for the samples after it.
    pub fn on_position_update(&self, raw: Point<f64>) -> ProgressEvent {
        let (event, speak) = {
            let mut inner = self.inner.lock().expect("tracker lock poisoned");
            let session = &mut inner.session;

            if session.stopped || session.state() == SessionState::Arrived {
                return ProgressEvent::Ignored;
            }

            if !raw.x().is_finite() || !raw.y().is_finite() {
                trace!("Discarding non-finite position sample");
                return ProgressEvent::Ignored;
            }

            // Movement gate: suppress stationary GPS noise.
            if let Some(last) = session.last_position {
                if haversine_distance(last, raw) <= self.config.movement_gate_m {
                    return ProgressEvent::Ignored;
                }
            }
            session.last_position = Some(raw);

            let event = self.evaluate_progress(session, raw);

            let speak = match &event {
                ProgressEvent::Advanced { instruction, .. } if session.voice_enabled => {
                    Some(instruction.clone())
                }
                _ => None,
            };
            (event, speak)
        };

        // Fire-and-forget, outside the lock: the sink may be slow and the
        // sensor callbacks must return promptly.
        if let Some(text) = speak {
            self.speech.speak(&text);
        }

        event
    }

    /// Walk the remaining segments and advance the session if warranted.
    fn evaluate_progress(&self, session: &mut NavigationSession, raw: Point<f64>) -> ProgressEvent {
        let steps = session.route.steps();
        let len = steps.len();

        // On the final step there are no segments left to scan; the session
        // arrives once the fix is within the advance radius of the
        // destination.
        if session.current_step >= len - 1 {
            let destination = session.route.final_endpoint();
            if haversine_distance(raw, destination) < self.config.advance_distance_m {
                session.current_step = len;
                debug!("Arrived at destination");
                return ProgressEvent::Arrived;
            }
            return ProgressEvent::Ignored;
        }

        // Closest remaining segment to the fix.
        let current = session.current_step;
        let (closest_idx, min_distance) = steps[current..]
            .iter()
            .tuple_windows()
            .enumerate()
            .map(|(offset, (a, b))| {
                (
                    current + offset,
                    point_to_segment_distance(raw, a.endpoint, b.endpoint),
                )
            })
            .min_by(|(_, d1), (_, d2)| d1.total_cmp(d2))
            .expect("at least one segment below the final step");

        // Heading correctness on the closest segment: the traveler's bearing
        // toward the segment's end roughly matches the segment's own bearing.
        let seg_bearing = initial_bearing(steps[closest_idx].endpoint, steps[closest_idx + 1].endpoint);
        let traveler_bearing = initial_bearing(raw, steps[closest_idx + 1].endpoint);
        let heading_correct =
            angular_difference(seg_bearing, traveler_bearing) <= self.config.heading_tolerance_deg;

        // Proximity alone misses advances on tight curves; heading alone
        // false-advances while stationary. Either suffices.
        if min_distance < self.config.advance_distance_m || heading_correct {
            let new_step = (closest_idx + 1).min(len);
            if new_step > session.current_step {
                session.current_step = new_step;
                let instruction = strip_markup(&steps[new_step].instruction);
                debug!(
                    "Advanced to step {new_step} (distance {min_distance:.1} m, heading_correct: {heading_correct})"
                );
                return ProgressEvent::Advanced {
                    step_index: new_step,
                    instruction,
                };
            }
        }

        trace!(
            "No advance: closest segment {closest_idx} at {min_distance:.1} m, heading_correct: {heading_correct}"
        );
        ProgressEvent::Ignored
    }

    /// Consume one raw magnetometer sample taken at `now`.
    ///
    /// Feeds the heading filter and, when it emits, updates the session's
    /// display heading. Never advances steps.
    pub fn on_heading_update(&self, x: f64, y: f64, now: Duration) -> Option<f64> {
        let mut inner = self.inner.lock().expect("tracker lock poisoned");
        if inner.session.stopped {
            return None;
        }

        let emitted = inner.heading_filter.update(x, y, now);
        if let Some(heading) = emitted {
            inner.session.heading_deg = heading;
        }
        emitted
    }

    /// Stop the session. Idempotent and safe to call at any time; every
    /// update after this is a silent no-op.
    pub fn stop(&self) {
        let mut inner = self.inner.lock().expect("tracker lock poisoned");
        inner.session.stopped = true;
    }

    pub fn state(&self) -> SessionState {
        self.inner.lock().expect("tracker lock poisoned").session.state()
    }

    pub fn current_step(&self) -> StepIndex {
        self.inner
            .lock()
            .expect("tracker lock poisoned")
            .session
            .current_step
    }

    pub fn heading(&self) -> f64 {
        self.inner
            .lock()
            .expect("tracker lock poisoned")
            .session
            .heading_deg
    }

    pub fn last_position(&self) -> Option<Point<f64>> {
        self.inner
            .lock()
            .expect("tracker lock poisoned")
            .session
            .last_position
    }

    pub fn is_stopped(&self) -> bool {
        self.inner.lock().expect("tracker lock poisoned").session.stopped
    }

    pub fn set_voice_enabled(&self, enabled: bool) {
        self.inner
            .lock()
            .expect("tracker lock poisoned")
            .session
            .voice_enabled = enabled;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex as StdMutex;

    use super::*;
    use crate::model::Step;

    /// Sink that records everything it was asked to speak.
    struct RecordingSink {
        spoken: StdMutex<Vec<String>>,
    }

    impl RecordingSink {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                spoken: StdMutex::new(Vec::new()),
            })
        }

        fn spoken(&self) -> Vec<String> {
            self.spoken.lock().unwrap().clone()
        }
    }

    impl SpeechSink for RecordingSink {
        fn speak(&self, text: &str) {
            self.spoken.lock().unwrap().push(text.to_string());
        }
    }

    fn step(lng: f64, lat: f64, text: &str) -> Step {
        Step {
            endpoint: Point::new(lng, lat),
            instruction: text.to_string(),
            distance_m: 100.0,
            duration_s: 80.0,
        }
    }

    /// Two-step route heading roughly north along a street.
    fn two_step_route() -> RouteCandidate {
        RouteCandidate::new(
            vec![
                step(-97.7420, 30.2850, "Head <b>north</b>"),
                step(-97.7420, 30.2870, "Turn <b>right</b> onto 24th St"),
            ],
            "Nueces St",
        )
        .unwrap()
    }

    fn tracker(route: RouteCandidate, sink: Arc<RecordingSink>) -> ProgressTracker {
        ProgressTracker::new(
            route,
            TrackerConfig::default(),
            HeadingFilter::new(Duration::from_millis(500)),
            sink,
            true,
        )
    }

    #[test]
    fn fix_at_next_endpoint_advances_and_speaks_once() {
        let sink = RecordingSink::new();
        let t = tracker(two_step_route(), sink.clone());

        let event = t.on_position_update(Point::new(-97.7420, 30.2870));
        assert_eq!(
            event,
            ProgressEvent::Advanced {
                step_index: 1,
                instruction: "Turn right onto 24th St".to_string(),
            }
        );
        assert_eq!(t.current_step(), 1);
        assert_eq!(sink.spoken(), vec!["Turn right onto 24th St"]);
    }

    #[test]
    fn fix_within_movement_gate_is_a_no_op() {
        let sink = RecordingSink::new();
        let t = tracker(two_step_route(), sink.clone());

        let start = Point::new(-97.7420, 30.2850);
        t.on_position_update(start);
        let step_after_first = t.current_step();

        // ~1 m east of the previous fix: inside the 5 m gate.
        let nearby = Point::new(-97.74199, 30.2850);
        let event = t.on_position_update(nearby);

        assert_eq!(event, ProgressEvent::Ignored);
        assert_eq!(t.current_step(), step_after_first);
        assert_eq!(t.last_position(), Some(start));
    }

    #[test]
    fn malformed_sample_is_skipped_without_state_change() {
        let sink = RecordingSink::new();
        let t = tracker(two_step_route(), sink.clone());

        let event = t.on_position_update(Point::new(f64::NAN, 30.2850));
        assert_eq!(event, ProgressEvent::Ignored);
        assert!(t.last_position().is_none());
        assert!(sink.spoken().is_empty());

        // The machine keeps working once valid samples resume.
        let event = t.on_position_update(Point::new(-97.7420, 30.2870));
        assert!(matches!(event, ProgressEvent::Advanced { .. }));
    }

    #[test]
    fn updates_after_stop_are_silent_no_ops() {
        let sink = RecordingSink::new();
        let t = tracker(two_step_route(), sink.clone());

        t.stop();
        t.stop(); // idempotent

        let event = t.on_position_update(Point::new(-97.7420, 30.2870));
        assert_eq!(event, ProgressEvent::Ignored);
        assert_eq!(t.current_step(), 0);
        assert_eq!(t.state(), SessionState::Stopped);
        assert!(sink.spoken().is_empty());
        assert!(t.on_heading_update(1.0, 0.0, Duration::from_millis(0)).is_none());
    }

    #[test]
    fn arrival_on_final_step_emits_terminal_state() {
        let sink = RecordingSink::new();
        let t = tracker(two_step_route(), sink.clone());

        // Advance onto the final step.
        t.on_position_update(Point::new(-97.7420, 30.2870));
        assert_eq!(t.state(), SessionState::Active(1));

        // Next distinct fix near the destination: arrival, no speak.
        let event = t.on_position_update(Point::new(-97.74195, 30.28705));
        assert_eq!(event, ProgressEvent::Arrived);
        assert_eq!(t.state(), SessionState::Arrived);
        assert_eq!(t.current_step(), 2);
        assert_eq!(sink.spoken().len(), 1);

        // After arrival nothing moves and nothing is spoken.
        let event = t.on_position_update(Point::new(-97.7400, 30.2900));
        assert_eq!(event, ProgressEvent::Ignored);
        assert_eq!(t.current_step(), 2);
        assert_eq!(sink.spoken().len(), 1);
    }

    #[test]
    fn single_step_route_arrives_directly() {
        let sink = RecordingSink::new();
        let route =
            RouteCandidate::new(vec![step(-97.7420, 30.2850, "Arrive")], "").unwrap();
        let t = tracker(route, sink.clone());

        let event = t.on_position_update(Point::new(-97.74201, 30.28501));
        assert_eq!(event, ProgressEvent::Arrived);
        assert_eq!(t.state(), SessionState::Arrived);
        assert!(sink.spoken().is_empty());
    }

    #[test]
    fn voice_disabled_advances_without_speaking() {
        let sink = RecordingSink::new();
        let t = ProgressTracker::new(
            two_step_route(),
            TrackerConfig::default(),
            HeadingFilter::new(Duration::from_millis(500)),
            sink.clone(),
            false,
        );

        let event = t.on_position_update(Point::new(-97.7420, 30.2870));
        assert!(matches!(event, ProgressEvent::Advanced { .. }));
        assert!(sink.spoken().is_empty());
    }

    #[test]
    fn heading_update_never_advances_steps() {
        let sink = RecordingSink::new();
        let t = tracker(two_step_route(), sink);

        let heading = t.on_heading_update(0.0, 1.0, Duration::from_millis(0));
        assert!((heading.unwrap() - 90.0).abs() < 1e-9);
        assert!((t.heading() - 90.0).abs() < 1e-9);
        assert_eq!(t.current_step(), 0);
    }

    #[test]
    fn far_off_route_fix_does_not_advance() {
        let sink = RecordingSink::new();
        let t = tracker(two_step_route(), sink.clone());

        // A kilometer east of the route, bearing nowhere near the segment.
        let event = t.on_position_update(Point::new(-97.7300, 30.2850));
        assert_eq!(event, ProgressEvent::Ignored);
        assert_eq!(t.current_step(), 0);
        assert!(sink.spoken().is_empty());
    }

    #[test]
    fn step_index_is_monotone_under_out_of_order_fixes() {
        let sink = RecordingSink::new();
        let route = RouteCandidate::new(
            vec![
                step(-97.7420, 30.2850, "Head north"),
                step(-97.7420, 30.2870, "Continue north"),
                step(-97.7420, 30.2890, "Continue north"),
                step(-97.7420, 30.2910, "Arrive"),
            ],
            "",
        )
        .unwrap();
        let t = tracker(route, sink);

        // Fixes delivered out of chronological order; the index never drops.
        let fixes = [
            Point::new(-97.7420, 30.2889), // near step 2's segment end
            Point::new(-97.7420, 30.2851), // stale fix from the start
            Point::new(-97.7420, 30.2869), // stale fix mid-route
            Point::new(-97.7420, 30.2909), // near the destination
        ];

        let mut last_step = 0;
        for fix in fixes {
            t.on_position_update(fix);
            let step_now = t.current_step();
            assert!(
                step_now >= last_step,
                "Step index decreased from {last_step} to {step_now}"
            );
            last_step = step_now;
        }
    }
}

