use std::time::Duration;

use crate::geo::{wrap_180, wrap_360};

/// Default debounce window between emitted heading values.
pub const DEFAULT_DEBOUNCE_WINDOW: Duration = Duration::from_millis(500);

/// Smooths raw magnetometer samples into a stable compass heading.
///
/// Each sample is a raw (x, y) magnetometer vector; the heading is
/// `atan2(y, x)` in degrees with negative angles normalized into [0, 360).
/// Emission is rate-limited: at most one heading per debounce window, with
/// samples inside the window collapsed so the next emission reflects the
/// latest reading. Emitted values pass through an angle-aware exponential
/// moving average that interpolates across the 0/360 seam.
///
/// The debounce window is tunable configuration, not a fixed contract —
/// pass whatever cadence the display layer wants.
pub struct HeadingFilter {
    window: Duration,
    alpha: f64,
    last_emit: Option<Duration>,
    smoothed: Option<f64>,
}

impl HeadingFilter {
    /// Filter with the given debounce window and no smoothing (pass-through).
    pub fn new(window: Duration) -> Self {
        Self::with_smoothing(window, 1.0)
    }

    /// Filter with angle-aware EMA smoothing. `alpha` is clamped to
    /// [0, 1]; lower alpha means more smoothing, 1.0 is pass-through.
    pub fn with_smoothing(window: Duration, alpha: f64) -> Self {
        Self {
            window,
            alpha: alpha.clamp(0.0, 1.0),
            last_emit: None,
            smoothed: None,
        }
    }

    /// Feed one raw magnetometer sample taken at `now` (monotonic time since
    /// an arbitrary epoch).
    ///
    /// Returns the filtered heading when the debounce window has elapsed,
    /// `None` when the sample was collapsed into the current window or was
    /// not finite.
    pub fn update(&mut self, x: f64, y: f64, now: Duration) -> Option<f64> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }

        if let Some(last) = self.last_emit {
            // A clock that jumped backwards counts as inside the window.
            if now.checked_sub(last).is_none_or(|dt| dt < self.window) {
                return None;
            }
        }

        let mut angle = y.atan2(x).to_degrees();
        if angle < 0.0 {
            angle += 360.0;
        }

        let heading = match self.smoothed {
            None => angle,
            Some(prev) => {
                let diff = wrap_180(angle - prev);
                wrap_360(prev + self.alpha * diff)
            }
        };

        self.smoothed = Some(heading);
        self.last_emit = Some(now);
        Some(heading)
    }

    /// Most recently emitted heading, if any.
    pub fn current(&self) -> Option<f64> {
        self.smoothed
    }

    /// Clear all filter state.
    pub fn reset(&mut self) {
        self.last_emit = None;
        self.smoothed = None;
    }
}
