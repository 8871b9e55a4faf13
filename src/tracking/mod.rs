//! Active navigation: progress tracking and heading filtering
//!
//! A [`ProgressTracker`] owns one navigation session and consumes the two
//! sensor streams — position fixes and raw magnetometer samples — that the
//! surrounding application delivers on their own cadences. All session
//! mutation happens under a single lock; speech is dispatched outside it.

mod heading;
mod instruction;
mod session;
mod tracker;

pub use heading::{DEFAULT_DEBOUNCE_WINDOW, HeadingFilter};
pub use instruction::strip_markup;
pub use session::{NavigationSession, SessionState};
pub use tracker::{ProgressEvent, ProgressTracker, SpeechSink, TrackerConfig};
