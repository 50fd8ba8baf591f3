//! State management module
//!
//! This module contains the tracker state, the session resource it owns and
//! the input events recorded into that session.

pub mod app_state;
pub mod event;
pub mod session;
pub mod status;

// Re-export main types
pub use app_state::{AppState, TrackerState};
pub use event::{InputEvent, MouseButton, RecordedEvent};
pub use session::{SessionSummary, TrackingSession};
pub use status::TrackingStatus;
