//! Track Event - A task tracking form over a session-owning backend
//!
//! This library provides the tracking form state machine, the backend seam it
//! calls through, and the backend itself: a tracking session that records
//! timestamped input events, served in-process or over HTTP.

pub mod config;
pub mod error;
pub mod state;
pub mod backend;
pub mod form;
pub mod api;
pub mod services;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::TrackerError;
pub use state::AppState;
pub use backend::{Backend, LocalBackend};
pub use form::{FormEvent, Phase, TrackingForm, View};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
