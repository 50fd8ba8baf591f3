//! Backend seam between the tracking form and whatever performs the tracking
//!
//! The form only ever talks to a [`Backend`]. [`LocalBackend`] answers the
//! calls in-process against the shared [`AppState`](crate::state::AppState).

pub mod local;

use async_trait::async_trait;

use crate::error::TrackerError;

pub use local::LocalBackend;

/// Operations the tracking form delegates to the backend
#[async_trait]
pub trait Backend: Send + Sync {
    /// Record the active task name
    async fn set_task_name(&self, task: &str) -> Result<(), TrackerError>;

    /// Begin a tracking session
    async fn start_tracking(&self) -> Result<(), TrackerError>;

    /// End the tracking session
    async fn stop_tracking(&self) -> Result<(), TrackerError>;

    /// Whether the backend currently has a session open
    async fn is_tracking(&self) -> Result<bool, TrackerError>;
}
