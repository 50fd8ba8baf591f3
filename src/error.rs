//! Error types shared by the tracker backend, the HTTP API and the form

use thiserror::Error;

/// Errors returned by tracker operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    /// `set_task_name` was called with an empty or whitespace-only name
    #[error("task name cannot be empty")]
    EmptyTaskName,

    /// `start_tracking` was called before any task name was recorded
    #[error("no task name has been set")]
    NoTaskName,

    /// `start_tracking` was called while a session is already open
    #[error("already tracking task '{task}'")]
    AlreadyTracking {
        /// Task of the session that is still open
        task: String,
    },

    /// An operation needed an open session and there is none
    #[error("no tracking session is active")]
    NotTracking,

    /// A state mutex was poisoned
    #[error("failed to lock {0}")]
    StateLock(String),

    /// Writing the session log failed
    #[error("failed to write session log: {0}")]
    SessionLog(String),

    /// A request body could not be read as the expected JSON
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A `Backend` implementation failed for a reason of its own,
    /// such as a transport that cannot reach its peer
    #[error("backend call failed: {0}")]
    Backend(String),
}
