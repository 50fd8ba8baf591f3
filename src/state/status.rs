//! Snapshot of the tracker state exposed through `/status`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point-in-time view of the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingStatus {
    /// Whether a session is currently open
    pub tracking: bool,
    /// Task name recorded by the last `set_task_name`
    pub task: Option<String>,
    pub session_id: Option<u64>,
    pub started_at: Option<DateTime<Utc>>,
    /// Events recorded into the open session so far
    pub event_count: usize,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
    pub uptime: String,
    pub port: u16,
    pub host: String,
}
