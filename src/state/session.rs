//! Tracking session resource and the summary produced when it ends

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::event::RecordedEvent;

/// An open tracking session. Created by `start_tracking`, consumed by `stop_tracking`.
#[derive(Debug, Clone)]
pub struct TrackingSession {
    pub id: u64,
    pub task: String,
    pub started_at: DateTime<Utc>,
    /// Recorded events; stays empty unless the session retains them for its log
    pub events: Vec<RecordedEvent>,
    retain_events: bool,
    event_count: usize,
}

impl TrackingSession {
    /// Open a new session for `task` starting now. Without `retain_events`
    /// only the number of recorded events is kept.
    pub fn start(id: u64, task: String, retain_events: bool) -> Self {
        Self {
            id,
            task,
            started_at: Utc::now(),
            events: Vec::new(),
            retain_events,
            event_count: 0,
        }
    }

    pub fn record(&mut self, event: RecordedEvent) {
        self.event_count += 1;
        if self.retain_events {
            self.events.push(event);
        }
    }

    pub fn event_count(&self) -> usize {
        self.event_count
    }

    /// File name used when this session is written to a log directory
    pub fn log_file_name(&self) -> String {
        format!("session-{}-{}.csv", self.id, self.started_at.timestamp_millis())
    }

    /// Close the session, producing its summary
    pub fn finish(self, log_path: Option<PathBuf>) -> SessionSummary {
        SessionSummary {
            id: self.id,
            task: self.task,
            started_at: self.started_at,
            stopped_at: Utc::now(),
            event_count: self.event_count,
            log_path,
        }
    }
}

/// Summary of a session that has been stopped
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: u64,
    pub task: String,
    pub started_at: DateTime<Utc>,
    pub stopped_at: DateTime<Utc>,
    pub event_count: usize,
    pub log_path: Option<PathBuf>,
}

impl SessionSummary {
    /// Session length in whole seconds
    pub fn duration_seconds(&self) -> i64 {
        (self.stopped_at - self.started_at).num_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::InputEvent;

    fn moved() -> RecordedEvent {
        RecordedEvent::at(InputEvent::MouseMove { x: 0.0, y: 0.0 }, 1)
    }

    #[test]
    fn counting_session_keeps_no_events() {
        let mut session = TrackingSession::start(1, "Review".to_string(), false);
        session.record(moved());
        session.record(moved());

        assert_eq!(session.event_count(), 2);
        assert!(session.events.is_empty());
        assert_eq!(session.finish(None).event_count, 2);
    }

    #[test]
    fn retaining_session_keeps_events() {
        let mut session = TrackingSession::start(2, "Review".to_string(), true);
        session.record(moved());

        assert_eq!(session.event_count(), 1);
        assert_eq!(session.events, vec![moved()]);
    }
}
