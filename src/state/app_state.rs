//! Main application state management

use std::{
    path::PathBuf,
    sync::{Arc, Mutex, MutexGuard},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::{error::TrackerError, services::write_session_log};
use super::{InputEvent, RecordedEvent, SessionSummary, TrackingSession, TrackingStatus};

/// Task name and session slot, guarded together so start/stop see a consistent pair
#[derive(Debug, Default)]
pub struct TrackerState {
    /// Task name recorded by the last `set_task_name`
    pub task: Option<String>,
    /// The open session, if any
    pub session: Option<TrackingSession>,
    /// Id handed to the next session
    next_session_id: u64,
}

/// Main application state that owns the tracking session
#[derive(Debug)]
pub struct AppState {
    pub tracker: Arc<Mutex<TrackerState>>,
    /// Directory that finished sessions are written to
    pub log_dir: Option<PathBuf>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl AppState {
    /// Create a new AppState with no task and no open session
    pub fn new(port: u16, host: String, log_dir: Option<PathBuf>) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(TrackerState {
                next_session_id: 1,
                ..TrackerState::default()
            })),
            log_dir,
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
        }
    }

    fn lock_tracker(&self) -> Result<MutexGuard<'_, TrackerState>, TrackerError> {
        self.tracker
            .lock()
            .map_err(|e| TrackerError::StateLock(format!("tracker state: {}", e)))
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Record the task name used by the next session
    pub fn set_task_name(&self, task: &str) -> Result<(), TrackerError> {
        if task.trim().is_empty() {
            warn!("Rejected empty task name");
            return Err(TrackerError::EmptyTaskName);
        }

        let mut tracker = self.lock_tracker()?;
        if let Some(session) = &tracker.session {
            info!("Task name changed while session {} is open; applies to the next session", session.id);
        }
        tracker.task = Some(task.to_string());
        drop(tracker);

        info!("Task name set to: {}", task);
        self.record_action("set_task_name");
        Ok(())
    }

    /// Open a session for the recorded task name
    pub fn start_tracking(&self) -> Result<TrackingStatus, TrackerError> {
        let mut tracker = self.lock_tracker()?;

        if let Some(session) = &tracker.session {
            return Err(TrackerError::AlreadyTracking { task: session.task.clone() });
        }
        let task = tracker.task.clone().ok_or(TrackerError::NoTaskName)?;

        let id = tracker.next_session_id;
        tracker.next_session_id += 1;
        // Events are only worth keeping when they will be written out at stop
        tracker.session = Some(TrackingSession::start(id, task.clone(), self.log_dir.is_some()));
        drop(tracker);

        info!("Started tracking session {} for task: {}", id, task);
        self.record_action("start_tracking");
        self.status()
    }

    /// Close the open session, writing its log when a log directory is configured
    pub async fn stop_tracking(&self) -> Result<SessionSummary, TrackerError> {
        let session = self.lock_tracker()?.session.take().ok_or(TrackerError::NotTracking)?;

        let log_path = match &self.log_dir {
            Some(dir) => match write_session_log(dir, &session).await {
                Ok(path) => Some(path),
                Err(e) => {
                    warn!("Session {} ended without a log: {}", session.id, e);
                    None
                }
            },
            None => None,
        };

        let summary = session.finish(log_path);
        info!(
            "Stopped tracking session {} for task: {} ({} events, {}s)",
            summary.id,
            summary.task,
            summary.event_count,
            summary.duration_seconds()
        );
        self.record_action("stop_tracking");
        Ok(summary)
    }

    /// Append an input event to the open session
    pub fn record_event(&self, event: InputEvent) -> Result<usize, TrackerError> {
        let mut tracker = self.lock_tracker()?;
        let session = tracker.session.as_mut().ok_or(TrackerError::NotTracking)?;
        session.record(RecordedEvent::now(event));
        Ok(session.event_count())
    }

    pub fn is_tracking(&self) -> Result<bool, TrackerError> {
        Ok(self.lock_tracker()?.session.is_some())
    }

    /// Get a snapshot of the current tracker state
    pub fn status(&self) -> Result<TrackingStatus, TrackerError> {
        let tracker = self.lock_tracker()?;
        let session = tracker.session.as_ref();
        let (last_action, last_action_time) = self.get_last_action();

        Ok(TrackingStatus {
            tracking: session.is_some(),
            task: tracker.task.clone(),
            session_id: session.map(|s| s.id),
            started_at: session.map(|s| s.started_at),
            event_count: session.map_or(0, |s| s.event_count()),
            last_action,
            last_action_time,
            uptime: self.get_uptime(),
            port: self.port,
            host: self.host.clone(),
        })
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
