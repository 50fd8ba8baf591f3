//! Tracking form: collects a task name and drives the backend session
//!
//! The form holds two pieces of state, the raw task name and the tracking
//! phase. The phase only changes after the backend confirms an operation.

pub mod view;

use tracing::{debug, error, info, warn};

use crate::backend::Backend;
pub use view::View;

/// Which of the two layouts the form shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Tracking,
}

/// User interactions the form reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The input field changed to this value
    Input(String),
    /// The submit button was activated
    Submit,
    /// The stop button was activated
    Stop,
}

/// The tracking form bound to a backend
#[derive(Debug)]
pub struct TrackingForm<B> {
    backend: B,
    task_name: String,
    phase: Phase,
}

impl<B: Backend> TrackingForm<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            task_name: String::new(),
            phase: Phase::Idle,
        }
    }

    pub fn task_name(&self) -> &str {
        &self.task_name
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_tracking(&self) -> bool {
        self.phase == Phase::Tracking
    }

    /// Render the current state
    pub fn view(&self) -> View {
        match self.phase {
            Phase::Idle => View::entry(&self.task_name),
            Phase::Tracking => View::tracking(&self.task_name),
        }
    }

    /// Dispatch a user interaction and return the phase afterwards
    pub async fn handle(&mut self, event: FormEvent) -> Phase {
        match event {
            FormEvent::Input(value) => self.update_task_name(value),
            FormEvent::Submit => self.start_tracking().await,
            FormEvent::Stop => self.stop_tracking().await,
        }
        self.phase
    }

    /// Store the field value verbatim
    pub fn update_task_name(&mut self, value: impl Into<String>) {
        self.task_name = value.into();
    }

    /// Record the task name with the backend, then start tracking
    pub async fn start_tracking(&mut self) {
        if self.phase == Phase::Tracking {
            warn!("Start ignored: already tracking '{}'", self.task_name);
            return;
        }
        if self.task_name.trim().is_empty() {
            error!("Task name cannot be empty.");
            return;
        }

        if let Err(e) = self.backend.set_task_name(&self.task_name).await {
            error!("Error setting up task name: {}", e);
            return;
        }
        if let Err(e) = self.backend.start_tracking().await {
            error!("Error starting tracking: {}", e);
            return;
        }

        info!("Tracking started for '{}'", self.task_name);
        self.phase = Phase::Tracking;
    }

    /// Stop tracking; on failure, take the phase from the backend's own status
    pub async fn stop_tracking(&mut self) {
        if self.phase == Phase::Idle {
            warn!("Stop ignored: not tracking");
            return;
        }

        match self.backend.stop_tracking().await {
            Ok(()) => {
                info!("Tracking stopped for '{}'", self.task_name);
                self.phase = Phase::Idle;
            }
            Err(e) => {
                error!("Error stopping tracking: {}", e);
                self.reconcile().await;
            }
        }
    }

    async fn reconcile(&mut self) {
        match self.backend.is_tracking().await {
            Ok(true) => debug!("Backend still tracking, keeping tracking view"),
            Ok(false) => {
                info!("Backend reports no open session, returning to entry form");
                self.phase = Phase::Idle;
            }
            Err(e) => error!("Error querying tracking status: {}", e),
        }
    }
}
