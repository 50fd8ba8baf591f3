//! In-process backend over the shared application state

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::Backend;
use crate::{error::TrackerError, state::AppState};

/// Backend that calls straight into [`AppState`]
#[derive(Debug, Clone)]
pub struct LocalBackend {
    state: Arc<AppState>,
}

impl LocalBackend {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }
}

#[async_trait]
impl Backend for LocalBackend {
    async fn set_task_name(&self, task: &str) -> Result<(), TrackerError> {
        debug!("invoke set_task_name {{ task: {:?} }}", task);
        self.state.set_task_name(task)
    }

    async fn start_tracking(&self) -> Result<(), TrackerError> {
        debug!("invoke start_tracking");
        self.state.start_tracking().map(|_| ())
    }

    async fn stop_tracking(&self) -> Result<(), TrackerError> {
        debug!("invoke stop_tracking");
        self.state.stop_tracking().await.map(|_| ())
    }

    async fn is_tracking(&self) -> Result<bool, TrackerError> {
        self.state.is_tracking()
    }
}
