//! Session log persistence

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info};

use crate::{error::TrackerError, state::TrackingSession};

/// Write a session's events to `<dir>/session-<id>-<started ms>.csv`, one line per event
pub async fn write_session_log(dir: &Path, session: &TrackingSession) -> Result<PathBuf, TrackerError> {
    debug!("Writing log for session {} to {}", session.id, dir.display());

    fs::create_dir_all(dir)
        .await
        .map_err(|e| TrackerError::SessionLog(format!("cannot create {}: {}", dir.display(), e)))?;

    let mut contents = String::new();
    for event in &session.events {
        contents.push_str(&event.to_csv_line());
        contents.push('\n');
    }

    let path = dir.join(session.log_file_name());
    fs::write(&path, contents)
        .await
        .map_err(|e| TrackerError::SessionLog(format!("cannot write {}: {}", path.display(), e)))?;

    info!("Session {} log written to {} ({} events)", session.id, path.display(), session.event_count());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{InputEvent, RecordedEvent};

    #[tokio::test]
    async fn writes_one_line_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = TrackingSession::start(3, "Write report".to_string(), true);
        session.record(RecordedEvent::at(InputEvent::MouseMove { x: 1.0, y: 2.0 }, 100));
        session.record(RecordedEvent::at(
            InputEvent::KeyPress { key: "b".to_string(), code: "KeyB".to_string() },
            200,
        ));

        let nested = dir.path().join("logs");
        let path = write_session_log(&nested, &session).await.unwrap();

        assert!(path.starts_with(&nested));
        assert!(path.file_name().unwrap().to_string_lossy().starts_with("session-3-"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "MouseMove,1,2,100\nKeyPress,b,KeyB,200\n");
    }
}
