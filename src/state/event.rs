//! Input events recorded into a tracking session

use std::{borrow::Cow, fmt};

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Mouse button reported by a button event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u8),
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MouseButton::Left => write!(f, "Left"),
            MouseButton::Right => write!(f, "Right"),
            MouseButton::Middle => write!(f, "Middle"),
            MouseButton::Other(code) => write!(f, "Other({})", code),
        }
    }
}

/// Quote a free-text CSV field when it contains a separator, quote or line break
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// A raw mouse or keyboard event as delivered to the recorder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    MouseMove { x: f64, y: f64 },
    ButtonPress { button: MouseButton, x: f64, y: f64 },
    ButtonRelease { button: MouseButton, x: f64, y: f64 },
    KeyPress { key: String, code: String },
    KeyRelease { key: String, code: String },
}

/// An input event stamped with the time it was recorded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedEvent {
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    #[serde(flatten)]
    pub event: InputEvent,
}

impl RecordedEvent {
    /// Stamp an event with the current wall-clock time
    pub fn now(event: InputEvent) -> Self {
        Self::at(event, Utc::now().timestamp_millis())
    }

    pub fn at(event: InputEvent, timestamp: i64) -> Self {
        Self { timestamp, event }
    }

    /// Render the event as one line of the session CSV log (without newline)
    pub fn to_csv_line(&self) -> String {
        let ts = self.timestamp;
        match &self.event {
            InputEvent::MouseMove { x, y } => format!("MouseMove,{},{},{}", x, y, ts),
            InputEvent::ButtonPress { button, x, y } => {
                format!("MouseButton {} Press,{},{},{}", button, x, y, ts)
            }
            InputEvent::ButtonRelease { button, x, y } => {
                format!("MouseButton {} Release,{},{},{}", button, x, y, ts)
            }
            InputEvent::KeyPress { key, code } => {
                format!("KeyPress,{},{},{}", csv_field(key), csv_field(code), ts)
            }
            InputEvent::KeyRelease { key, code } => {
                format!("KeyRelease,{},{},{}", csv_field(key), csv_field(code), ts)
            }
        }
    }
}
