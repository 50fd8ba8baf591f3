//! Rendered output of the tracking form

use std::fmt;

pub const HEADING: &str = "Welcome to Track Event";
pub const PLACEHOLDER: &str = "Enter a task name...";
pub const START_LABEL: &str = "Start Tracking";
pub const STOP_LABEL: &str = "Stop Tracking";

/// What the form shows. Built fresh from form state on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Entry form: input field plus submit button
    Entry {
        heading: &'static str,
        placeholder: &'static str,
        value: String,
        button: &'static str,
    },
    /// Tracking in progress: message plus stop button
    Tracking {
        heading: &'static str,
        message: String,
        button: &'static str,
    },
}

impl View {
    pub fn entry(value: &str) -> Self {
        View::Entry {
            heading: HEADING,
            placeholder: PLACEHOLDER,
            value: value.to_string(),
            button: START_LABEL,
        }
    }

    pub fn tracking(task: &str) -> Self {
        View::Tracking {
            heading: HEADING,
            message: format!("{} is being tracked...", task),
            button: STOP_LABEL,
        }
    }

    pub fn button(&self) -> &'static str {
        match self {
            View::Entry { button, .. } | View::Tracking { button, .. } => *button,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Entry { heading, placeholder, value, button } => {
                writeln!(f, "{}", heading)?;
                if value.is_empty() {
                    writeln!(f, "[ {} ]", placeholder)?;
                } else {
                    writeln!(f, "[ {} ]", value)?;
                }
                write!(f, "<{}>", button)
            }
            View::Tracking { heading, message, button } => {
                writeln!(f, "{}", heading)?;
                writeln!(f, "{}", message)?;
                write!(f, "<{}>", button)
            }
        }
    }
}
