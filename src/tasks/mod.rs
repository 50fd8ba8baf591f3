//! Background tasks module
//!
//! This module contains tasks that run alongside the HTTP server.

pub mod terminal_form;

// Re-export main functions
pub use terminal_form::terminal_form_task;
