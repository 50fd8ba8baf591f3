//! Persistence services used by the tracker
//!
//! This module contains the functions that move session data out of memory.

pub mod session_log;

// Re-export main functions
pub use session_log::write_session_log;
