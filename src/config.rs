//! Configuration and CLI argument handling

use std::path::PathBuf;

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "track-event")]
#[command(about = "Track a named task and record input events into the session")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Directory that finished session logs are written to
    #[arg(short, long)]
    pub log_dir: Option<PathBuf>,

    /// Run the tracking form on this terminal
    #[arg(short, long)]
    pub interactive: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::parse_from(["track-event"]);
        assert_eq!(config.address(), "127.0.0.1:20554");
        assert_eq!(config.log_level(), "info");
        assert!(config.log_dir.is_none());
        assert!(!config.interactive);
    }

    #[test]
    fn flags() {
        let config = Config::parse_from(["track-event", "-i", "-v", "--log-dir", "/tmp/sessions", "-p", "9000"]);
        assert_eq!(config.port, 9000);
        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/sessions")));
        assert!(config.interactive);
    }
}
