//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

use crate::window::Frequency;

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "agenda-clock")]
#[command(about = "Meeting agenda page timers and rolling metric date windows")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Period in milliseconds at which page timers are recomputed
    #[arg(long, default_value = "1000", value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Initial reporting frequency of the metrics window (daily, weekly, monthly, quarterly)
    #[arg(short, long, default_value = "weekly")]
    pub frequency: Frequency,

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

    /// Timer recompute period
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
