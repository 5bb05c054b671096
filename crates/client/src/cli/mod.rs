//! CLI command definitions.

pub mod committees;
pub mod welcome;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::ClientConfig;

/// CLI client for the huxley advisor API.
#[derive(Debug, Parser)]
#[command(name = "huxley-client")]
#[command(about = "CLI client for the huxley advisor API", long_about = None)]
pub struct Cli {
    /// Server base URL [default: $HUXLEY_URL or http://localhost:8000].
    #[arg(long)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds [default: $HUXLEY_TIMEOUT_SECS or 30].
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Environment configuration with any command-line overrides applied.
    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::from_env();
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url.clone());
        }
        if let Some(seconds) = self.timeout_secs {
            config = config.with_request_timeout_seconds(seconds);
        }
        config
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Advisor welcome form.
    Welcome(welcome::WelcomeCommand),
    /// Conference committees.
    Committees(committees::CommitteesCommand),
}
