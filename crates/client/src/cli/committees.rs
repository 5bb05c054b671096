//! Committee CLI commands.

use clap::{Parser, Subcommand};

/// Committee commands.
#[derive(Debug, Parser)]
pub struct CommitteesCommand {
    #[command(subcommand)]
    pub action: CommitteesAction,
}

/// Available committee actions.
#[derive(Debug, Subcommand)]
pub enum CommitteesAction {
    /// List committees.
    List {
        /// Only specialized committees.
        #[arg(long)]
        special: bool,
    },
}
