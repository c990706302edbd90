//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod repository;

pub use repository::RepoCommands;

use anyhow::Result;
use clap::Subcommand;
use rustifactory_client::ClientConfig;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Repository management
    Repo {
        #[command(subcommand)]
        command: RepoCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &ClientConfig) -> Result<()> {
    match command {
        Commands::Repo { command } => repository::handle_repo_command(command, config).await,
    }
}
