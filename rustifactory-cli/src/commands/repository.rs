//! Repository command handlers
//!
//! Handles all repository-related CLI commands. Definitions for create and
//! update are read from JSON files whose `rclass` field selects the
//! repository class.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use rustifactory_client::{ArtifactoryClient, ClientConfig};
use rustifactory_core::domain::class::RepositoryClass;
use rustifactory_core::domain::summary::SimpleRepository;
use rustifactory_core::dto::{Repository, RepositoryResponse};

/// Repository subcommands
#[derive(Subcommand)]
pub enum RepoCommands {
    /// List all repositories
    List,
    /// Show a repository configuration
    Get {
        /// Repository key
        key: String,
    },
    /// Check whether a repository exists
    Exists {
        /// Repository key
        key: String,
    },
    /// Create a repository from a JSON definition
    Create {
        /// Path to the JSON definition
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Update a repository from a JSON definition
    Update {
        /// Path to the JSON definition
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Delete a repository
    Delete {
        /// Repository key
        key: String,
    },
}

/// Handle repository commands
///
/// Routes repository subcommands to their respective handlers.
pub async fn handle_repo_command(command: RepoCommands, config: &ClientConfig) -> Result<()> {
    let client = ArtifactoryClient::from_config(config)?;

    match command {
        RepoCommands::List => list_repositories(&client).await,
        RepoCommands::Get { key } => get_repository(&client, &key).await,
        RepoCommands::Exists { key } => repository_exists(&client, &key).await,
        RepoCommands::Create { file } => create_repository(&client, &file).await,
        RepoCommands::Update { file } => update_repository(&client, &file).await,
        RepoCommands::Delete { key } => delete_repository(&client, &key).await,
    }
}

/// Parse a repository definition from JSON
fn parse_definition(contents: &str) -> Result<Repository> {
    serde_json::from_str(contents)
        .context("Invalid repository definition (is `rclass` one of local, virtual, remote?)")
}

/// Read a repository definition file
fn read_definition(path: &Path) -> Result<Repository> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read definition file: {}", path.display()))?;

    let repo = parse_definition(&contents)?;
    tracing::debug!(key = repo.key(), rclass = %repo.class(), "Loaded repository definition");
    Ok(repo)
}

/// List all repositories
async fn list_repositories(client: &ArtifactoryClient) -> Result<()> {
    let repos = client.list_repositories().await?;

    if repos.is_empty() {
        println!("{}", "No repositories found.".yellow());
    } else {
        println!(
            "{}",
            format!("Found {} repository(ies):", repos.len()).bold()
        );
        println!();
        for repo in repos {
            print_repository_summary(&repo);
        }
    }

    Ok(())
}

/// Get and display a single repository
async fn get_repository(client: &ArtifactoryClient, key: &str) -> Result<()> {
    let repo = client.get_repository_any(key).await?;

    print_repository_details(&repo)
}

async fn repository_exists(client: &ArtifactoryClient, key: &str) -> Result<()> {
    if client.repository_exists(key).await? {
        println!("{}", format!("Repository {} exists", key).green());
    } else {
        println!("{}", format!("Repository {} does not exist", key).yellow());
    }

    Ok(())
}

/// Create a repository from a definition file
async fn create_repository(client: &ArtifactoryClient, path: &Path) -> Result<()> {
    let repo = read_definition(path)?;
    let created = client.create_repository_any(&repo).await?;

    println!("{}", "✓ Repository created successfully!".green().bold());
    print_repository_details(&created)
}

/// Update a repository from a definition file
async fn update_repository(client: &ArtifactoryClient, path: &Path) -> Result<()> {
    let repo = read_definition(path)?;
    let updated = client.update_repository_any(&repo).await?;

    println!("{}", "✓ Repository updated successfully!".green().bold());
    print_repository_details(&updated)
}

/// Delete a repository
async fn delete_repository(client: &ArtifactoryClient, key: &str) -> Result<()> {
    client.delete_repository(key).await?;

    println!(
        "{}",
        format!("✓ Repository {} deleted successfully!", key)
            .green()
            .bold()
    );

    Ok(())
}

/// Print a repository summary
fn print_repository_summary(repo: &SimpleRepository) {
    println!(
        "  {} {} [{}]",
        "▸".cyan(),
        repo.key.bold(),
        colorize_class(&repo.repo_type)
    );
    println!("    Package Type: {}", repo.package_type);
    println!("    URL:          {}", repo.url.dimmed());
    if let Some(description) = &repo.description {
        println!("    Description:  {}", description.dimmed());
    }
    println!();
}

/// Print a full repository configuration as JSON
fn print_repository_details(repo: &RepositoryResponse) -> Result<()> {
    println!(
        "  {} {} [{}]",
        "▸".cyan(),
        repo.key().bold(),
        colorize_class(&repo.class())
    );
    println!("{}", serde_json::to_string_pretty(repo)?);

    Ok(())
}

/// Colorize a repository class for display
fn colorize_class(class: &RepositoryClass) -> ColoredString {
    let class_str = class.to_string();
    match class {
        RepositoryClass::Local => class_str.green(),
        RepositoryClass::Virtual => class_str.blue(),
        RepositoryClass::Remote => class_str.magenta(),
    }
}
