//! Rustifactory CLI
//!
//! Command-line interface for managing repositories on an Artifactory-style
//! artifact server.

mod commands;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use rustifactory_client::{ClientConfig, Credentials};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "rustifactory")]
#[command(about = "Artifact repository management CLI", long_about = None)]
struct Cli {
    /// Server base URL, including the context path
    #[arg(
        long,
        env = "ARTIFACTORY_URL",
        default_value = "http://localhost:8080/artifactory"
    )]
    url: String,

    /// Username for HTTP Basic authentication
    #[arg(short, long, env = "ARTIFACTORY_USERNAME")]
    username: Option<String>,

    /// Password or API key
    #[arg(short, long, env = "ARTIFACTORY_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "ARTIFACTORY_TIMEOUT")]
    timeout: Option<u64>,

    /// Skip TLS certificate verification
    #[arg(long)]
    insecure: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Build the client configuration from command-line arguments
    fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new(&self.url);
        if let Some(username) = &self.username {
            config = config.with_credentials(Credentials::new(
                username,
                self.password.clone().unwrap_or_default(),
            ));
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(Duration::from_secs(timeout));
        }
        config.verify_tls = !self.insecure;
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rustifactory=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.client_config();

    handle_command(cli.command, &config).await
}
