//! voxrelay CLI
//!
//! Watches a note vault for newly recorded voice notes and relays them to a
//! configured webhook endpoint.

mod commands;
mod config;
mod reload;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

/// voxrelay — relay newly recorded voice notes to a webhook endpoint.
#[derive(Parser, Debug)]
#[command(name = "voxrelay", version, about)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(
        long,
        env = "VOXRELAY_CONFIG",
        default_value = "voxrelay.toml",
        global = true
    )]
    config: PathBuf,

    /// Webhook endpoint URL (overrides the config file).
    #[arg(long, env = "VOXRELAY_ENDPOINT", global = true)]
    endpoint: Option<String>,

    /// Vault credential sent with every request (overrides the config file).
    #[arg(long, env = "VOXRELAY_VAULT_KEY", global = true)]
    vault_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Watch the vault and relay new recordings as they appear.
    Watch,
    /// Probe the webhook endpoint.
    Test,
    /// Upload a named audio attachment directly.
    Send(commands::send::SendArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = config::load(&cli.config)?.with_overrides(cli.endpoint, cli.vault_key);

    match cli.command {
        Command::Watch => commands::watch::run(&cli.config, &settings).await,
        Command::Test => commands::test::run(&settings).await,
        Command::Send(args) => commands::send::run(&settings, &args).await,
    }
}
