mod commands;
mod error;
mod utils;

use std::path::{Path, PathBuf};

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zerion_rewards_sdk::{RewardsClient, RewardsConfig, WalletCache};

use crate::commands::{config::ConfigCommand, overview::OverviewCommand, rewards::RewardsCommand};
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "zerion-rewards")]
#[command(about = "Zerion wallet rewards, XP progress and boosts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Show level progress, XP and boosts of a wallet
    Rewards(RewardsCommand),

    /// Print the web overview link of a wallet
    Overview(OverviewCommand),

    /// Configuration file management
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // A missing .env file is fine
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    // Setup logging
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config_path = cli.config.clone().unwrap_or_else(RewardsConfig::default_path);
    let config = RewardsConfig::load_layered(Some(config_path.as_path()))?;
    debug!(path = %config_path.display(), api_url = %config.api_url, "Configuration loaded");

    let cache = WalletCache::new(RewardsClient::new(config.clone())?);

    match cli.command {
        Some(command) => run_command(command, &cache, &config, &config_path).await,
        None => run_interactive(&cache, &config, &config_path).await,
    }
}

async fn run_command(
    command: Commands,
    cache: &WalletCache<RewardsClient>,
    config: &RewardsConfig,
    config_path: &Path,
) -> Result<(), CliError> {
    match command {
        Commands::Rewards(cmd) => cmd.execute(cache, config).await,
        Commands::Overview(cmd) => cmd.execute(config),
        Commands::Config(cmd) => cmd.execute(config, config_path),
    }
}

/// Interactive shell; the cache keeps the last wallet between commands
async fn run_interactive(
    cache: &WalletCache<RewardsClient>,
    config: &RewardsConfig,
    config_path: &Path,
) -> Result<(), CliError> {
    use rustyline::error::ReadlineError;
    use rustyline::history::DefaultHistory;
    use rustyline::Editor;

    println!("Zerion Rewards CLI - Interactive Mode");
    println!("Type 'exit' or 'quit' to exit, 'help' for available commands");

    let mut rl = Editor::<(), DefaultHistory>::new()
        .map_err(|e| CliError::Command(format!("Failed to create line editor: {}", e)))?;

    loop {
        let line = match rl.readline("zerion-rewards> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(CliError::Command(format!("Failed to read input: {}", e))),
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if let Err(e) = rl.add_history_entry(input) {
            eprintln!("Error adding history entry: {}", e);
        }

        match input {
            "exit" | "quit" => break,
            "help" => {
                print_help();
                continue;
            }
            "refresh" => {
                cache.invalidate().await;
                utils::print_success("Cache cleared");
                continue;
            }
            _ => {}
        }

        let args = match shell_words::split(input) {
            Ok(args) => args,
            Err(e) => {
                eprintln!("Error parsing command: {}", e);
                continue;
            }
        };

        if let Err(e) = process_command(args, cache, config, config_path).await {
            eprintln!("Error: {}", e);
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Process a command in the interactive shell
async fn process_command(
    args: Vec<String>,
    cache: &WalletCache<RewardsClient>,
    config: &RewardsConfig,
    config_path: &Path,
) -> Result<(), CliError> {
    let matches = Cli::command()
        .try_get_matches_from(std::iter::once(String::from("zerion-rewards")).chain(args))
        .map_err(|e| CliError::Command(e.to_string()))?;
    let cli = Cli::from_arg_matches(&matches)
        .map_err(|e| CliError::Command(format!("Failed to parse command: {}", e)))?;

    match cli.command {
        Some(command) => run_command(command, cache, config, config_path).await,
        None => {
            print_help();
            Ok(())
        }
    }
}

fn print_help() {
    println!("Available commands:");
    println!("  rewards <account> [--refresh]   Show level progress, XP and boosts");
    println!("  overview <account>              Print the web overview link");
    println!("  config init|show|path           Manage the configuration file");
    println!("  refresh                         Forget the cached wallet");
    println!("  help                            Show this help");
    println!("  exit, quit                      Leave the shell");
}
