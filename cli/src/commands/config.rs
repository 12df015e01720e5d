use std::path::Path;

use clap::{Args, Subcommand};
use zerion_rewards_sdk::RewardsConfig;

use crate::error::CliError;
use crate::utils::print_success;

#[derive(Args, Clone)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigCommands,
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,
}

impl ConfigCommand {
    pub fn execute(self, config: &RewardsConfig, path: &Path) -> Result<(), CliError> {
        match self.command {
            ConfigCommands::Init { force } => {
                if path.exists() && !force {
                    return Err(CliError::Command(format!(
                        "{} already exists, use --force to overwrite",
                        path.display()
                    )));
                }
                RewardsConfig::default().save(path)?;
                print_success(&format!("Configuration written to {}", path.display()));
            }
            ConfigCommands::Show => {
                let mut shown = config.clone();
                if shown.api_key.is_some() {
                    shown.api_key = Some("********".to_string());
                }
                print!("{}", toml::to_string_pretty(&shown)?);
            }
            ConfigCommands::Path => println!("{}", path.display()),
        }
        Ok(())
    }
}
