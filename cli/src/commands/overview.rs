use clap::Args;
use zerion_rewards_sdk::RewardsConfig;

use crate::error::CliError;

#[derive(Args, Clone)]
pub struct OverviewCommand {
    /// Wallet address or domain
    account: String,
}

impl OverviewCommand {
    pub fn execute(self, config: &RewardsConfig) -> Result<(), CliError> {
        if self.account.trim().is_empty() {
            return Err(CliError::Command("An account is required".to_string()));
        }
        println!("{}", config.overview_url(&self.account));
        Ok(())
    }
}
