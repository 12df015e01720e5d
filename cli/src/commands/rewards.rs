use chrono::Utc;
use clap::Args;
use tracing::info;
use zerion_rewards_sdk::{RewardsClient, RewardsConfig, RewardsView, WalletCache};

use crate::error::CliError;
use crate::utils::print_view;

#[derive(Args, Clone)]
pub struct RewardsCommand {
    /// Wallet address or domain
    account: String,

    /// Ignore the cached snapshot and fetch again
    #[arg(short, long)]
    refresh: bool,
}

impl RewardsCommand {
    pub async fn execute(
        self,
        cache: &WalletCache<RewardsClient>,
        config: &RewardsConfig,
    ) -> Result<(), CliError> {
        if self.refresh {
            cache.invalidate().await;
        }

        info!(account = %self.account, "Loading rewards");
        let snapshot = cache
            .get(&self.account)
            .await?
            .ok_or_else(|| CliError::IncorrectAccount(self.account.clone()))?;

        let view = RewardsView::build(&snapshot, &config.zero_chain_id, Utc::now());
        print_view(&view);
        Ok(())
    }
}
