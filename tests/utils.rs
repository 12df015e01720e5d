use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use zerion_rewards_sdk::{
    Asset, Boost, Error, MembershipStatus, Portfolio, Position, RewardsSource, RewardsStats,
    WalletMetadata, WalletSnapshot, XpBreakdown,
};

/// Serializes tests that touch process environment variables
pub static GLOBAL_TEST_MUTEX: Mutex<()> = Mutex::new(());

#[cfg(test)]
pub mod test_utils {
    use super::*;

    pub const TEST_ADDRESS: &str = "0x42b9df65b219b3dd36ff330a4dd8f327a6ada990";
    pub const TEST_DOMAIN: &str = "rewards.eth";

    /// Fixed reference time for view tests
    pub fn test_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    /// Membership halfway through a 10000 XP level
    pub fn create_test_membership() -> MembershipStatus {
        MembershipStatus {
            level: 7,
            level_capacity: 10_000.0,
            level_progress_percentage: 50.0,
            level_farming_index: 2_000.7,
            level_farming_limit: 6_000.2,
            level_up_time: test_now() + chrono::Duration::days(3),
            xp: XpBreakdown {
                locked: 1_250.0,
                referred: 12_345.0,
            },
            referred: 4,
        }
    }

    pub fn create_test_wallet() -> WalletMetadata {
        WalletMetadata {
            address: TEST_ADDRESS.to_string(),
            domain: Some(TEST_DOMAIN.to_string()),
            membership: create_test_membership(),
        }
    }

    pub fn create_test_asset(id: &str) -> Asset {
        Asset {
            id: id.to_string(),
            name: format!("{} Token", id),
            icon_url: None,
        }
    }

    pub fn create_test_position(asset_id: &str, value: Option<f64>) -> Position {
        Position {
            asset: create_test_asset(asset_id),
            value,
            chain: Some("ethereum".to_string()),
            quantity: Some(1.0),
        }
    }

    pub fn create_test_stats() -> RewardsStats {
        RewardsStats {
            xp_rate: 0.01,
            gas_spend: 12.346,
            gasback: 150.0,
            boosts: vec![
                Boost {
                    asset: "X".to_string(),
                    factor: 1.5,
                },
                Boost {
                    asset: "MISSING".to_string(),
                    factor: 2.0,
                },
            ],
        }
    }

    pub fn create_test_portfolio() -> Portfolio {
        let mut distribution = HashMap::new();
        distribution.insert("zero".to_string(), 42.5);
        distribution.insert("ethereum".to_string(), 1_000.0);
        Portfolio {
            total_value: 1_042.5,
            positions_chains_distribution: distribution,
        }
    }

    pub fn create_test_positions() -> Vec<Position> {
        vec![
            create_test_position("X", Some(3.0)),
            create_test_position("Y", Some(100.0)),
            create_test_position("X", Some(7.0)),
        ]
    }

    pub fn create_test_snapshot() -> WalletSnapshot {
        WalletSnapshot {
            wallet: create_test_wallet(),
            stats: Some(create_test_stats()),
            portfolio: Some(create_test_portfolio()),
            positions: Some(create_test_positions()),
        }
    }

    /// In-memory rewards source counting how often each wallet is resolved
    pub struct MockRewardsSource {
        pub wallets: HashMap<String, WalletMetadata>,
        pub fail_stats: bool,
        pub resolve_calls: AtomicUsize,
        pub stats_calls: AtomicUsize,
    }

    impl MockRewardsSource {
        pub fn new() -> Self {
            let mut wallets = HashMap::new();
            let wallet = create_test_wallet();
            wallets.insert(TEST_ADDRESS.to_string(), wallet.clone());
            wallets.insert(TEST_DOMAIN.to_string(), wallet);

            let mut other = create_test_wallet();
            other.address = "0x0000000000000000000000000000000000000001".to_string();
            other.domain = None;
            wallets.insert(other.address.clone(), other);

            Self {
                wallets,
                fail_stats: false,
                resolve_calls: AtomicUsize::new(0),
                stats_calls: AtomicUsize::new(0),
            }
        }

        pub fn with_failing_stats(mut self) -> Self {
            self.fail_stats = true;
            self
        }

        pub fn resolve_count(&self) -> usize {
            self.resolve_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RewardsSource for MockRewardsSource {
        async fn resolve_wallet(&self, account: &str) -> Result<Option<WalletMetadata>, Error> {
            self.resolve_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.wallets.get(account).cloned())
        }

        async fn rewards_stats(&self, _address: &str) -> Result<RewardsStats, Error> {
            self.stats_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_stats {
                return Err(Error::Api("rewards service unavailable".to_string()));
            }
            Ok(create_test_stats())
        }

        async fn portfolio(&self, _address: &str) -> Result<Portfolio, Error> {
            Ok(create_test_portfolio())
        }

        async fn positions(&self, _address: &str) -> Result<Vec<Position>, Error> {
            Ok(create_test_positions())
        }
    }
}
