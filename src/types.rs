//! Rewards API data model
//!
//! Read-only views of the payloads returned by the rewards service. Field
//! names follow the API's camelCase JSON.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// XP amounts that are not part of the current level progress
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XpBreakdown {
    /// XP locked until the next level
    #[serde(default)]
    pub locked: f64,
    /// XP earned from referred wallets
    #[serde(default)]
    pub referred: f64,
}

/// Membership status of a wallet in the rewards program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipStatus {
    /// Current level number
    #[serde(default)]
    pub level: u32,
    /// Total XP required to complete the current level
    pub level_capacity: f64,
    /// Progress within the current level, 0 to 100
    pub level_progress_percentage: f64,
    /// Raw counter of actively earned XP
    #[serde(default)]
    pub level_farming_index: f64,
    /// Raw cap on actively earned XP
    #[serde(default)]
    pub level_farming_limit: f64,
    /// When the wallet reaches the next level
    pub level_up_time: DateTime<Utc>,
    pub xp: XpBreakdown,
    /// Number of referred wallets
    #[serde(default)]
    pub referred: u64,
}

/// A resolved wallet: address, optional domain and membership
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletMetadata {
    pub address: String,
    #[serde(default)]
    pub domain: Option<String>,
    pub membership: MembershipStatus,
}

/// Boost multiplier granted for holding an asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boost {
    /// Asset id the boost applies to
    pub asset: String,
    pub factor: f64,
}

/// Rewards statistics of a wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardsStats {
    /// XP earned per second
    #[serde(default)]
    pub xp_rate: f64,
    /// Gas spent, in USD
    #[serde(default)]
    pub gas_spend: f64,
    /// XP rewarded for gas spent
    #[serde(default)]
    pub gasback: f64,
    #[serde(default)]
    pub boosts: Vec<Boost>,
}

/// Asset metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon_url: Option<String>,
}

/// A wallet position in a single asset on a single chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub asset: Asset,
    /// USD value, absent when the asset has no price
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub chain: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
}

impl Position {
    /// USD value of the position, zero when unpriced
    pub fn usd_value(&self) -> f64 {
        self.value.filter(|v| v.is_finite()).unwrap_or(0.0)
    }
}

/// Portfolio totals of a wallet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    #[serde(default)]
    pub total_value: f64,
    /// USD value held per chain id
    #[serde(default)]
    pub positions_chains_distribution: HashMap<String, f64>,
}

impl Portfolio {
    /// USD value held on a chain, if the wallet has anything there
    pub fn chain_value(&self, chain_id: &str) -> Option<f64> {
        self.positions_chains_distribution.get(chain_id).copied()
    }
}

/// Everything fetched for one wallet
///
/// Only the wallet itself is required; the other parts are `None` when the
/// corresponding request failed.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletSnapshot {
    pub wallet: WalletMetadata,
    pub stats: Option<RewardsStats>,
    pub portfolio: Option<Portfolio>,
    pub positions: Option<Vec<Position>>,
}
