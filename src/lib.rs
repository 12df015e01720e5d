pub mod boosts;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod progress;
pub mod types;
pub mod view;

pub use boosts::{aggregate_boosts, full_positions_value, AggregatedBoost};
pub use cache::WalletCache;
pub use client::{fetch_snapshot, RewardsClient, RewardsSource};
pub use config::RewardsConfig;
pub use error::Error;
pub use format::{format_time_to_go, format_xp, significant_value};
pub use progress::MembershipProgress;
pub use types::{
    Asset, Boost, MembershipStatus, Portfolio, Position, RewardsStats, WalletMetadata,
    WalletSnapshot, XpBreakdown,
};
pub use view::{Accessory, ListItem, ListSection, RewardsView};
