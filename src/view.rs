//! Rewards list view
//!
//! Turns a [`WalletSnapshot`] into sections of display rows. Parts of the
//! snapshot that could not be fetched produce empty fields, never errors.

use chrono::{DateTime, Utc};

use crate::boosts::aggregate_boosts;
use crate::format::{
    daily_xp, format_address, format_factor, format_percentage, format_time_to_go, format_usd,
    format_xp,
};
use crate::progress::MembershipProgress;
use crate::types::WalletSnapshot;

/// Trailing detail of a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accessory {
    /// Plain text
    Text(String),
    /// Highlighted tag
    Tag(String),
}

impl Accessory {
    /// Text of the accessory regardless of its kind
    pub fn value(&self) -> &str {
        match self {
            Accessory::Text(value) | Accessory::Tag(value) => value,
        }
    }
}

/// A single row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub title: String,
    pub subtitle: Option<String>,
    pub accessories: Vec<Accessory>,
}

impl ListItem {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            accessories: Vec::new(),
        }
    }

    fn subtitle(mut self, subtitle: Option<String>) -> Self {
        self.subtitle = subtitle;
        self
    }

    fn text(mut self, text: Option<String>) -> Self {
        if let Some(text) = text {
            self.accessories.push(Accessory::Text(text));
        }
        self
    }

    fn tag(mut self, tag: String) -> Self {
        self.accessories.push(Accessory::Tag(tag));
        self
    }
}

/// A group of rows, optionally titled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSection {
    pub title: Option<String>,
    pub items: Vec<ListItem>,
}

/// The complete rewards list of a wallet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardsView {
    pub sections: Vec<ListSection>,
}

impl RewardsView {
    /// Build the rewards list for a snapshot.
    ///
    /// `zero_chain_id` selects the portfolio chain shown in the ZERO row and
    /// `now` is the reference time for the level-up countdown.
    pub fn build(snapshot: &WalletSnapshot, zero_chain_id: &str, now: DateTime<Utc>) -> Self {
        let wallet = &snapshot.wallet;
        let membership = &wallet.membership;
        let progress = MembershipProgress::derive(membership);
        let stats = snapshot.stats.as_ref();

        let address_title = wallet
            .domain
            .clone()
            .unwrap_or_else(|| format_address(&wallet.address));
        let address_line = ListItem::new(address_title)
            .subtitle(Some(wallet.address.clone()))
            .tag(format!("Level {}", membership.level));

        let level = ListItem::new("Level Progress")
            .subtitle(Some(format_percentage(membership.level_progress_percentage)))
            .tag(format!(
                "Next Level in {}",
                format_time_to_go(membership.level_up_time, now)
            ))
            .text(Some(format!("Locked: {} XP", format_xp(membership.xp.locked))))
            .text(Some(format!(
                "{} / {} XP",
                format_xp(progress.level_progress),
                format_xp(progress.level_capacity)
            )));

        let activity = ListItem::new("Activity Progress")
            .subtitle(Some(format_percentage(progress.activity_percentage())))
            .text(Some(format!(
                "{} / {} XP",
                format_xp(progress.active_xp_earned),
                format_xp(progress.actual_active_xp_limit)
            )));

        let zero_value = snapshot
            .portfolio
            .as_ref()
            .map(|portfolio| format_usd(portfolio.chain_value(zero_chain_id).unwrap_or(0.0)));
        let zero = ListItem::new("ZERO XP")
            .subtitle(zero_value)
            .text(stats.map(|stats| format!("+{} XP/Day", format_xp(daily_xp(stats.xp_rate)))))
            .text(Some(format!("{} XP", format_xp(progress.passive_xp_earned))));

        let gasback = ListItem::new("Gasback")
            .subtitle(stats.map(|stats| format_usd(stats.gas_spend)))
            .text(stats.map(|stats| format!("{} XP", format_xp(stats.gasback))));

        let invites = ListItem::new("Invites")
            .subtitle(Some(membership.referred.to_string()))
            .text(Some(format!("{} XP", format_xp(membership.xp.referred))));

        let mut sections = vec![
            ListSection {
                title: None,
                items: vec![address_line, level, activity, zero, gasback],
            },
            ListSection {
                title: Some("Referral Program".to_string()),
                items: vec![invites],
            },
        ];

        let boosts = match (stats, snapshot.positions.as_ref()) {
            (Some(stats), Some(positions)) => aggregate_boosts(&stats.boosts, positions),
            _ => Vec::new(),
        };
        let boost_items = boosts
            .into_iter()
            .filter_map(|aggregated| {
                let asset = aggregated.asset.as_ref()?;
                Some(
                    ListItem::new(asset.name.clone())
                        .text(Some(format_usd(aggregated.total_value())))
                        .tag(format_factor(aggregated.boost.factor)),
                )
            })
            .collect();
        sections.push(ListSection {
            title: Some("Boosts".to_string()),
            items: boost_items,
        });

        Self { sections }
    }

    /// Find a row by title across all sections
    pub fn item(&self, title: &str) -> Option<&ListItem> {
        self.sections
            .iter()
            .flat_map(|section| section.items.iter())
            .find(|item| item.title == title)
    }
}
