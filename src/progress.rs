//! Membership progress derivation
//!
//! Splits the XP collected in the current level into actively farmed and
//! passive XP, and caps the active XP limit by the room left in the level.

use crate::types::MembershipStatus;

/// Values derived from a [`MembershipStatus`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MembershipProgress {
    /// Total XP required to complete the current level
    pub level_capacity: f64,
    /// Absolute XP position within the current level
    pub level_progress: f64,
    /// Actively farmed XP, floored
    pub active_xp_earned: f64,
    /// XP attributed to non-active sources, never negative
    pub passive_xp_earned: f64,
    /// Raw active XP cap, floored
    pub active_xp_limit: f64,
    /// Active XP cap bounded by the room left after passive XP
    pub actual_active_xp_limit: f64,
}

impl MembershipProgress {
    /// Derive progress values from a membership status
    pub fn derive(membership: &MembershipStatus) -> Self {
        let level_capacity = finite_or_zero(membership.level_capacity);
        let level_progress =
            level_capacity * finite_or_zero(membership.level_progress_percentage) / 100.0;
        let active_xp_earned = finite_or_zero(membership.level_farming_index).floor();

        // A farming index ahead of the reported progress must not show as negative passive XP
        let passive_xp_earned = (level_progress - active_xp_earned).max(0.0);

        let active_xp_limit = finite_or_zero(membership.level_farming_limit).floor();
        let actual_active_xp_limit = active_xp_limit
            .min(level_capacity - passive_xp_earned)
            .max(0.0);

        Self {
            level_capacity,
            level_progress,
            active_xp_earned,
            passive_xp_earned,
            active_xp_limit,
            actual_active_xp_limit,
        }
    }

    /// Share of the active XP limit already earned, in percent.
    ///
    /// Returns 0 when the limit is zero, so the result is always finite.
    pub fn activity_percentage(&self) -> f64 {
        if self.actual_active_xp_limit <= 0.0 {
            return 0.0;
        }
        let percentage = self.active_xp_earned / self.actual_active_xp_limit * 100.0;
        finite_or_zero(percentage)
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
