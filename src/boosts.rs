//! Boost aggregation
//!
//! Pairs each boost with the wallet positions holding the boosted asset.

use crate::types::{Asset, Boost, Position};

/// A boost together with the positions it applies to
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedBoost {
    pub boost: Boost,
    /// Matching positions, in the order they were fetched
    pub positions: Vec<Position>,
    /// Asset of the first matching position, `None` if the wallet holds none
    pub asset: Option<Asset>,
}

impl AggregatedBoost {
    /// Summed USD value of the matching positions
    pub fn total_value(&self) -> f64 {
        full_positions_value(&self.positions)
    }
}

/// Sum of the USD values of `positions`, 0 for an empty slice
pub fn full_positions_value(positions: &[Position]) -> f64 {
    positions
        .iter()
        .fold(0.0, |total, position| total + position.usd_value())
}

/// Match every boost with the positions of its asset
pub fn aggregate_boosts(boosts: &[Boost], positions: &[Position]) -> Vec<AggregatedBoost> {
    boosts
        .iter()
        .map(|boost| {
            let matching: Vec<Position> = positions
                .iter()
                .filter(|position| position.asset.id == boost.asset)
                .cloned()
                .collect();
            let asset = matching.first().map(|position| position.asset.clone());

            AggregatedBoost {
                boost: boost.clone(),
                positions: matching,
                asset,
            }
        })
        .collect()
}
