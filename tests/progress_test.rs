mod utils;

use zerion_rewards_sdk::MembershipProgress;
use utils::test_utils::create_test_membership;

#[test]
fn test_progress_derivation() {
    let progress = MembershipProgress::derive(&create_test_membership());

    assert_eq!(progress.level_capacity, 10_000.0);
    assert_eq!(progress.level_progress, 5_000.0, "Half of a 10000 XP level");
    assert_eq!(progress.active_xp_earned, 2_000.0, "Farming index is floored");
    assert_eq!(progress.passive_xp_earned, 3_000.0);
    assert_eq!(progress.active_xp_limit, 6_000.0, "Farming limit is floored");
    // Only 7000 XP of room is left after 3000 passive XP
    assert_eq!(progress.actual_active_xp_limit, 6_000.0);
}

#[test]
fn test_active_limit_capped_by_remaining_room() {
    let mut membership = create_test_membership();
    membership.level_farming_limit = 9_500.0;

    let progress = MembershipProgress::derive(&membership);
    assert_eq!(progress.passive_xp_earned, 3_000.0);
    assert_eq!(
        progress.actual_active_xp_limit, 7_000.0,
        "Active limit should not exceed capacity minus passive XP"
    );
}

#[test]
fn test_passive_xp_clamped_when_farming_index_exceeds_progress() {
    let mut membership = create_test_membership();
    membership.level_progress_percentage = 10.0;
    membership.level_farming_index = 4_000.0;

    let progress = MembershipProgress::derive(&membership);
    assert_eq!(progress.level_progress, 1_000.0);
    assert_eq!(progress.passive_xp_earned, 0.0, "Passive XP must not go negative");
}

#[test]
fn test_clamping_invariants_hold() {
    let capacities = [0.0, 1.0, 500.0, 10_000.0];
    let percentages = [0.0, 12.5, 50.0, 100.0];
    let indexes = [0.0, 0.9, 250.0, 20_000.0];
    let limits = [0.0, 100.0, 5_000.0, 50_000.0];

    for capacity in capacities {
        for percentage in percentages {
            for index in indexes {
                for limit in limits {
                    let mut membership = create_test_membership();
                    membership.level_capacity = capacity;
                    membership.level_progress_percentage = percentage;
                    membership.level_farming_index = index;
                    membership.level_farming_limit = limit;

                    let progress = MembershipProgress::derive(&membership);
                    assert!(
                        progress.passive_xp_earned >= 0.0,
                        "passive XP negative for {:?}",
                        membership
                    );
                    assert!(
                        progress.actual_active_xp_limit >= 0.0,
                        "active limit negative for {:?}",
                        membership
                    );
                    assert!(
                        progress.activity_percentage().is_finite(),
                        "activity percentage not finite for {:?}",
                        membership
                    );
                }
            }
        }
    }
}

#[test]
fn test_activity_percentage() {
    let progress = MembershipProgress::derive(&create_test_membership());
    let percentage = progress.activity_percentage();
    assert!((percentage - 33.333).abs() < 0.01, "got {}", percentage);
}

#[test]
fn test_activity_percentage_with_zero_limit() {
    let mut membership = create_test_membership();
    membership.level_farming_limit = 0.0;

    let progress = MembershipProgress::derive(&membership);
    assert_eq!(progress.actual_active_xp_limit, 0.0);
    assert_eq!(
        progress.activity_percentage(),
        0.0,
        "A zero limit should fall back to 0%"
    );
}

#[test]
fn test_level_fully_passive_leaves_no_active_room() {
    let mut membership = create_test_membership();
    membership.level_progress_percentage = 100.0;
    membership.level_farming_index = 0.0;

    let progress = MembershipProgress::derive(&membership);
    assert_eq!(progress.passive_xp_earned, 10_000.0);
    assert_eq!(progress.actual_active_xp_limit, 0.0);
    assert_eq!(progress.activity_percentage(), 0.0);
}
