//! Property-based tests for membership aggregation
//!
//! These tests verify invariants that should hold for all inputs:
//! - Series counts always sum to the roster size
//! - Monthly joiners are a subset of yearly joiners
//! - Bucket labels are unique within a series
//! - Every series color comes from the fixed palette
//! - Aggregation is deterministic

use chrono::{DateTime, TimeZone, Utc};
use memberdash::core::Member;
use memberdash::{aggregate, CHART_PALETTE};
use proptest::prelude::*;
use std::collections::HashSet;

/// Bucket values as they arrive from the directory: present, empty, or absent
fn bucket_value() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        2 => Just(None),
        1 => Just(Some(String::new())),
        4 => "[A-Z][a-z]{2,8}".prop_map(Some),
    ]
}

/// Join dates including the malformed values real records contain
fn join_date() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        2 => Just(None),
        1 => Just(Some(String::new())),
        4 => (2015i32..2030, 1u32..=12, 1u32..=28)
            .prop_map(|(y, m, d)| Some(format!("{y:04}-{m:02}-{d:02}"))),
        1 => "[a-z ]{1,12}".prop_map(Some),
    ]
}

fn arb_member() -> impl Strategy<Value = Member> {
    (any::<u64>(), bucket_value(), bucket_value(), join_date()).prop_map(
        |(id, gender, occupation, join_date)| Member {
            id,
            gender,
            occupation,
            join_date,
            ..Member::default()
        },
    )
}

fn arb_roster() -> impl Strategy<Value = Vec<Member>> {
    prop::collection::vec(arb_member(), 0..40)
}

fn arb_now() -> impl Strategy<Value = DateTime<Utc>> {
    (2015i32..2030, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap())
}

proptest! {
    /// Property: every member lands in exactly one bucket per series, so the
    /// series counts always sum back to the roster size
    #[test]
    fn prop_series_counts_sum_to_total(members in arb_roster(), now in arb_now()) {
        let summary = aggregate(&members, now);

        prop_assert_eq!(summary.total_members, members.len());

        let gender_sum: usize = summary.gender_series.iter().map(|e| e.count).sum();
        let occupation_sum: usize = summary.occupation_series.iter().map(|e| e.count).sum();
        prop_assert_eq!(gender_sum, members.len());
        prop_assert_eq!(occupation_sum, members.len());
    }

    /// Property: joining this month implies joining this year, and both
    /// counts are bounded by the roster size
    #[test]
    fn prop_monthly_joiners_subset_of_yearly(members in arb_roster(), now in arb_now()) {
        let summary = aggregate(&members, now);

        prop_assert!(summary.new_this_month <= summary.new_this_year);
        prop_assert!(summary.new_this_year <= summary.total_members);
    }

    /// Property: bucket labels never repeat within a series
    #[test]
    fn prop_bucket_labels_are_unique(members in arb_roster(), now in arb_now()) {
        let summary = aggregate(&members, now);

        let gender_labels: HashSet<_> =
            summary.gender_series.iter().map(|e| e.label.as_str()).collect();
        prop_assert_eq!(gender_labels.len(), summary.gender_series.len());

        let occupation_labels: HashSet<_> =
            summary.occupation_series.iter().map(|e| e.label.as_str()).collect();
        prop_assert_eq!(occupation_labels.len(), summary.occupation_series.len());
    }

    /// Property: every assigned color is one of the six palette entries
    #[test]
    fn prop_colors_come_from_palette(members in arb_roster(), now in arb_now()) {
        let summary = aggregate(&members, now);

        for entry in summary
            .gender_series
            .iter()
            .chain(summary.occupation_series.iter())
        {
            prop_assert!(CHART_PALETTE.contains(&entry.color.as_str()));
        }
    }

    /// Property: aggregation over the same roster and clock is deterministic
    #[test]
    fn prop_aggregation_is_deterministic(members in arb_roster(), now in arb_now()) {
        let first = aggregate(&members, now);
        let second = aggregate(&members, now);
        prop_assert_eq!(first, second);
    }
}
