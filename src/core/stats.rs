//! Dashboard statistics: a single pass over the member list producing the
//! total/new-member counts and the chart-ready gender and occupation series.
//!
//! `aggregate` is a pure function of `(members, now)`. The reference time is
//! threaded in explicitly rather than read from the system clock, so the same
//! inputs always produce the same output, bucket order and colors included.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use indexmap::IndexMap;

use crate::core::{Member, MembershipSummary, SeriesEntry};

/// Bucket label for members with no recorded gender.
pub const UNKNOWN_GENDER: &str = "Unknown";

/// Bucket label for members with no recorded occupation.
pub const OTHER_OCCUPATION: &str = "Other";

/// Fixed chart palette, assigned to buckets by index modulo the palette size.
pub const CHART_PALETTE: [&str; 6] = [
    "#0F8BFD", // blue
    "#EC4DBC", // pink
    "#FFCE56", // yellow
    "#00D0DE", // teal
    "#873EFE", // purple
    "#0BD18A", // green
];

/// The occupation series starts two palette slots in, so the two charts stay
/// visually distinct even when each has only a few buckets.
pub const OCCUPATION_PALETTE_OFFSET: usize = 2;

/// Aggregate the member list into the dashboard summary.
///
/// One pass, in input order. Buckets appear in the output series in the order
/// they were first seen, never sorted by label or count; that order drives
/// chart legends and must stay stable. Records with an absent, empty, or
/// unparseable join date are counted in the totals and the series but
/// contribute to no year/month count. Empty or absent gender and occupation
/// fall back to the [`UNKNOWN_GENDER`] and [`OTHER_OCCUPATION`] buckets.
pub fn aggregate(members: &[Member], now: DateTime<Utc>) -> MembershipSummary {
    let current_year = now.year();
    let current_month = now.month();

    let mut new_this_year = 0;
    let mut new_this_month = 0;
    let mut gender_counts: IndexMap<String, usize> = IndexMap::new();
    let mut occupation_counts: IndexMap<String, usize> = IndexMap::new();

    for member in members {
        if let Some(raw) = member.join_date.as_deref().filter(|d| !d.is_empty()) {
            match parse_calendar_date(raw) {
                Some(joined) => {
                    if joined.year() == current_year {
                        new_this_year += 1;
                        if joined.month() == current_month {
                            new_this_month += 1;
                        }
                    }
                }
                // Bad dates degrade to "not new", they never fail the run.
                None => log::debug!("member {}: unparseable join date {:?}", member.id, raw),
            }
        }

        let gender = bucket_key(&member.gender, UNKNOWN_GENDER);
        *gender_counts.entry(gender.to_string()).or_insert(0) += 1;

        let occupation = bucket_key(&member.occupation, OTHER_OCCUPATION);
        *occupation_counts.entry(occupation.to_string()).or_insert(0) += 1;
    }

    MembershipSummary {
        as_of: now,
        total_members: members.len(),
        new_this_year,
        new_this_month,
        gender_series: to_series(gender_counts, 0),
        occupation_series: to_series(occupation_counts, OCCUPATION_PALETTE_OFFSET),
    }
}

/// Bucket key for a free-text field: the value if non-empty, else the
/// synthetic fallback bucket. Only the empty string falls back; whitespace
/// and unusual values count as their own buckets.
fn bucket_key<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
}

/// Parse a wire date as a calendar date. Accepts plain ISO dates
/// (`2024-03-01`) and full RFC 3339 timestamps, whose date part is used.
fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = raw.parse::<NaiveDate>() {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|timestamp| timestamp.date_naive())
}

/// Convert an ordered bucket map into a chart series, assigning palette
/// colors by bucket index plus the series' palette offset.
fn to_series(counts: IndexMap<String, usize>, palette_offset: usize) -> Vec<SeriesEntry> {
    counts
        .into_iter()
        .enumerate()
        .map(|(index, (label, count))| SeriesEntry {
            label,
            count,
            color: CHART_PALETTE[(index + palette_offset) % CHART_PALETTE.len()].to_string(),
        })
        .collect()
}
