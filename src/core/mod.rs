pub mod errors;
pub mod stats;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A member record as served by the member directory.
///
/// Only `join_date`, `gender`, and `occupation` feed the dashboard aggregation;
/// the remaining fields exist for the listing and detail views. Every field
/// except `id` may be absent, null, or empty in the wire data, so they are all
/// optional here. `join_date` and `dob` stay raw strings: the directory is not
/// trusted to always send well-formed dates, and one bad record must not fail
/// a whole fetch.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Member {
    pub id: u64,
    #[serde(default)]
    pub membership_id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub nic: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub join_date: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub family_members: Option<String>,
    #[serde(default)]
    pub emergency_name: Option<String>,
    #[serde(default)]
    pub emergency_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Member {
    /// Display name assembled from the name fields, e.g. "Jane Perera".
    pub fn full_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or("");
        let last = self.last_name.as_deref().unwrap_or("");
        format!("{first} {last}").trim().to_string()
    }
}

/// Write-side member record for create and update calls.
///
/// The directory's serializer expects camelCase keys on writes, unlike its
/// snake_case responses, and wants dates as `YYYY-MM-DD` or an explicit null.
/// All fields are optional so the same type serves full create payloads and
/// partial update patches.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MemberDraft {
    #[serde(default)]
    pub membership_id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub nic: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub join_date: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub dob: Option<NaiveDate>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub family_members: Option<String>,
    #[serde(default)]
    pub emergency_name: Option<String>,
    #[serde(default)]
    pub emergency_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Member list payload as it appears on the wire.
///
/// The directory's list endpoint returns a bare array; exported fixture
/// files wrap the same array as `{"data": [...]}`. Both decode.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum MemberPayload {
    Plain(Vec<Member>),
    Wrapped { data: Vec<Member> },
}

impl MemberPayload {
    pub fn into_members(self) -> Vec<Member> {
        match self {
            MemberPayload::Plain(members) => members,
            MemberPayload::Wrapped { data } => data,
        }
    }
}

/// One labeled slice of a dashboard chart: a bucket's label, its member
/// count, and the `#RRGGBB` color assigned by the palette cycling rule.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeriesEntry {
    pub label: String,
    pub count: usize,
    pub color: String,
}

/// Aggregate view of the member list powering the dashboard.
///
/// Recomputed from scratch on every aggregation; never persisted. `as_of` is
/// the reference timestamp the year/month counts were evaluated against.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MembershipSummary {
    pub as_of: DateTime<Utc>,
    pub total_members: usize,
    pub new_this_year: usize,
    pub new_this_month: usize,
    pub gender_series: Vec<SeriesEntry>,
    pub occupation_series: Vec<SeriesEntry>,
}
