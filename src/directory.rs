//! HTTP client for the member directory service.
//!
//! Talks to the same REST endpoints the web dashboard uses: a collection
//! route at `/api/members/` and per-member routes at `/api/members/{id}/`.
//! Reads return snake_case member records, writes send camelCase drafts.

use std::time::Duration;

use reqwest::blocking::{Client, Response};

use crate::config::ApiConfig;
use crate::core::errors::{Error, Result};
use crate::core::{Member, MemberDraft, MemberPayload};

/// Blocking client for the member directory API
pub struct DirectoryClient {
    base_url: String,
    client: Client,
}

impl DirectoryClient {
    /// Create a client for the given API settings. The base URL keeps no
    /// trailing slash; route builders add their own.
    pub fn new(api: &ApiConfig) -> Result<Self> {
        let base_url = api.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(Error::configuration("api.base_url must not be empty"));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()?;

        Ok(Self { base_url, client })
    }

    fn members_url(&self) -> String {
        format!("{}/api/members/", self.base_url)
    }

    fn member_url(&self, id: u64) -> String {
        format!("{}/api/members/{}/", self.base_url, id)
    }

    /// Fetch every member record
    pub fn list_members(&self) -> Result<Vec<Member>> {
        let url = self.members_url();
        log::debug!("GET {url}");
        let response = check_status(self.client.get(&url).send()?)?;
        decode_member_list(&response.text()?)
    }

    /// Fetch a single member by id
    pub fn get_member(&self, id: u64) -> Result<Member> {
        let url = self.member_url(id);
        log::debug!("GET {url}");
        let response = check_status(self.client.get(&url).send()?)?;
        decode_member(&response.text()?)
    }

    /// Register a new member and return the stored record
    pub fn create_member(&self, draft: &MemberDraft) -> Result<Member> {
        let url = self.members_url();
        log::debug!("POST {url}");
        let response = check_status(self.client.post(&url).json(draft).send()?)?;
        decode_member(&response.text()?)
    }

    /// Apply a partial update to an existing member
    pub fn update_member(&self, id: u64, draft: &MemberDraft) -> Result<Member> {
        let url = self.member_url(id);
        log::debug!("PATCH {url}");
        let response = check_status(self.client.patch(&url).json(draft).send()?)?;
        decode_member(&response.text()?)
    }

    /// Delete a member record
    pub fn delete_member(&self, id: u64) -> Result<()> {
        let url = self.member_url(id);
        log::debug!("DELETE {url}");
        check_status(self.client.delete(&url).send()?)?;
        Ok(())
    }
}

fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let body = response.text().unwrap_or_default();
        Err(Error::api(status.as_u16(), body))
    }
}

/// Decode a member collection, accepting both a bare array and the
/// `{"data": [...]}` envelope the directory's fixtures use.
pub fn decode_member_list(body: &str) -> Result<Vec<Member>> {
    let payload: MemberPayload = serde_json::from_str(body)?;
    Ok(payload.into_members())
}

/// Decode a single member record
pub fn decode_member(body: &str) -> Result<Member> {
    Ok(serde_json::from_str(body)?)
}
