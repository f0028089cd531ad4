use anyhow::{Context, Result};
use std::path::Path;

use crate::config::ApiConfig;
use crate::core::MemberDraft;
use crate::directory::DirectoryClient;

pub fn create_member(api: &ApiConfig, file: &Path) -> Result<()> {
    let draft = read_draft(file)?;
    let client = DirectoryClient::new(api)?;
    let member = client.create_member(&draft)?;

    println!("Created member {} ({})", member.id, member.full_name());
    Ok(())
}

pub(crate) fn read_draft(file: &Path) -> Result<MemberDraft> {
    let contents = crate::io::read_file(file)
        .with_context(|| format!("Failed to read draft from {}", file.display()))?;
    let draft = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse draft from {}", file.display()))?;
    Ok(draft)
}
