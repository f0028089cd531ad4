use anyhow::Result;
use std::path::Path;

use crate::commands::create::read_draft;
use crate::config::ApiConfig;
use crate::directory::DirectoryClient;

pub fn update_member(api: &ApiConfig, id: u64, file: &Path) -> Result<()> {
    let draft = read_draft(file)?;
    let client = DirectoryClient::new(api)?;
    let member = client.update_member(id, &draft)?;

    println!("Updated member {} ({})", member.id, member.full_name());
    Ok(())
}
