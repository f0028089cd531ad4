use anyhow::Result;
use std::path::PathBuf;

use crate::cli;
use crate::config::ApiConfig;
use crate::directory::DirectoryClient;
use crate::io::output::create_writer;

pub fn list_members(
    api: &ApiConfig,
    format: cli::OutputFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let client = DirectoryClient::new(api)?;
    let members = client.list_members()?;

    let mut writer = create_writer(format.into(), output.as_deref())?;
    writer.write_members(&members)?;
    Ok(())
}
