use anyhow::Result;
use std::path::PathBuf;

use crate::cli;
use crate::config::ApiConfig;
use crate::directory::DirectoryClient;
use crate::io::output::create_writer;

pub fn show_member(
    api: &ApiConfig,
    id: u64,
    format: cli::OutputFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let client = DirectoryClient::new(api)?;
    let member = client.get_member(id)?;

    let mut writer = create_writer(format.into(), output.as_deref())?;
    writer.write_member(&member)?;
    Ok(())
}
