use anyhow::{Context, Result};
use chrono::Utc;
use std::path::{Path, PathBuf};

use crate::cli;
use crate::config::ApiConfig;
use crate::core::stats::aggregate;
use crate::core::{Member, MemberPayload};
use crate::directory::DirectoryClient;
use crate::io::output::create_writer;

pub struct DashboardOptions {
    pub input: Option<PathBuf>,
    pub format: cli::OutputFormat,
    pub output: Option<PathBuf>,
    pub api: ApiConfig,
}

pub fn run_dashboard(options: DashboardOptions) -> Result<()> {
    let members = load_members(options.input.as_deref(), &options.api)?;
    let summary = aggregate(&members, Utc::now());

    let mut writer = create_writer(options.format.into(), options.output.as_deref())?;
    writer.write_summary(&summary)?;

    if let Some(path) = &options.output {
        log::info!("Report written to {}", path.display());
    }
    Ok(())
}

fn load_members(input: Option<&Path>, api: &ApiConfig) -> Result<Vec<Member>> {
    match input {
        Some(path) => {
            let contents = crate::io::read_file(path)
                .with_context(|| format!("Failed to read members from {}", path.display()))?;
            let payload: MemberPayload = serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse members from {}", path.display()))?;
            Ok(payload.into_members())
        }
        None => {
            let client = DirectoryClient::new(api)?;
            Ok(client.list_members()?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_members_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"data": [{{"id": 1, "first_name": "Amara"}}, {{"id": 2}}]}}"#
        )
        .unwrap();

        let members = load_members(Some(file.path()), &ApiConfig::default()).unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].first_name.as_deref(), Some("Amara"));
    }

    #[test]
    fn test_load_members_missing_file_is_an_error() {
        let result = load_members(
            Some(Path::new("/nonexistent/members.json")),
            &ApiConfig::default(),
        );
        assert!(result.is_err());
    }
}
