//! Configuration for the member directory connection.
//!
//! Settings come from the nearest `.memberdash.toml` found walking up from
//! the current directory. The API base URL can also arrive via the
//! `--api-base` flag or the `MEMBERDASH_API_BASE` environment variable (both
//! handled by the CLI layer), which take precedence over the file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default directory endpoint, a local development server.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

const CONFIG_FILE_NAME: &str = ".memberdash.toml";

/// Root configuration structure for memberdash
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MemberdashConfig {
    /// Member directory API settings
    #[serde(default)]
    pub api: Option<ApiConfig>,
}

/// Connection settings for the member directory API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the directory service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Pure function to parse and validate config from TOML string
pub fn parse_config(contents: &str) -> Result<MemberdashConfig, String> {
    let mut config = toml::from_str::<MemberdashConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))?;

    if let Some(ref mut api) = config.api {
        if api.timeout_secs == 0 {
            eprintln!("Warning: api.timeout_secs must be positive. Using default.");
            api.timeout_secs = default_timeout_secs();
        }
        if api.base_url.trim().is_empty() {
            eprintln!("Warning: api.base_url is empty. Using default.");
            api.base_url = default_base_url();
        }
    }

    Ok(config)
}

/// Try loading config from a specific path, tolerating absence and bad input
fn try_load_config_from_path(config_path: &Path) -> Option<MemberdashConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to read config file {}: {}", config_path.display(), e);
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: {}. Using defaults.", e);
            None
        }
    }
}

/// Directory ancestors of `start`, up to a depth limit
fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load configuration from the nearest `.memberdash.toml`, if any
pub fn load_config() -> MemberdashConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!("Failed to get current directory: {}. Using default config.", e);
            return MemberdashConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_default()
}

/// Resolve the effective API settings: an explicit base URL (flag or
/// environment, already merged by the CLI layer) wins over the config file,
/// which wins over the default.
pub fn resolve_api(explicit_base: Option<&str>) -> ApiConfig {
    let mut api = load_config().api.unwrap_or_default();
    if let Some(base) = explicit_base {
        api.base_url = base.to_string();
    }
    api
}
