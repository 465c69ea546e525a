use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_METADATA_REPO_URL: &str = "https://contractrepo.komputing.org/contract/byChainId/";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

const CONFIG_ENV: &str = "USERDOC_CONFIG";
const APP_DIR: &str = "userdoc";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Candidate metadata repositories; only the first one is queried
    pub metadata_repo_urls: Vec<String>,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            metadata_repo_urls: vec![DEFAULT_METADATA_REPO_URL.to_string()],
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("userdoc/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Load the config file, falling back to defaults when absent or invalid
pub fn load() -> ResolverConfig {
    let Some(path) = config_path() else {
        return ResolverConfig::default();
    };
    if !path.exists() {
        return ResolverConfig::default();
    }
    match load_from(&path) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "using default resolver config");
            ResolverConfig::default()
        }
    }
}

pub fn load_from(path: &Path) -> Result<ResolverConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse(&content).with_context(|| format!("invalid config in {}", path.display()))
}

pub fn parse(content: &str) -> Result<ResolverConfig> {
    Ok(toml::from_str::<ResolverConfig>(content)?)
}

/// `$USERDOC_CONFIG` when set, otherwise `userdoc/config.toml` in the user config dir
pub fn config_path() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .or_else(user_config_path)
}

fn user_config_path() -> Option<PathBuf> {
    let unix_config_dir = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")));

    match unix_config_dir {
        Some(dir) => Some(dir.join(APP_DIR).join(CONFIG_FILE)),
        None => directories::ProjectDirs::from("org", APP_DIR, APP_DIR)
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE)),
    }
}
