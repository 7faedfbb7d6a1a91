use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Runtime configuration. The API key is the only thing the adapter needs.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
}

#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    api_key: Option<String>,
}

fn config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".linear-tools")
        .join("config.toml")
}

fn load_file(path: &Path) -> Result<FileConfig> {
    if !path.exists() {
        return Ok(FileConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: FileConfig =
        toml::from_str(&contents).with_context(|| "Failed to parse config.toml")?;
    Ok(config)
}

impl Config {
    /// Loads the API key, preferring the `LINEAR_API_KEY` environment
    /// variable over `~/.linear-tools/config.toml`.
    pub fn load() -> Result<Self> {
        let env_key = std::env::var("LINEAR_API_KEY").ok();
        let path = config_path();
        let file = load_file(&path)?;
        Self::from_sources(env_key, file, &path)
    }

    fn from_sources(env_key: Option<String>, file: FileConfig, path: &Path) -> Result<Self> {
        if let Some(key) = env_key {
            let key = key.trim();
            if !key.is_empty() {
                return Ok(Self {
                    api_key: key.to_string(),
                });
            }
        }
        if let Some(key) = file.api_key {
            if !key.trim().is_empty() {
                return Ok(Self { api_key: key });
            }
        }
        bail!(
            "No Linear API key found. Set LINEAR_API_KEY or add api_key to {}",
            path.display()
        )
    }
}
