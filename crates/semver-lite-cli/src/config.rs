use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up from the working directory upward
pub const CONFIG_FILE: &str = "semver.toml";

/// The semver configuration file structure (semver.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SemverConfig {
    /// Output formatting
    pub format: FormatConfig,
}

/// Formatting configuration
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatConfig {
    /// Longest formatted version accepted, in bytes. Unbounded when absent.
    pub max_len: Option<usize>,
}

impl SemverConfig {
    /// Load configuration from semver.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<Self>> {
        match Self::find(start_dir) {
            Some(config_path) => {
                log::debug!("Reading {}", config_path.display());
                let content = std::fs::read_to_string(&config_path)
                    .with_context(|| format!("Failed to read {}", config_path.display()))?;
                let config: SemverConfig = toml::from_str(&content)
                    .with_context(|| format!("Failed to parse {}", config_path.display()))?;
                Ok(Some(config))
            }
            None => {
                log::debug!("No {} found above {}", CONFIG_FILE, start_dir.display());
                Ok(None)
            }
        }
    }

    /// Load configuration by searching upward from the current working directory
    pub fn load_from_cwd() -> Result<Option<Self>> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }

    fn find(start_dir: &Path) -> Option<PathBuf> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE);
            if config_path.is_file() {
                return Some(config_path);
            }

            // Reached filesystem root
            if !current.pop() {
                return None;
            }
        }
    }
}
