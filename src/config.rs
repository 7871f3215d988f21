use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ReleaseGateError, Result};

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "release-gate.toml";

/// Represents the complete configuration for release-gate.
///
/// Only the collaborators around the validator are configurable; the
/// transition rules themselves are fixed.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub manifest: ManifestConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

fn default_manifest_path() -> PathBuf {
    PathBuf::from("package.json")
}

fn default_output_key() -> String {
    "is-prerelease".to_string()
}

/// Where the current version is read from.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ManifestConfig {
    #[serde(default = "default_manifest_path")]
    pub path: PathBuf,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        ManifestConfig {
            path: default_manifest_path(),
        }
    }
}

/// How the verdict is reported to the CI runner.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Key of the `key=value` line carrying the prerelease flag
    #[serde(default = "default_output_key")]
    pub key: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            key: default_output_key(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(text).map_err(|e| ReleaseGateError::config(e.to_string()))?;

        if config.output.key.trim().is_empty() {
            return Err(ReleaseGateError::config("output.key must not be empty"));
        }
        if config.output.key.contains('=') || config.output.key.contains('\n') {
            return Err(ReleaseGateError::config(format!(
                "output.key \"{}\" must not contain '=' or newlines",
                config.output.key
            )));
        }

        Ok(config)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `release-gate.toml` in current directory
/// 3. `.release-gate.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match locate_config(config_path) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            let text = fs::read_to_string(&path).map_err(|e| {
                ReleaseGateError::config(format!("cannot read {}: {}", path.display(), e))
            })?;
            Config::from_toml(&text)
        }
        None => {
            tracing::debug!("no configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn locate_config(config_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(path.to_path_buf());
    }

    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(format!(".{}", CONFIG_FILE_NAME)))
        .filter(|path| path.exists())
}
