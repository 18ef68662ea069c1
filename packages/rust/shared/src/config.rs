//! Application configuration for dashpatch.
//!
//! User config lives at `~/.dashpatch/dashpatch.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DashpatchError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "dashpatch.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".dashpatch";

/// The student dashboard page, relative to the project root.
pub const DEFAULT_TARGET_PATH: &str = "docs/frontend-guiding/student-dashboard-refactored.html";

// ---------------------------------------------------------------------------
// Config structs (matching dashpatch.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Target file settings.
    #[serde(default)]
    pub target: TargetConfig,
}

/// `[target]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// File to patch in place.
    #[serde(default = "default_target_path")]
    pub path: PathBuf,

    /// Skip the write-back when no step changed anything.
    #[serde(default)]
    pub skip_unchanged: bool,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            path: default_target_path(),
            skip_unchanged: false,
        }
    }
}

fn default_target_path() -> PathBuf {
    PathBuf::from(DEFAULT_TARGET_PATH)
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.dashpatch/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| DashpatchError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.dashpatch/dashpatch.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not
/// exist or the home directory cannot be resolved.
pub fn load_config() -> Result<AppConfig> {
    load_optional_config(config_file_path().ok().as_deref())
}

/// Load from `path` when it names an existing file, otherwise use defaults.
fn load_optional_config(path: Option<&Path>) -> Result<AppConfig> {
    let Some(path) = path else {
        tracing::debug!("home directory not found, using default config");
        return Ok(AppConfig::default());
    };

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| DashpatchError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        DashpatchError::config(format!("failed to parse {}: {e}", path.display()))
    })
}
