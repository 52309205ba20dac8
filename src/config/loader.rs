//! Configuration file discovery and loading.

use crate::config::schema::SetupConfig;
use crate::error::{Result, SetupError};
use std::fs;
use std::path::{Path, PathBuf};

/// Project-relative location of the optional config file.
pub const CONFIG_FILE: &str = ".oak/setup.yml";

/// Find the project config at `.oak/setup.yml`
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE);
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Load the setup configuration for a project.
///
/// An explicit path must exist. Without one, `.oak/setup.yml` is used if
/// present, otherwise the built-in defaults.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<SetupConfig> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_project_config(project_root),
    };

    match path {
        Some(path) => load_config_file(&path),
        None => {
            tracing::debug!("No config file found, using defaults");
            Ok(SetupConfig::default())
        }
    }
}

/// Load and parse a single config file.
pub fn load_config_file(path: &Path) -> Result<SetupConfig> {
    tracing::debug!("Loading config from {}", path.display());
    let content = fs::read_to_string(path)?;
    parse_config(&content, path)
}

/// Parse config content; `path` is only used in error messages.
pub fn parse_config(content: &str, path: &Path) -> Result<SetupConfig> {
    if content.trim().is_empty() {
        return Ok(SetupConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| SetupError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
