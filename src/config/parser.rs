//! Configuration file parsing utilities

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::file::DEFAULT_CONFIG_FILE;
use super::settings::SettingsValidator;
use crate::error::{Result, TrailError};
use crate::models::config::PartialRenderSettings;

/// Parse a TOML configuration file into PartialRenderSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialRenderSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(TrailError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| TrailError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialRenderSettings
pub fn parse_config_content<P: AsRef<Path>>(
    content: &str,
    path: P,
) -> Result<PartialRenderSettings> {
    let path = path.as_ref();

    let settings: PartialRenderSettings =
        toml::from_str(content).map_err(|e| TrailError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    SettingsValidator::validate_partial(&settings).map_err(|e| match e {
        TrailError::Config { message } => {
            TrailError::config_error(format!("{} in config file: {}", message, path.display()))
        }
        other => other,
    })?;

    debug!(path = %path.display(), "loaded render settings");
    Ok(settings)
}

/// Locations searched for a configuration file, in order
pub fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(DEFAULT_CONFIG_FILE)];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("frametrail").join("config.toml"));
    }
    paths
}

/// Find and load configuration from default locations
pub fn find_default_config() -> Result<Option<PartialRenderSettings>> {
    find_config_in(&default_config_paths())
}

/// Load the first of `paths` that exists as a file
pub fn find_config_in(paths: &[PathBuf]) -> Result<Option<PartialRenderSettings>> {
    for path in paths {
        if path.is_file() {
            return Ok(Some(parse_config_file(path)?));
        }
    }
    Ok(None)
}

/// Create a default configuration file at the specified path
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, include_str!("default_config.toml"))?;
    Ok(())
}
