//! Configuration file and environment sources

use std::path::{Path, PathBuf};

use super::{parser, ConfigSource};
use crate::error::{Result, TrailError};
use crate::models::config::PartialRenderSettings;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".frametrail.toml";

/// Default environment variable prefix
pub const DEFAULT_ENV_PREFIX: &str = "FRAMETRAIL";

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
    name: String,
    priority: u8,
}

impl FileConfig {
    /// Create a new file configuration source with the default path
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_FILE),
            name: "default config file".to_string(),
            priority: 10, // Lower priority than environment variables
        }
    }

    /// Create a new file configuration source with a custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name: format!("config file ({})", path.as_ref().display()),
            priority: 10,
        }
    }

    /// Set the priority for this configuration source
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    /// Get the path of this configuration file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a default configuration file at this location
    pub fn create_default(&self) -> Result<()> {
        parser::create_default_config(&self.path)
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialRenderSettings> {
        if !self.is_available() {
            return Err(TrailError::ConfigNotFound {
                path: self.path.clone(),
            });
        }

        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Environment variable configuration source
///
/// Reads `<PREFIX>_INDENT`, `<PREFIX>_COLORS` and `<PREFIX>_MAX_CHILD_FRAMES`.
pub struct EnvConfig {
    prefix: String,
    name: String,
    priority: u8,
}

impl EnvConfig {
    /// Create a new environment variable configuration source
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            name: format!("{} environment variables", &prefix),
            prefix,
            priority: 20, // Overrides any config file
        }
    }

    /// Set the priority for this configuration source
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    fn var_name(&self, key: &str) -> String {
        format!("{}_{}", self.prefix, key)
    }

    fn var(&self, key: &str) -> Option<String> {
        std::env::var(self.var_name(key)).ok()
    }

    fn parse_usize(&self, key: &str) -> Result<Option<usize>> {
        match self.var(key) {
            Some(value) => value.trim().parse().map(Some).map_err(|_| {
                TrailError::config_error(format!(
                    "{} must be a non-negative integer, got '{}'",
                    self.var_name(key),
                    value
                ))
            }),
            None => Ok(None),
        }
    }

    fn parse_bool(&self, key: &str) -> Result<Option<bool>> {
        match self.var(key) {
            Some(value) => match value.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(Some(true)),
                "0" | "false" | "no" | "off" => Ok(Some(false)),
                _ => Err(TrailError::config_error(format!(
                    "{} must be a boolean, got '{}'",
                    self.var_name(key),
                    value
                ))),
            },
            None => Ok(None),
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENV_PREFIX)
    }
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialRenderSettings> {
        Ok(PartialRenderSettings {
            indent: self.parse_usize("INDENT")?,
            use_colors: self.parse_bool("COLORS")?,
            max_child_frames: self.parse_usize("MAX_CHILD_FRAMES")?,
        })
    }

    fn is_available(&self) -> bool {
        ["INDENT", "COLORS", "MAX_CHILD_FRAMES"]
            .iter()
            .any(|key| self.var(key).is_some())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
