//! Configuration management for report rendering

pub mod file;
pub mod parser;
pub mod settings;

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Result, TrailError};
use crate::models::config::{PartialRenderSettings, RenderSettings};

pub use file::{EnvConfig, FileConfig, DEFAULT_CONFIG_FILE, DEFAULT_ENV_PREFIX};
pub use parser::{
    create_default_config, default_config_paths, find_config_in, find_default_config,
    parse_config_content, parse_config_file,
};
pub use settings::SettingsValidator;

/// Trait for configuration sources
pub trait ConfigSource {
    /// Load configuration from this source
    fn load(&self) -> Result<PartialRenderSettings>;

    /// Check if this configuration source is available
    fn is_available(&self) -> bool;

    /// Get the name of this configuration source for logging
    fn name(&self) -> &str;

    /// Get the priority of this source (higher numbers take precedence)
    fn priority(&self) -> u8 {
        10
    }
}

/// Configuration builder for merging multiple sources
pub struct ConfigBuilder {
    partial: PartialRenderSettings,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            partial: PartialRenderSettings::default(),
        }
    }

    /// Merge settings from a partial configuration
    pub fn merge(mut self, partial: PartialRenderSettings) -> Self {
        self.partial.merge_from(partial);
        self
    }

    /// Load and merge settings from a configuration source
    pub fn load_from<S: ConfigSource + ?Sized>(self, source: &S) -> Result<Self> {
        if source.is_available() {
            debug!(source = source.name(), "loading render settings");
            Ok(self.merge(source.load()?))
        } else {
            Ok(self)
        }
    }

    /// Try to load from a source, ignoring it if unavailable or broken
    pub fn try_load_from<S: ConfigSource + ?Sized>(self, source: &S) -> Self {
        if !source.is_available() {
            return self;
        }
        match source.load() {
            Ok(partial) => self.merge(partial),
            Err(e) => {
                warn!(source = source.name(), error = %e, "ignoring configuration source");
                self
            }
        }
    }

    /// Load several sources, lowest priority first so higher ones win
    pub fn load_by_priority(mut self, sources: &[&dyn ConfigSource]) -> Result<Self> {
        let mut ordered = sources.to_vec();
        ordered.sort_by_key(|source| source.priority());
        for source in ordered {
            self = self.load_from(source)?;
        }
        Ok(self)
    }

    /// Try to add configuration from the default config file locations
    pub fn try_add_default_config_file(self) -> Self {
        self.try_add_config_search(&parser::default_config_paths())
    }

    /// Merge the first config file found among `paths`, ignoring a broken one
    pub fn try_add_config_search(self, paths: &[PathBuf]) -> Self {
        match parser::find_config_in(paths) {
            Ok(Some(found)) => self.merge(found),
            Ok(None) => self,
            Err(e) => {
                warn!(error = %e, "ignoring default configuration file");
                self
            }
        }
    }

    /// Build the final settings with validation
    pub fn build(self) -> Result<RenderSettings> {
        let settings = self.partial.to_settings();
        SettingsValidator::validate(&settings)?;
        Ok(settings)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Load render settings from the first default config file found, then
/// `FRAMETRAIL_*` environment variables; the environment takes precedence
pub fn load_config() -> Result<RenderSettings> {
    load_config_with(&default_config_paths(), &EnvConfig::default())
}

/// Same as [`load_config`] with explicit search paths and environment source
pub fn load_config_with(search_paths: &[PathBuf], env: &EnvConfig) -> Result<RenderSettings> {
    ConfigBuilder::new()
        .try_add_config_search(search_paths)
        .load_from(env)?
        .build()
}

/// Load render settings from an explicit file and the environment
pub fn load_config_from(path: impl AsRef<Path>) -> Result<RenderSettings> {
    let file = FileConfig::with_path(path);
    if !file.is_available() {
        return Err(TrailError::ConfigNotFound {
            path: file.path().to_path_buf(),
        });
    }
    let env = EnvConfig::default();
    let sources: [&dyn ConfigSource; 2] = [&file, &env];
    ConfigBuilder::new().load_by_priority(&sources)?.build()
}
