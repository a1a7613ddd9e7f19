//! Render settings validation

use crate::error::{Result, TrailError};
use crate::models::config::{PartialRenderSettings, RenderSettings};

/// Widest child indentation accepted
pub const MAX_INDENT: usize = 16;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &RenderSettings) -> Result<()> {
        Self::validate_indent(settings.indent)?;
        if let Some(max) = settings.max_child_frames {
            Self::validate_max_child_frames(max)?;
        }
        Ok(())
    }

    /// Validate only the fields present in a partial configuration
    pub fn validate_partial(settings: &PartialRenderSettings) -> Result<()> {
        if let Some(indent) = settings.indent {
            Self::validate_indent(indent)?;
        }
        if let Some(max) = settings.max_child_frames {
            Self::validate_max_child_frames(max)?;
        }
        Ok(())
    }

    fn validate_indent(indent: usize) -> Result<()> {
        if indent > MAX_INDENT {
            return Err(TrailError::config_error(format!(
                "indent {} is wider than the maximum of {}",
                indent, MAX_INDENT
            )));
        }
        Ok(())
    }

    fn validate_max_child_frames(max: usize) -> Result<()> {
        if max == 0 {
            return Err(TrailError::config_error(
                "max_child_frames must be at least 1",
            ));
        }
        Ok(())
    }
}
