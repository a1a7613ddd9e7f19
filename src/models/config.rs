//! Configuration-related data structures

use serde::{Deserialize, Serialize};

use crate::output::DEFAULT_INDENT;

/// Settings that control how error reports are rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Number of spaces before each child frame line
    pub indent: usize,

    /// Whether to color reports with ANSI escapes
    pub use_colors: bool,

    /// Maximum number of child frames to print before eliding the rest
    pub max_child_frames: Option<usize>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            use_colors: false,
            max_child_frames: None,
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialRenderSettings {
    pub indent: Option<usize>,
    pub use_colors: Option<bool>,
    pub max_child_frames: Option<usize>,
}

impl PartialRenderSettings {
    /// Merge another PartialRenderSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialRenderSettings) {
        if other.indent.is_some() {
            self.indent = other.indent;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
        if other.max_child_frames.is_some() {
            self.max_child_frames = other.max_child_frames;
        }
    }

    /// Fill unspecified fields with defaults
    pub fn to_settings(&self) -> RenderSettings {
        let defaults = RenderSettings::default();
        RenderSettings {
            indent: self.indent.unwrap_or(defaults.indent),
            use_colors: self.use_colors.unwrap_or(defaults.use_colors),
            max_child_frames: self.max_child_frames.or(defaults.max_child_frames),
        }
    }
}
