//! Trace frames recorded by contextual errors

use std::num::NonZeroI32;

use super::location::Location;

/// One recorded `(message, code, location)` point in an error trail.
///
/// A frame is immutable once built. Its `depth` is 0 when it is the base frame
/// of an error and `index + 1` when it sits in another error's child trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    message: String,
    code: Option<NonZeroI32>,
    location: Location,
    depth: usize,
}

impl Frame {
    /// Create a base frame. A `code` of 0 means "no code".
    pub fn new(message: impl Into<String>, code: i32, location: Location) -> Self {
        Self {
            message: message.into(),
            code: NonZeroI32::new(code),
            location,
            depth: 0,
        }
    }

    /// Re-number the frame for its position in a child trail
    pub(crate) fn set_depth(&mut self, depth: usize) {
        self.depth = depth;
    }

    /// Fold a foreign error description into the message
    pub(crate) fn absorb_description(&mut self, description: &str) {
        if self.message.is_empty() {
            self.message = description.to_string();
        } else {
            self.message.push_str(", ");
            self.message.push_str(description);
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Numeric code, 0 when none was given
    pub fn code(&self) -> i32 {
        self.code.map_or(0, NonZeroI32::get)
    }

    pub fn has_code(&self) -> bool {
        self.code.is_some()
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn file(&self) -> &str {
        &self.location.file
    }

    pub fn line(&self) -> u32 {
        self.location.line
    }

    pub fn function(&self) -> &str {
        &self.location.function
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}
