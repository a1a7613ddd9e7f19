//! The contextual error value and its frame-chain operations

use std::fmt;

use tracing::trace;

use super::cause::Cause;
use crate::models::{Frame, Location};
use crate::output::{render_detailed, render_summary};

/// An error that carries the trail of every place it was raised or re-annotated.
///
/// The base frame is the most recent context. Child frames are inherited from
/// errors this value superseded, oldest merges first, each merged error's base
/// immediately followed by its own children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextError {
    base: Frame,
    children: Vec<Frame>,
    summary: String,
}

impl ContextError {
    /// Create an error with a single base frame. A `code` of 0 means "no code".
    pub fn new(message: impl Into<String>, code: i32, location: Location) -> Self {
        Self::from_base(Frame::new(message, code, location))
    }

    /// Create an error that supersedes `cause`.
    ///
    /// A structured cause contributes its whole trail as child frames. A
    /// foreign cause has no frames, so its description is appended to the new
    /// message instead and the trail stays empty.
    pub fn wrap(
        message: impl Into<String>,
        code: i32,
        location: Location,
        cause: impl Into<Cause>,
    ) -> Self {
        let mut base = Frame::new(message, code, location);
        match cause.into() {
            Cause::Structured(inner) => {
                let mut err = Self::from_base(base);
                err.merge(inner);
                err
            }
            foreign => {
                base.absorb_description(foreign.description());
                Self::from_base(base)
            }
        }
    }

    fn from_base(base: Frame) -> Self {
        let summary = render_summary(&base);
        Self {
            base,
            children: Vec::new(),
            summary,
        }
    }

    /// Append `other`'s base frame and then its children to this trail.
    ///
    /// Depths are renumbered afterwards so `children[i].depth() == i + 1`.
    pub fn merge(&mut self, other: ContextError) {
        let ContextError { base, children, .. } = other;
        self.children.reserve(children.len() + 1);
        self.children.push(base);
        self.children.extend(children);
        self.normalize_child_depth();
        trace!(children = self.children.len(), "merged error trail");
    }

    /// Supersede this error with a new base frame, keeping it as the first cause
    pub fn chain(self, message: impl Into<String>, code: i32, location: Location) -> Self {
        let mut outer = Self::new(message, code, location);
        outer.merge(self);
        outer
    }

    fn normalize_child_depth(&mut self) {
        for (index, frame) in self.children.iter_mut().enumerate() {
            frame.set_depth(index + 1);
        }
    }

    pub fn message(&self) -> &str {
        self.base.message()
    }

    /// Code of the base frame, 0 when none was given
    pub fn code(&self) -> i32 {
        self.base.code()
    }

    pub fn file(&self) -> &str {
        self.base.file()
    }

    pub fn line(&self) -> u32 {
        self.base.line()
    }

    pub fn function(&self) -> &str {
        self.base.function()
    }

    pub fn location(&self) -> &Location {
        self.base.location()
    }

    pub fn base_frame(&self) -> &Frame {
        &self.base
    }

    pub(crate) fn child_frames(&self) -> &[Frame] {
        &self.children
    }

    /// One-line rendering of the base frame, computed at construction
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Base frame followed by one indented line per inherited frame
    pub fn detailed_message(&self) -> String {
        render_detailed(self)
    }
}

impl fmt::Display for ContextError {
    /// `{}` prints the one-line summary, `{:#}` the full trail.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&self.detailed_message())
        } else {
            f.write_str(&self.summary)
        }
    }
}

impl std::error::Error for ContextError {}
