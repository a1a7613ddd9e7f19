//! What a new contextual error can supersede

use std::error::Error as StdError;
use std::fmt;

use super::error::ContextError;

/// The error being wrapped, decided when the wrap happens.
///
/// Only `Structured` causes carry a frame trail. Anything else degrades to the
/// text of its `Display` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cause {
    /// Another contextual error, whose frames are merged into the new one
    Structured(ContextError),
    /// Description of an error of any other type
    Foreign(String),
}

impl Cause {
    /// Flatten anything displayable into a foreign cause
    pub fn foreign(err: impl fmt::Display) -> Self {
        Cause::Foreign(err.to_string())
    }

    /// Classify a type-erased error, recovering the trail if it is a `ContextError`
    pub fn from_boxed(err: Box<dyn StdError + Send + Sync>) -> Self {
        match err.downcast::<ContextError>() {
            Ok(err) => Cause::Structured(*err),
            Err(other) => Cause::Foreign(other.to_string()),
        }
    }

    /// Text used when the cause is folded into a message
    pub fn description(&self) -> &str {
        match self {
            Cause::Structured(err) => err.summary(),
            Cause::Foreign(description) => description,
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, Cause::Structured(_))
    }
}

// Cause itself is not an Error, so this does not overlap the reflexive impl.
impl<E> From<E> for Cause
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: E) -> Self {
        Cause::from_boxed(Box::new(err))
    }
}
