//! Re-annotating in-flight errors
//!
//! Each layer of a call chain either leaves an error alone or replaces it with
//! a new value that subsumes it. These helpers do the replacement without
//! manual move bookkeeping at the call site.

use tracing::debug;

use super::cause::Cause;
use super::error::ContextError;
use crate::models::Location;

/// Chain a new frame onto a held error.
///
/// An empty slot stays empty: the absence of an error never turns into one.
/// Otherwise the held error becomes the first cause of the returned value.
pub fn chain_into(
    slot: Option<ContextError>,
    message: impl Into<String>,
    code: i32,
    location: Location,
) -> Option<ContextError> {
    slot.map(|held| {
        debug!(file = %location.file, line = location.line, "chaining error context");
        held.chain(message, code, location)
    })
}

/// [`chain_into`] for an error held behind a mutable reference.
///
/// Returns the new value when the slot held an error.
pub fn chain_in_place<'a>(
    slot: &'a mut Option<ContextError>,
    message: impl Into<String>,
    code: i32,
    location: Location,
) -> Option<&'a ContextError> {
    *slot = chain_into(slot.take(), message, code, location);
    slot.as_ref()
}

/// Extension trait for `Result` to wrap its error with a new frame
pub trait ResultExt<T> {
    /// Wrap the error with a message
    fn context_at(self, location: Location, message: impl Into<String>) -> Result<T, ContextError>;

    /// Wrap the error with a message and code
    fn context_code_at(
        self,
        location: Location,
        message: impl Into<String>,
        code: i32,
    ) -> Result<T, ContextError>;

    /// Wrap the error with a lazily built message
    fn with_context_at<C, F>(self, location: Location, context: F) -> Result<T, ContextError>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<Cause>,
{
    fn context_at(self, location: Location, message: impl Into<String>) -> Result<T, ContextError> {
        self.context_code_at(location, message, 0)
    }

    fn context_code_at(
        self,
        location: Location,
        message: impl Into<String>,
        code: i32,
    ) -> Result<T, ContextError> {
        self.map_err(|err| ContextError::wrap(message, code, location, err))
    }

    fn with_context_at<C, F>(self, location: Location, context: F) -> Result<T, ContextError>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|err| ContextError::wrap(context(), 0, location, err))
    }
}

/// Extension trait for Option to raise a fresh error on `None`
pub trait OptionExt<T> {
    /// Convert `None` into an error raised at `location`
    fn context_at(self, location: Location, message: impl Into<String>) -> Result<T, ContextError>;
}

impl<T> OptionExt<T> for Option<T> {
    fn context_at(self, location: Location, message: impl Into<String>) -> Result<T, ContextError> {
        self.ok_or_else(|| ContextError::new(message, 0, location))
    }
}
