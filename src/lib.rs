//! frametrail - errors that remember every place they passed through
//!
//! A failing operation raises a [`ContextError`] recording where and why it
//! failed. Every layer that propagates it can attach its own short message,
//! and the error keeps the whole trail of frames underneath:
//!
//! ```
//! use frametrail::{context_error, wrap_context_error, ContextError};
//!
//! fn open() -> Result<(), ContextError> {
//!     Err(context_error!("open failed", 2))
//! }
//!
//! fn init() -> Result<(), ContextError> {
//!     open().map_err(|e| wrap_context_error!(e, "init failed"))
//! }
//!
//! let err = init().unwrap_err();
//! assert_eq!(err.message(), "init failed");
//! assert_eq!(err.detailed_message().lines().count(), 2);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;

// Re-export commonly used types
pub use crate::core::{chain_in_place, chain_into, Cause, ContextError, OptionExt, ResultExt};
pub use error::{Result, TrailError};
pub use models::{Frame, Location, RenderSettings};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
