//! Error handling for frametrail's own operations
//!
//! Configuration loading and report writing fail with [`TrailError`]. A
//! `TrailError` converts into a foreign [`crate::Cause`], so callers can wrap
//! it like any other error.

pub mod types;

pub use types::{Result, TrailError};
