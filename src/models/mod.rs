//! Data models and structures for frametrail

pub mod config;
pub mod frame;
pub mod location;

pub use config::{PartialRenderSettings, RenderSettings};
pub use frame::Frame;
pub use location::Location;
