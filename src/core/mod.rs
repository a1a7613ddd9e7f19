//! Contextual errors and their frame trails

pub mod cause;
pub mod chain;
pub mod error;
#[macro_use]
mod macros;

pub use cause::Cause;
pub use chain::{chain_in_place, chain_into, OptionExt, ResultExt};
pub use error::ContextError;
