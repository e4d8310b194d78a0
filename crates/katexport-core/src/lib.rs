//! katexport Core Library
//!
//! This crate provides the value types and error handling shared by the
//! Kat Mesh and Kat Animation exporters.

pub mod error;
pub mod types;

pub use error::{Error, Result, ResultExt};
pub use types::*;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::error::{Error, Result, ResultExt};
    pub use crate::types::*;
}
