//! Toolbelt Core - Shared types
//!
//! This crate provides the types used across the Toolbelt crates:
//! - `ToolError`: Structured errors that cross the tool boundary
//! - `numeric`: Float comparison and fixed-decimal display helpers

mod error;
pub mod numeric;

pub use error::{ToolError, codes};
pub use numeric::{Tolerances, nearly_equal, format_fixed};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::ToolError;
    pub use crate::error::codes;
    pub use crate::numeric::{Tolerances, nearly_equal, format_fixed};
}
