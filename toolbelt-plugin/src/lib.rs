//! Toolbelt Plugin System
//!
//! Every widget is a `ToolPlugin`: static metadata plus a JSON-in,
//! JSON-out `call`. Tools are collected in a `ToolRegistry`, which handles
//! lookup, search, and dispatch.

mod traits;
mod registry;
pub mod args;

pub use traits::{ToolPlugin, ToolMeta, ToolCategory, ArgMeta};
pub use registry::ToolRegistry;

/// Re-export core types for plugin authors
pub mod prelude {
    pub use crate::{ToolPlugin, ToolMeta, ToolCategory, ArgMeta, ToolRegistry};
    pub use crate::args::{require_number, require_text, optional_text, json_type_name};
    pub use toolbelt_core::prelude::*;
    pub use serde_json::{json, Value as JsonValue};
}
