//! Structured tool errors
//!
//! Errors are values. A failing tool call returns one of these to the
//! caller with a machine-readable code and, where possible, a hint about
//! which inputs would have been accepted.

use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const ARG_TYPE: &str = "ARG_TYPE";
    pub const MISSING_ARG: &str = "MISSING_ARG";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
    pub const UNKNOWN_CURRENCY: &str = "UNKNOWN_CURRENCY";
    pub const UNKNOWN_TOOL: &str = "UNKNOWN_TOOL";
    pub const DOMAIN_ERROR: &str = "DOMAIN_ERROR";
}

/// Structured error returned from tool calls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ToolError {
    /// Create a new error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    // ========== Common Error Constructors ==========

    pub fn arg_type(tool: &str, arg: &str, expected: &str, got: &str) -> Self {
        Self::new(codes::ARG_TYPE,
            format!("{}() argument '{}': expected {}, got {}", tool, arg, expected, got))
    }

    pub fn missing_arg(tool: &str, arg: &str) -> Self {
        Self::new(codes::MISSING_ARG, format!("{}() missing required argument '{}'", tool, arg))
    }

    pub fn unknown_unit(category: &str, unit: &str, valid: &[&str]) -> Self {
        Self::new(codes::UNKNOWN_UNIT,
            format!("Unknown unit '{}' for category '{}'", unit, category))
            .with_suggestion(format!("Valid units: {}", valid.join(", ")))
    }

    pub fn unknown_category(name: &str, valid: &[&str]) -> Self {
        Self::new(codes::UNKNOWN_CATEGORY, format!("Unknown category: {}", name))
            .with_suggestion(format!("Valid categories: {}", valid.join(", ")))
    }

    pub fn unknown_currency(code: &str, valid: &[&str]) -> Self {
        Self::new(codes::UNKNOWN_CURRENCY, format!("Unknown currency: {}", code))
            .with_suggestion(format!("Valid currencies: {}", valid.join(", ")))
    }

    pub fn unknown_tool(name: &str) -> Self {
        Self::new(codes::UNKNOWN_TOOL, format!("Unknown tool: {}", name))
            .with_suggestion("Use tools/list or tools/search to find available tools")
    }

    pub fn domain_error(details: impl Into<String>) -> Self {
        Self::new(codes::DOMAIN_ERROR, format!("Domain error: {}", details.into()))
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ToolError {}
