//! Plugin traits

use serde::Serialize;
use serde_json::Value as JsonValue;
use std::fmt;
use toolbelt_core::ToolError;

/// Metadata about a tool argument
#[derive(Debug, Clone, Serialize)]
pub struct ArgMeta {
    pub name: &'static str,
    pub typ: &'static str,
    pub description: &'static str,
    pub optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
}

impl ArgMeta {
    pub const fn required(name: &'static str, typ: &'static str, description: &'static str) -> Self {
        Self { name, typ, description, optional: false, default: None }
    }

    pub const fn optional(name: &'static str, typ: &'static str, description: &'static str, default: &'static str) -> Self {
        Self { name, typ, description, optional: true, default: Some(default) }
    }
}

/// Sidebar grouping of tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ToolCategory {
    #[serde(rename = "AI & Smart")]
    Ai,
    #[serde(rename = "Converters")]
    Converter,
    #[serde(rename = "Calculators")]
    Calculator,
    #[serde(rename = "Text & Code")]
    Text,
    #[serde(rename = "Generators")]
    Generator,
    #[serde(rename = "Media & Image")]
    Media,
    #[serde(rename = "Date & Time")]
    Date,
}

impl ToolCategory {
    pub const ALL: [ToolCategory; 7] = [
        ToolCategory::Ai,
        ToolCategory::Converter,
        ToolCategory::Calculator,
        ToolCategory::Text,
        ToolCategory::Generator,
        ToolCategory::Media,
        ToolCategory::Date,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            ToolCategory::Ai => "AI & Smart",
            ToolCategory::Converter => "Converters",
            ToolCategory::Calculator => "Calculators",
            ToolCategory::Text => "Text & Code",
            ToolCategory::Generator => "Generators",
            ToolCategory::Media => "Media & Image",
            ToolCategory::Date => "Date & Time",
        }
    }

    /// Match a label case-insensitively
    pub fn from_label(label: &str) -> Option<ToolCategory> {
        let label = label.trim();
        Self::ALL.into_iter().find(|c| c.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Metadata for a tool plugin
#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub category: ToolCategory,
    pub keywords: &'static [&'static str],
    pub args: &'static [ArgMeta],
    pub returns: &'static str,
    pub examples: &'static [&'static str],
}

impl ToolMeta {
    /// Case-insensitive substring match on name, description or any keyword.
    /// `query` must already be lowercase.
    pub(crate) fn matches(&self, query: &str) -> bool {
        query.is_empty()
            || self.name.to_lowercase().contains(query)
            || self.description.to_lowercase().contains(query)
            || self.keywords.iter().any(|k| k.to_lowercase().contains(query))
    }
}

/// Pure tool: reads its arguments, computes, returns a JSON result
pub trait ToolPlugin: Send + Sync {
    fn meta(&self) -> ToolMeta;
    fn call(&self, args: &JsonValue) -> Result<JsonValue, ToolError>;
}
