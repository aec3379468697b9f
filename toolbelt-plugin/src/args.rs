//! Argument extraction for JSON tool calls

use serde_json::Value as JsonValue;
use toolbelt_core::ToolError;

/// Type name of a JSON value, for error messages
pub fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "Null",
        JsonValue::Bool(_) => "Bool",
        JsonValue::Number(_) => "Number",
        JsonValue::String(_) => "Text",
        JsonValue::Array(_) => "List",
        JsonValue::Object(_) => "Object",
    }
}

/// Extract a finite number. Numeric strings are accepted, as form inputs send them.
pub fn require_number(args: &JsonValue, tool: &str, arg: &str) -> Result<f64, ToolError> {
    let value = args.get(arg).ok_or_else(|| ToolError::missing_arg(tool, arg))?;
    let number = match value {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse::<f64>().ok(),
        JsonValue::Null => return Err(ToolError::missing_arg(tool, arg)),
        other => return Err(ToolError::arg_type(tool, arg, "Number", json_type_name(other))),
    };
    match number {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(ToolError::arg_type(tool, arg, "finite Number", json_type_name(value))),
    }
}

/// Extract a required text argument
pub fn require_text<'a>(args: &'a JsonValue, tool: &str, arg: &str) -> Result<&'a str, ToolError> {
    match args.get(arg) {
        Some(JsonValue::String(s)) => Ok(s.as_str()),
        Some(JsonValue::Null) | None => Err(ToolError::missing_arg(tool, arg)),
        Some(other) => Err(ToolError::arg_type(tool, arg, "Text", json_type_name(other))),
    }
}

/// Extract optional text. Missing, null, or blank is `None`; any other non-text value is an error.
pub fn optional_text<'a>(args: &'a JsonValue, tool: &str, arg: &str) -> Result<Option<&'a str>, ToolError> {
    match args.get(arg) {
        Some(JsonValue::String(s)) => {
            let s = s.trim();
            Ok(if s.is_empty() { None } else { Some(s) })
        }
        Some(JsonValue::Null) | None => Ok(None),
        Some(other) => Err(ToolError::arg_type(tool, arg, "Text", json_type_name(other))),
    }
}
