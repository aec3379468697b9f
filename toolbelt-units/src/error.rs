//! Conversion errors

use crate::{currency, Category};
use thiserror::Error;
use toolbelt_core::ToolError;

/// Errors that can occur during conversion
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// Unit symbol is not in the category's table
    #[error("unknown unit '{unit}' for category '{category}'")]
    UnknownUnit { category: Category, unit: String },

    /// Category name did not parse
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// Currency code is not in the rate table
    #[error("unknown currency: {0}")]
    UnknownCurrency(String),
}

impl ConvertError {
    pub(crate) fn unknown_unit(category: Category, unit: &str) -> Self {
        ConvertError::UnknownUnit { category, unit: unit.to_string() }
    }
}

impl From<ConvertError> for ToolError {
    fn from(err: ConvertError) -> Self {
        match err {
            ConvertError::UnknownUnit { category, unit } => {
                ToolError::unknown_unit(category.name(), &unit, &category.units())
            }
            ConvertError::UnknownCategory(name) => {
                let valid: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
                ToolError::unknown_category(&name, &valid)
            }
            ConvertError::UnknownCurrency(code) => {
                ToolError::unknown_currency(&code, &currency::codes())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolbelt_core::codes;

    #[test]
    fn test_display() {
        let err = ConvertError::unknown_unit(Category::Length, "parsecs");
        assert_eq!(err.to_string(), "unknown unit 'parsecs' for category 'length'");
        assert_eq!(ConvertError::UnknownCategory("area".into()).to_string(), "unknown category: area");
    }

    #[test]
    fn test_into_tool_error() {
        let err: ToolError = ConvertError::unknown_unit(Category::Weight, "stone").into();
        assert_eq!(err.code, codes::UNKNOWN_UNIT);
        assert_eq!(err.suggestion.as_deref(), Some("Valid units: kg, g, mg, lb, oz"));

        let err: ToolError = ConvertError::UnknownCategory("area".into()).into();
        assert_eq!(err.code, codes::UNKNOWN_CATEGORY);
        assert_eq!(err.suggestion.as_deref(), Some("Valid categories: length, weight, volume, temperature"));

        let err: ToolError = ConvertError::UnknownCurrency("XYZ".into()).into();
        assert_eq!(err.code, codes::UNKNOWN_CURRENCY);
        assert!(err.suggestion.unwrap().starts_with("Valid currencies: USD, EUR"));
    }
}
