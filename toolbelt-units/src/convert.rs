//! The conversion entry points

use crate::{Category, ConvertError, Strategy};

/// Convert `value` from one unit to another within `category`.
///
/// Both units must belong to the category; `from_unit` is checked first.
/// Equal units return `value` unchanged. No rounding is applied, and
/// overflow produces infinity rather than an error.
pub fn convert(category: Category, value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConvertError> {
    if !category.contains(from_unit) {
        return Err(ConvertError::unknown_unit(category, from_unit));
    }
    if !category.contains(to_unit) {
        return Err(ConvertError::unknown_unit(category, to_unit));
    }

    let converted = match category.strategy() {
        Strategy::Linear(table) => table.convert(value, from_unit, to_unit),
        Strategy::Affine(scale) => scale.convert(value, from_unit, to_unit),
    };
    converted.ok_or_else(|| ConvertError::unknown_unit(category, from_unit))
}

/// Convert `value` into the category's reference unit
pub fn to_reference(category: Category, value: f64, unit: &str) -> Result<f64, ConvertError> {
    convert(category, value, unit, category.reference_unit())
}
