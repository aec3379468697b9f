//! Toolbelt Units - Unit and Currency Conversion
//!
//! A stateless conversion engine over four categories:
//! - Length (m, km, cm, mm, inch, ft, yd, mile)
//! - Weight (kg, g, mg, lb, oz)
//! - Volume (l, ml, gal, qt, pt, cup)
//! - Temperature (c, f, k)
//!
//! Linear categories convert by ratio of factors against a reference unit.
//! Temperature is affine and converts through Celsius. Each `Category`
//! carries its strategy, so dispatch is an exhaustive match.
//!
//! Also provides a static-rate currency table and the caller-side
//! `UnitSelection` that implements the category-switch defaults.

mod error;
mod table;
mod temperature;
mod category;
mod convert;
mod selection;
pub mod currency;
mod tools;

pub use error::ConvertError;
pub use table::{ConversionTable, LinearUnit, LENGTH, WEIGHT, VOLUME};
pub use temperature::{AffineScale, AffineUnit, TEMPERATURE};
pub use category::{Category, Strategy};
pub use convert::{convert, to_reference};
pub use selection::UnitSelection;
pub use tools::{UNIT_PLACES, MAX_PLACES};

use toolbelt_plugin::ToolRegistry;

/// Load conversion tools into registry
pub fn load_units_tools(registry: ToolRegistry) -> ToolRegistry {
    registry
        // Units (2 tools)
        .with_tool(tools::ConvertUnits)
        .with_tool(tools::ListUnits)

        // Currency (2 tools)
        .with_tool(tools::ConvertCurrency)
        .with_tool(tools::ListCurrencies)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_units_tools() {
        let registry = load_units_tools(ToolRegistry::new());

        assert_eq!(registry.len(), 4);
        assert!(registry.get("convert_units").is_some());
        assert!(registry.get("list_units").is_some());
        assert!(registry.get("convert_currency").is_some());
        assert!(registry.get("list_currencies").is_some());
    }
}
