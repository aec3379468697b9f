//! Linear conversion tables
//!
//! A table's `factor` for a unit is how many of that unit equal one
//! reference unit (for length, `km -> 0.001`, `ft -> 3.28084`). Any pair
//! converts as `value * factor(to) / factor(from)`, so adding a unit only
//! needs its one factor.

use serde::Serialize;

/// A unit in a linear table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearUnit {
    /// The unit symbol (e.g., "km", "lb")
    pub symbol: &'static str,
    /// The unit name (e.g., "kilometer", "pound")
    pub name: &'static str,
    /// Number of this unit in one reference unit
    pub factor: f64,
}

impl LinearUnit {
    const fn new(symbol: &'static str, name: &'static str, factor: f64) -> Self {
        LinearUnit { symbol, name, factor }
    }
}

/// Ordered unit table. Slice order is declaration order.
#[derive(Debug, PartialEq, Serialize)]
pub struct ConversionTable {
    pub units: &'static [LinearUnit],
}

impl ConversionTable {
    pub fn get(&self, symbol: &str) -> Option<&LinearUnit> {
        self.units.iter().find(|u| u.symbol == symbol)
    }

    pub fn factor(&self, symbol: &str) -> Option<f64> {
        self.get(symbol).map(|u| u.factor)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.get(symbol).is_some()
    }

    pub fn symbols(&self) -> Vec<&'static str> {
        self.units.iter().map(|u| u.symbol).collect()
    }

    /// The unit whose factor is exactly 1
    pub fn reference(&self) -> Option<&LinearUnit> {
        self.units.iter().find(|u| u.factor == 1.0)
    }

    /// Ratio-of-factors conversion. `None` if either symbol is missing.
    pub fn convert(&self, value: f64, from: &str, to: &str) -> Option<f64> {
        let from_factor = self.factor(from)?;
        let to_factor = self.factor(to)?;
        if from == to {
            return Some(value);
        }
        Some(value * (to_factor / from_factor))
    }
}

pub static LENGTH: ConversionTable = ConversionTable {
    units: &[
        LinearUnit::new("m", "meter", 1.0),
        LinearUnit::new("km", "kilometer", 0.001),
        LinearUnit::new("cm", "centimeter", 100.0),
        LinearUnit::new("mm", "millimeter", 1000.0),
        LinearUnit::new("inch", "inch", 39.3701),
        LinearUnit::new("ft", "foot", 3.28084),
        LinearUnit::new("yd", "yard", 1.09361),
        LinearUnit::new("mile", "mile", 0.000621371),
    ],
};

pub static WEIGHT: ConversionTable = ConversionTable {
    units: &[
        LinearUnit::new("kg", "kilogram", 1.0),
        LinearUnit::new("g", "gram", 1000.0),
        LinearUnit::new("mg", "milligram", 1_000_000.0),
        LinearUnit::new("lb", "pound", 2.20462),
        LinearUnit::new("oz", "ounce", 35.274),
    ],
};

pub static VOLUME: ConversionTable = ConversionTable {
    units: &[
        LinearUnit::new("l", "liter", 1.0),
        LinearUnit::new("ml", "milliliter", 1000.0),
        LinearUnit::new("gal", "US gallon", 0.264172),
        LinearUnit::new("qt", "US quart", 1.05669),
        LinearUnit::new("pt", "US pint", 2.11338),
        LinearUnit::new("cup", "US cup", 4.22675),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_invariants() {
        for table in [&LENGTH, &WEIGHT, &VOLUME] {
            let references = table.units.iter().filter(|u| u.factor == 1.0).count();
            assert_eq!(references, 1);

            for unit in table.units {
                assert!(unit.factor.is_finite() && unit.factor > 0.0, "{}", unit.symbol);
            }

            let symbols: HashSet<_> = table.units.iter().map(|u| u.symbol).collect();
            assert_eq!(symbols.len(), table.units.len());
        }
    }

    #[test]
    fn test_reference_units() {
        assert_eq!(LENGTH.reference().map(|u| u.symbol), Some("m"));
        assert_eq!(WEIGHT.reference().map(|u| u.symbol), Some("kg"));
        assert_eq!(VOLUME.reference().map(|u| u.symbol), Some("l"));
    }

    #[test]
    fn test_lookup() {
        assert_eq!(LENGTH.factor("ft"), Some(3.28084));
        assert!(LENGTH.contains("mile"));
        assert!(!LENGTH.contains("mi"));
        assert_eq!(WEIGHT.symbols(), vec!["kg", "g", "mg", "lb", "oz"]);
    }

    #[test]
    fn test_ratio_conversion() {
        assert_eq!(LENGTH.convert(1.0, "km", "m"), Some(1000.0));
        assert_eq!(LENGTH.convert(7.5, "ft", "ft"), Some(7.5));
        assert_eq!(LENGTH.convert(1.0, "km", "parsec"), None);
        assert_eq!(LENGTH.convert(1.0, "parsec", "parsec"), None);
    }
}
