//! Conversion categories and their strategies

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::{AffineScale, ConversionTable, ConvertError, LENGTH, TEMPERATURE, VOLUME, WEIGHT};

/// A family of commensurable units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Weight,
    Volume,
    Temperature,
}

/// How a category converts between its units
#[derive(Debug, Clone, Copy)]
pub enum Strategy {
    /// Scale by ratio of factors
    Linear(&'static ConversionTable),
    /// Offset and scale through a reference unit
    Affine(&'static AffineScale),
}

impl Strategy {
    pub fn symbols(&self) -> Vec<&'static str> {
        match self {
            Strategy::Linear(table) => table.symbols(),
            Strategy::Affine(scale) => scale.symbols(),
        }
    }
}

impl Category {
    /// All categories in declaration order
    pub const ALL: [Category; 4] = [
        Category::Length,
        Category::Weight,
        Category::Volume,
        Category::Temperature,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Volume => "volume",
            Category::Temperature => "temperature",
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            Category::Length => Strategy::Linear(&LENGTH),
            Category::Weight => Strategy::Linear(&WEIGHT),
            Category::Volume => Strategy::Linear(&VOLUME),
            Category::Temperature => Strategy::Affine(&TEMPERATURE),
        }
    }

    /// Unit symbols in declaration order
    pub fn units(&self) -> Vec<&'static str> {
        self.strategy().symbols()
    }

    pub fn contains(&self, unit: &str) -> bool {
        match self.strategy() {
            Strategy::Linear(table) => table.contains(unit),
            Strategy::Affine(scale) => scale.contains(unit),
        }
    }

    /// The unit every conversion in this category passes through
    pub fn reference_unit(&self) -> &'static str {
        match self {
            Category::Length => "m",
            Category::Weight => "kg",
            Category::Volume => "l",
            Category::Temperature => TEMPERATURE.reference,
        }
    }

    /// Units selected after switching to this category: the first declared
    /// unit, and the second (or the first again for a one-unit table).
    pub fn default_units(&self) -> (&'static str, &'static str) {
        let units = self.units();
        let from = units[0];
        let to = units.get(1).copied().unwrap_or(from);
        (from, to)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ConvertError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("length".parse::<Category>(), Ok(Category::Length));
        assert_eq!(" Temperature ".parse::<Category>(), Ok(Category::Temperature));
        assert_eq!("area".parse::<Category>(), Err(ConvertError::UnknownCategory("area".into())));
    }

    #[test]
    fn test_display_matches_serde() {
        for category in Category::ALL {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, category.to_string());
        }
    }

    #[test]
    fn test_default_units_are_first_and_second_declared() {
        assert_eq!(Category::Length.default_units(), ("m", "km"));
        assert_eq!(Category::Weight.default_units(), ("kg", "g"));
        assert_eq!(Category::Volume.default_units(), ("l", "ml"));
        assert_eq!(Category::Temperature.default_units(), ("c", "f"));

        for category in Category::ALL {
            let units = category.units();
            assert_eq!(category.default_units(), (units[0], units[1]));
        }
    }

    #[test]
    fn test_reference_unit_has_unit_factor() {
        for category in Category::ALL {
            let reference = category.reference_unit();
            assert!(category.contains(reference));
            if let Strategy::Linear(table) = category.strategy() {
                assert_eq!(table.reference().map(|u| u.symbol), Some(reference));
            }
        }
    }

    #[test]
    fn test_contains() {
        assert!(Category::Length.contains("ft"));
        assert!(!Category::Length.contains("lb"));
        assert!(Category::Temperature.contains("k"));
        assert!(!Category::Temperature.contains("K"));
    }
}
