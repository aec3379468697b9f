//! Caller-side converter state
//!
//! The engine is stateless; the "currently selected" category and units
//! live here, in the caller, and are passed to `convert` explicitly.

use serde::Serialize;
use crate::{convert, Category, ConvertError};

/// Selected category, units and input value of a converter form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitSelection {
    pub category: Category,
    pub from: &'static str,
    pub to: &'static str,
    pub value: f64,
}

impl UnitSelection {
    /// Start on the category's default units with a value of 1
    pub fn new(category: Category) -> Self {
        let (from, to) = category.default_units();
        UnitSelection { category, from, to, value: 1.0 }
    }

    /// Switch category. Units always reset to the new category's defaults,
    /// even when the category is unchanged. The value is kept.
    pub fn set_category(&mut self, category: Category) {
        let (from, to) = category.default_units();
        self.category = category;
        self.from = from;
        self.to = to;
    }

    pub fn set_from(&mut self, unit: &str) -> Result<(), ConvertError> {
        self.from = self.resolve(unit)?;
        Ok(())
    }

    pub fn set_to(&mut self, unit: &str) -> Result<(), ConvertError> {
        self.to = self.resolve(unit)?;
        Ok(())
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }

    pub fn result(&self) -> Result<f64, ConvertError> {
        convert(self.category, self.value, self.from, self.to)
    }

    fn resolve(&self, unit: &str) -> Result<&'static str, ConvertError> {
        self.category
            .units()
            .into_iter()
            .find(|u| *u == unit)
            .ok_or_else(|| ConvertError::unknown_unit(self.category, unit))
    }
}

impl Default for UnitSelection {
    fn default() -> Self {
        Self::new(Category::Length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_defaults() {
        let sel = UnitSelection::default();
        assert_eq!(sel.category, Category::Length);
        assert_eq!((sel.from, sel.to), ("m", "km"));
        assert_eq!(sel.value, 1.0);
        assert_eq!(sel.result().unwrap(), 0.001);
    }

    #[test]
    fn test_category_switch_resets_units() {
        let mut sel = UnitSelection::new(Category::Length);
        sel.set_from("ft").unwrap();
        sel.set_value(12.0);

        sel.set_category(Category::Temperature);
        assert_eq!((sel.from, sel.to), ("c", "f"));
        assert_eq!(sel.value, 12.0);
        assert!(Category::Temperature.contains(sel.from));
        assert!(Category::Temperature.contains(sel.to));
    }

    #[test]
    fn test_same_category_still_resets() {
        let mut sel = UnitSelection::new(Category::Weight);
        sel.set_to("oz").unwrap();
        sel.set_category(Category::Weight);
        assert_eq!((sel.from, sel.to), ("kg", "g"));
    }

    #[test]
    fn test_every_switch_lands_in_new_category() {
        let mut sel = UnitSelection::default();
        for category in Category::ALL {
            sel.set_category(category);
            assert!(category.contains(sel.from));
            assert!(category.contains(sel.to));
            assert!(sel.result().is_ok());
        }
    }

    #[test]
    fn test_invalid_unit_leaves_selection_unchanged() {
        let mut sel = UnitSelection::new(Category::Volume);
        let before = sel.clone();
        let err = sel.set_to("ft").unwrap_err();
        assert_eq!(err, ConvertError::UnknownUnit { category: Category::Volume, unit: "ft".into() });
        assert_eq!(sel, before);
    }

    #[test]
    fn test_swap() {
        let mut sel = UnitSelection::new(Category::Temperature);
        sel.set_value(212.0);
        sel.swap();
        assert_eq!((sel.from, sel.to), ("f", "c"));
        assert_eq!(sel.result().unwrap(), 100.0);
    }
}
