//! Affine temperature scale
//!
//! Temperature needs an offset as well as a scale, so it cannot share a
//! factor table. Every conversion goes through Celsius instead: into the
//! reference with `to_reference`, then out with `from_reference`.

use serde::Serialize;

/// A unit on an affine scale
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AffineUnit {
    pub symbol: &'static str,
    pub name: &'static str,
    #[serde(skip)]
    pub to_reference: fn(f64) -> f64,
    #[serde(skip)]
    pub from_reference: fn(f64) -> f64,
}

/// Ordered affine unit set with a shared reference unit
#[derive(Debug, Serialize)]
pub struct AffineScale {
    pub reference: &'static str,
    pub units: &'static [AffineUnit],
}

impl AffineScale {
    pub fn get(&self, symbol: &str) -> Option<&AffineUnit> {
        self.units.iter().find(|u| u.symbol == symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.get(symbol).is_some()
    }

    pub fn symbols(&self) -> Vec<&'static str> {
        self.units.iter().map(|u| u.symbol).collect()
    }

    /// Two-step conversion through the reference. `None` if either symbol is missing.
    pub fn convert(&self, value: f64, from: &str, to: &str) -> Option<f64> {
        let from_unit = self.get(from)?;
        let to_unit = self.get(to)?;
        if from == to {
            return Some(value);
        }
        Some((to_unit.from_reference)((from_unit.to_reference)(value)))
    }
}

fn identity(v: f64) -> f64 {
    v
}

fn fahrenheit_to_celsius(v: f64) -> f64 {
    (v - 32.0) * 5.0 / 9.0
}

fn celsius_to_fahrenheit(v: f64) -> f64 {
    v * 9.0 / 5.0 + 32.0
}

fn kelvin_to_celsius(v: f64) -> f64 {
    v - 273.15
}

fn celsius_to_kelvin(v: f64) -> f64 {
    v + 273.15
}

pub static TEMPERATURE: AffineScale = AffineScale {
    reference: "c",
    units: &[
        AffineUnit { symbol: "c", name: "Celsius", to_reference: identity, from_reference: identity },
        AffineUnit { symbol: "f", name: "Fahrenheit", to_reference: fahrenheit_to_celsius, from_reference: celsius_to_fahrenheit },
        AffineUnit { symbol: "k", name: "Kelvin", to_reference: kelvin_to_celsius, from_reference: celsius_to_kelvin },
    ],
};
