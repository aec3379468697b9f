//! Static-rate currency conversion
//!
//! Rates are fixed demonstration values relative to USD, not live quotes.
//! Same reference-unit pattern as the linear unit tables.

use crate::{ConversionTable, ConvertError, LinearUnit};

pub static RATES: ConversionTable = ConversionTable {
    units: &[
        LinearUnit { symbol: "USD", name: "US dollar", factor: 1.0 },
        LinearUnit { symbol: "EUR", name: "euro", factor: 0.92 },
        LinearUnit { symbol: "GBP", name: "pound sterling", factor: 0.79 },
        LinearUnit { symbol: "JPY", name: "Japanese yen", factor: 150.2 },
        LinearUnit { symbol: "INR", name: "Indian rupee", factor: 83.1 },
        LinearUnit { symbol: "AUD", name: "Australian dollar", factor: 1.52 },
        LinearUnit { symbol: "CAD", name: "Canadian dollar", factor: 1.35 },
        LinearUnit { symbol: "CNY", name: "Chinese yuan", factor: 7.19 },
    ],
};

/// Default pair for a fresh converter form
pub const DEFAULT_PAIR: (&str, &str) = ("USD", "EUR");

/// Currency codes in declaration order
pub fn codes() -> Vec<&'static str> {
    RATES.symbols()
}

/// Units of `code` per US dollar. Codes match case-insensitively.
pub fn rate(code: &str) -> Result<f64, ConvertError> {
    let normalized = code.trim().to_uppercase();
    RATES
        .factor(&normalized)
        .ok_or_else(|| ConvertError::UnknownCurrency(code.to_string()))
}

/// Convert `amount` between currencies as `amount / rate(from) * rate(to)`
pub fn convert(amount: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
    let from_rate = rate(from)?;
    let to_rate = rate(to)?;
    if from.trim().eq_ignore_ascii_case(to.trim()) {
        return Ok(amount);
    }
    Ok(amount / from_rate * to_rate)
}
