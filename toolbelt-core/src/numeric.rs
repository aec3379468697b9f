//! Float comparison and display helpers

/// Absolute and relative tolerance for float comparisons
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// True when `a` and `b` agree within either the absolute or the relative tolerance.
pub fn nearly_equal(a: f64, b: f64, tol: Tolerances) -> bool {
    if a == b {
        return true;
    }
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Render with a fixed number of decimal places.
///
/// Negative zero renders without its sign so `-0.0` and `0.0` display the same.
/// Non-finite values render as `inf`, `-inf` and `NaN`.
pub fn format_fixed(value: f64, places: usize) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.prec$}", value, prec = places)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances::default();
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn nearly_equal_relative_scales_with_magnitude() {
        let tol = Tolerances { abs: 0.0, rel: 1e-9 };
        assert!(nearly_equal(1.0e12, 1.0e12 + 1.0, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn nearly_equal_infinities() {
        let tol = Tolerances::default();
        assert!(nearly_equal(f64::INFINITY, f64::INFINITY, tol));
        assert!(!nearly_equal(f64::INFINITY, f64::NEG_INFINITY, tol));
        assert!(!nearly_equal(f64::NAN, f64::NAN, tol));
    }

    #[test]
    fn format_fixed_places() {
        assert_eq!(format_fixed(1000.0, 4), "1000.0000");
        assert_eq!(format_fixed(3.28084, 4), "3.2808");
        assert_eq!(format_fixed(0.92, 2), "0.92");
        assert_eq!(format_fixed(-40.0, 0), "-40");
    }

    #[test]
    fn format_fixed_negative_zero() {
        assert_eq!(format_fixed(-0.0, 4), "0.0000");
    }

    #[test]
    fn format_fixed_non_finite() {
        assert_eq!(format_fixed(f64::INFINITY, 4), "inf");
        assert_eq!(format_fixed(f64::NEG_INFINITY, 4), "-inf");
        assert_eq!(format_fixed(f64::NAN, 4), "NaN");
    }
}
