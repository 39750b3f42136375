//! Temperature conversions between Celsius, Fahrenheit and Kelvin.
//!
//! These are affine, not multiplicative, so no single factor table
//! applies; everything routes through Celsius as the base.

use crate::shared::error::{AppError, AppResult};

pub const UNITS: [&str; 3] = ["Celsius", "Fahrenheit", "Kelvin"];

/// Convert `value` between temperature units.
///
/// Purely arithmetic; values below absolute zero are not rejected.
pub fn convert(value: f64, from: &str, to: &str) -> AppResult<f64> {
    let celsius = match from {
        "Celsius" => value,
        "Fahrenheit" => (value - 32.0) * 5.0 / 9.0,
        "Kelvin" => value - 273.15,
        other => return Err(AppError::UnknownUnit(other.to_string())),
    };

    match to {
        "Celsius" => Ok(celsius),
        "Fahrenheit" => Ok(celsius * 9.0 / 5.0 + 32.0),
        "Kelvin" => Ok(celsius + 273.15),
        other => Err(AppError::UnknownUnit(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn known_fixed_points() {
        assert_eq!(convert(0.0, "Celsius", "Fahrenheit").unwrap(), 32.0);
        assert_eq!(convert(100.0, "Celsius", "Kelvin").unwrap(), 373.15);
        assert_eq!(convert(212.0, "Fahrenheit", "Celsius").unwrap(), 100.0);
        assert!((convert(0.0, "Kelvin", "Celsius").unwrap() + 273.15).abs() < TOLERANCE);
        assert!((convert(32.0, "Fahrenheit", "Kelvin").unwrap() - 273.15).abs() < TOLERANCE);
    }

    #[test]
    fn identity_for_each_unit() {
        for unit in UNITS {
            assert_eq!(convert(-40.0, unit, unit).unwrap(), -40.0);
        }
    }

    #[test]
    fn round_trips_across_all_pairs() {
        for from in UNITS {
            for to in UNITS {
                for value in [-40.0, 0.0, 36.6, 451.0] {
                    let there = convert(value, from, to).unwrap();
                    let back = convert(there, to, from).unwrap();
                    assert!(
                        (back - value).abs() < 1e-9,
                        "{} {} -> {} round trip gave {}",
                        value,
                        from,
                        to,
                        back
                    );
                }
            }
        }
    }

    #[test]
    fn fahrenheit_celsius_agree_at_minus_forty() {
        assert!((convert(-40.0, "Fahrenheit", "Celsius").unwrap() + 40.0).abs() < TOLERANCE);
    }

    #[test]
    fn below_absolute_zero_is_not_rejected() {
        // No physical-validity check; the arithmetic just runs.
        assert_eq!(convert(-10.0, "Kelvin", "Celsius").unwrap(), -283.15);
    }

    #[test]
    fn unknown_units_are_reported() {
        assert_eq!(
            convert(1.0, "Rankine", "Celsius"),
            Err(AppError::UnknownUnit("Rankine".to_string()))
        );
        assert_eq!(
            convert(1.0, "Celsius", "Rankine"),
            Err(AppError::UnknownUnit("Rankine".to_string()))
        );
        // Case-sensitive, same as the pickers.
        assert!(convert(1.0, "celsius", "Kelvin").is_err());
    }
}
