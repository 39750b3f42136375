//! Human-readable equation strings for the current unit pair.

use std::collections::HashMap;

use crate::core::categories::UnitCategory;
use crate::core::linear;

pub const LOADING_RATES: &str = "Loading exchange rates...";

/// Describe the conversion for a category/unit pair.
///
/// Linear categories yield `y = {factor}x (from to to)`. Temperature
/// yields one of the fixed formula strings. Currency needs live `rates`
/// and falls back to a loading placeholder without them. Unknown units
/// yield `None`.
pub fn describe(
    category: UnitCategory,
    from: &str,
    to: &str,
    rates: Option<&HashMap<String, f64>>,
) -> Option<String> {
    match category {
        UnitCategory::Temperature => describe_temperature(from, to),
        UnitCategory::Currency => Some(describe_currency(from, to, rates)),
        _ => {
            let table = linear::factors(category)?;
            let from_factor = table.get(from)?;
            let to_factor = table.get(to)?;
            Some(linear_equation(to_factor / from_factor, from, to))
        }
    }
}

fn linear_equation(factor: f64, from: &str, to: &str) -> String {
    format!("y = {:.4}x ({} to {})", factor, from, to)
}

fn describe_temperature(from: &str, to: &str) -> Option<String> {
    let formula = match (from, to) {
        ("Celsius", "Fahrenheit") => "°F = (°C × 9/5) + 32",
        ("Fahrenheit", "Celsius") => "°C = (°F - 32) × 5/9",
        ("Celsius", "Kelvin") => "K = °C + 273.15",
        ("Kelvin", "Celsius") => "°C = K - 273.15",
        ("Fahrenheit", "Kelvin") => "K = (°F - 32) × 5/9 + 273.15",
        ("Kelvin", "Fahrenheit") => "°F = (K - 273.15) × 9/5 + 32",
        (from, to) if from == to => "y = x (no conversion needed)",
        _ => return None,
    };
    Some(formula.to_string())
}

fn describe_currency(from: &str, to: &str, rates: Option<&HashMap<String, f64>>) -> String {
    let Some(rates) = rates else {
        return LOADING_RATES.to_string();
    };
    match (rates.get(from), rates.get(to)) {
        (Some(&from_rate), Some(&to_rate)) if from_rate > 0.0 => {
            linear_equation(to_rate / from_rate, from, to)
        }
        _ => LOADING_RATES.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_equation_format() {
        assert_eq!(
            describe(UnitCategory::Length, "meters", "feet", None),
            Some("y = 3.2808x (meters to feet)".to_string())
        );
        assert_eq!(
            describe(UnitCategory::Mass, "pounds", "pounds", None),
            Some("y = 1.0000x (pounds to pounds)".to_string())
        );
    }

    #[test]
    fn linear_unknown_unit_yields_none() {
        assert_eq!(describe(UnitCategory::Length, "cubits", "feet", None), None);
        assert_eq!(describe(UnitCategory::Length, "meters", "cubits", None), None);
    }

    #[test]
    fn temperature_fixed_formulas() {
        let cases = [
            ("Celsius", "Fahrenheit", "°F = (°C × 9/5) + 32"),
            ("Fahrenheit", "Celsius", "°C = (°F - 32) × 5/9"),
            ("Celsius", "Kelvin", "K = °C + 273.15"),
            ("Kelvin", "Celsius", "°C = K - 273.15"),
            ("Fahrenheit", "Kelvin", "K = (°F - 32) × 5/9 + 273.15"),
            ("Kelvin", "Fahrenheit", "°F = (K - 273.15) × 9/5 + 32"),
        ];
        for (from, to, expected) in cases {
            assert_eq!(
                describe(UnitCategory::Temperature, from, to, None),
                Some(expected.to_string())
            );
        }
    }

    #[test]
    fn temperature_same_unit_and_unknown_pairs() {
        assert_eq!(
            describe(UnitCategory::Temperature, "Kelvin", "Kelvin", None),
            Some("y = x (no conversion needed)".to_string())
        );
        assert_eq!(
            describe(UnitCategory::Temperature, "Celsius", "Rankine", None),
            None
        );
    }

    #[test]
    fn currency_uses_live_rates_or_placeholder() {
        let rates = HashMap::from([("USD".to_string(), 1.0), ("EUR".to_string(), 0.5)]);
        assert_eq!(
            describe(UnitCategory::Currency, "USD", "EUR", Some(&rates)),
            Some("y = 0.5000x (USD to EUR)".to_string())
        );
        assert_eq!(
            describe(UnitCategory::Currency, "USD", "EUR", None),
            Some(LOADING_RATES.to_string())
        );
        // Unknown code degrades to the placeholder too, never an error.
        assert_eq!(
            describe(UnitCategory::Currency, "USD", "XXX", Some(&rates)),
            Some(LOADING_RATES.to_string())
        );
    }
}
