//! Factor-table conversions for the linear categories.
//!
//! Each table maps a unit name to how many of that unit equal one base
//! unit, so the base unit always carries a factor of exactly 1.0 and a
//! conversion is `value / from_factor * to_factor`.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::core::categories::UnitCategory;
use crate::shared::error::{AppError, AppResult};

static LENGTH_FACTORS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    // Base: meters
    HashMap::from([
        ("meters", 1.0),
        ("feet", 3.28084),
        ("inches", 39.3701),
        ("kilometers", 0.001),
        ("miles", 0.000621371),
        ("yards", 1.09361),
    ])
});

static AREA_FACTORS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    // Base: square meters
    HashMap::from([
        ("square meters", 1.0),
        ("square feet", 10.7639),
        ("square inches", 1550.0),
        ("square kilometers", 0.000001),
        ("square miles", 3.861e-7),
        ("acres", 0.000247105),
        ("hectares", 0.0001),
    ])
});

static VOLUME_FACTORS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    // Base: cubic meters
    HashMap::from([
        ("cubic meters", 1.0),
        ("cubic feet", 35.3147),
        ("liters", 1000.0),
        ("gallons", 264.172),
        ("milliliters", 1000000.0),
    ])
});

static MASS_FACTORS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    // Base: kilograms
    HashMap::from([
        ("kilograms", 1.0),
        ("pounds", 2.20462),
        ("grams", 1000.0),
        ("ounces", 35.274),
        ("tons", 0.001),
    ])
});

static SPEED_FACTORS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    // Base: meters per second
    HashMap::from([
        ("meters per second", 1.0),
        ("kilometers per hour", 3.6),
        ("miles per hour", 2.23694),
        ("knots", 1.94384),
        ("feet per second", 3.28084),
    ])
});

static TIME_FACTORS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    // Base: seconds
    HashMap::from([
        ("seconds", 1.0),
        ("minutes", 0.0166667),
        ("hours", 0.000277778),
        ("days", 0.0000115741),
        ("weeks", 0.00000165344),
        ("months", 3.8052e-7),
        ("years", 3.171e-8),
    ])
});

static ENERGY_FACTORS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    // Base: joules
    HashMap::from([
        ("joules", 1.0),
        ("calories", 0.239006),
        ("kilocalories", 0.000239006),
        ("watt hours", 0.000277778),
        ("kilowatt hours", 2.778e-7),
        ("electron volts", 6.242e+18),
        ("BTU", 0.000947817),
    ])
});

static PRESSURE_FACTORS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    // Base: pascals
    HashMap::from([
        ("pascals", 1.0),
        ("atmospheres", 9.869e-6),
        ("bars", 0.00001),
        ("psi", 0.000145038),
        ("torr", 0.00750062),
        ("millimeters of mercury", 0.00750062),
    ])
});

/// Factor table for a linear category; `None` for Temperature and
/// Currency, which are not table-driven.
pub fn factors(category: UnitCategory) -> Option<&'static HashMap<&'static str, f64>> {
    match category {
        UnitCategory::Length => Some(&LENGTH_FACTORS),
        UnitCategory::Area => Some(&AREA_FACTORS),
        UnitCategory::Volume => Some(&VOLUME_FACTORS),
        UnitCategory::Mass => Some(&MASS_FACTORS),
        UnitCategory::Speed => Some(&SPEED_FACTORS),
        UnitCategory::Time => Some(&TIME_FACTORS),
        UnitCategory::Energy => Some(&ENERGY_FACTORS),
        UnitCategory::Pressure => Some(&PRESSURE_FACTORS),
        UnitCategory::Temperature | UnitCategory::Currency => None,
    }
}

/// Convert `value` between two units of a linear category.
///
/// Pure: no rounding, no side effects. Unit lookup is case-sensitive.
pub fn convert(category: UnitCategory, value: f64, from: &str, to: &str) -> AppResult<f64> {
    let table = factors(category).ok_or_else(|| AppError::UnknownUnit(from.to_string()))?;
    let from_factor = table
        .get(from)
        .ok_or_else(|| AppError::UnknownUnit(from.to_string()))?;
    let to_factor = table
        .get(to)
        .ok_or_else(|| AppError::UnknownUnit(to.to_string()))?;

    // First convert to the base unit, then to the target unit.
    Ok(value / from_factor * to_factor)
}
