use serde::{Deserialize, Serialize};

/// Unit categories for type-safe conversions.
///
/// A closed set, so unknown-category fallthrough is impossible: every
/// dispatch over a category is a compile-time exhaustive match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitCategory {
    Length,
    Area,
    Volume,
    Mass,
    Temperature,
    Currency,
    Speed,
    Time,
    Energy,
    Pressure,
}

impl UnitCategory {
    /// Categories in display order.
    pub const ALL: [UnitCategory; 10] = [
        UnitCategory::Length,
        UnitCategory::Area,
        UnitCategory::Volume,
        UnitCategory::Mass,
        UnitCategory::Temperature,
        UnitCategory::Currency,
        UnitCategory::Speed,
        UnitCategory::Time,
        UnitCategory::Energy,
        UnitCategory::Pressure,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            UnitCategory::Length => "Length",
            UnitCategory::Area => "Area",
            UnitCategory::Volume => "Volume",
            UnitCategory::Mass => "Mass",
            UnitCategory::Temperature => "Temperature",
            UnitCategory::Currency => "Currency",
            UnitCategory::Speed => "Speed",
            UnitCategory::Time => "Time",
            UnitCategory::Energy => "Energy",
            UnitCategory::Pressure => "Pressure",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Valid unit names for this category, in picker order.
    pub fn units(&self) -> &'static [&'static str] {
        match self {
            UnitCategory::Length => &["meters", "feet", "inches", "kilometers", "miles", "yards"],
            UnitCategory::Area => &[
                "square meters",
                "square feet",
                "square inches",
                "square kilometers",
                "square miles",
                "acres",
                "hectares",
            ],
            UnitCategory::Volume => &[
                "cubic meters",
                "cubic feet",
                "liters",
                "gallons",
                "milliliters",
            ],
            UnitCategory::Mass => &["kilograms", "pounds", "grams", "ounces", "tons"],
            UnitCategory::Temperature => &["Celsius", "Fahrenheit", "Kelvin"],
            UnitCategory::Currency => &["USD", "EUR", "GBP", "JPY", "CAD", "AUD"],
            UnitCategory::Speed => &[
                "meters per second",
                "kilometers per hour",
                "miles per hour",
                "knots",
                "feet per second",
            ],
            UnitCategory::Time => &[
                "seconds", "minutes", "hours", "days", "weeks", "months", "years",
            ],
            UnitCategory::Energy => &[
                "joules",
                "calories",
                "kilocalories",
                "watt hours",
                "kilowatt hours",
                "electron volts",
                "BTU",
            ],
            UnitCategory::Pressure => &[
                "pascals",
                "atmospheres",
                "bars",
                "psi",
                "torr",
                "millimeters of mercury",
            ],
        }
    }

    /// True for categories converted via a single multiplicative factor.
    pub fn is_linear(&self) -> bool {
        !matches!(self, UnitCategory::Temperature | UnitCategory::Currency)
    }

    /// Next category in display order, wrapping around.
    pub fn next(&self) -> Self {
        let index = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Previous category in display order, wrapping around.
    pub fn prev(&self) -> Self {
        let index = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for category in UnitCategory::ALL {
            assert_eq!(UnitCategory::from_label(category.label()), Some(category));
        }
        assert_eq!(UnitCategory::from_label("Bananas"), None);
    }

    #[test]
    fn every_category_has_units() {
        for category in UnitCategory::ALL {
            assert!(!category.units().is_empty(), "{:?} has no units", category);
        }
    }

    #[test]
    fn cycling_wraps_in_both_directions() {
        assert_eq!(UnitCategory::Pressure.next(), UnitCategory::Length);
        assert_eq!(UnitCategory::Length.prev(), UnitCategory::Pressure);

        let mut category = UnitCategory::Length;
        for _ in 0..UnitCategory::ALL.len() {
            category = category.next();
        }
        assert_eq!(category, UnitCategory::Length);

        for category in UnitCategory::ALL {
            assert_eq!(category.next().prev(), category);
        }
    }

    #[test]
    fn linear_excludes_temperature_and_currency() {
        assert!(!UnitCategory::Temperature.is_linear());
        assert!(!UnitCategory::Currency.is_linear());
        assert!(UnitCategory::Length.is_linear());
        assert!(UnitCategory::Pressure.is_linear());
    }
}
