//! Facade the UI talks to: category dispatch plus the small data
//! derivations (equation, table, graph points) the screen renders.

use std::sync::Arc;

use crate::core::categories::UnitCategory;
use crate::core::currency::service::CurrencyService;
use crate::core::{equation, linear, temperature};
use crate::shared::error::{AppError, AppResult};

pub struct Converter {
    currency: Arc<CurrencyService>,
}

impl Converter {
    pub fn new(currency: Arc<CurrencyService>) -> Self {
        Self { currency }
    }

    pub fn currency(&self) -> &Arc<CurrencyService> {
        &self.currency
    }

    /// Convert with the full error taxonomy.
    pub fn try_convert(
        &self,
        category: UnitCategory,
        value: f64,
        from: &str,
        to: &str,
    ) -> AppResult<f64> {
        match category {
            UnitCategory::Temperature => temperature::convert(value, from, to),
            UnitCategory::Currency => self.currency.convert(value, from, to),
            _ => linear::convert(category, value, from, to),
        }
    }

    /// Permissive conversion for display: any failure is "no result".
    pub fn convert(&self, category: UnitCategory, value: f64, from: &str, to: &str) -> Option<f64> {
        self.try_convert(category, value, from, to).ok()
    }

    /// Equation string for the current pair, with live rates fed in for
    /// Currency.
    pub fn describe_conversion(
        &self,
        category: UnitCategory,
        from: &str,
        to: &str,
    ) -> Option<String> {
        let snapshot = match category {
            UnitCategory::Currency => self.currency.snapshot(),
            _ => None,
        };
        equation::describe(category, from, to, snapshot.as_ref().map(|s| &s.rates))
    }

    /// `value` in `from` converted to every unit of the category, in
    /// picker order.
    pub fn conversion_table(
        &self,
        category: UnitCategory,
        value: f64,
        from: &str,
    ) -> Vec<(&'static str, Option<f64>)> {
        category
            .units()
            .iter()
            .map(|unit| (*unit, self.convert(category, value, from, unit)))
            .collect()
    }

    /// Sample points for the conversion chart: 21 steps from 0 through
    /// twice the input value. Empty for non-positive input.
    pub fn graph_points(
        &self,
        category: UnitCategory,
        value: f64,
        from: &str,
        to: &str,
    ) -> Vec<(f64, f64)> {
        if !value.is_finite() || value <= 0.0 {
            return Vec::new();
        }

        let step = value / 10.0;
        (0..=20)
            .map(|i| {
                let x = step * f64::from(i);
                (x, self.convert(category, x, from, to).unwrap_or(0.0))
            })
            .collect()
    }

    // Rate-service status passthrough for the UI.

    pub fn is_loading(&self) -> bool {
        self.currency.is_loading()
    }

    pub fn last_error(&self) -> Option<AppError> {
        self.currency.last_error()
    }

    pub fn last_update_text(&self) -> String {
        self.currency.last_update_text()
    }
}

/// Parse the raw input field. Empty or non-numeric text is simply "no
/// input", not an error; decimal commas are tolerated.
pub fn parse_input(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.replace(',', ".").parse::<f64>().ok()
}

/// Format a conversion result for the output field.
pub fn format_result(result: Option<f64>) -> String {
    match result {
        Some(value) => format!("{:.2}", value),
        None => "---".to_string(),
    }
}
