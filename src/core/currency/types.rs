use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Extended currency list shown by the rate provider; the category
/// picker only exposes the first six.
pub const AVAILABLE_CURRENCIES: [&str; 30] = [
    "USD", "EUR", "GBP", "JPY", "AUD", "CAD", "CHF", "CNY", "HKD", "NZD", "SEK", "KRW", "SGD",
    "NOK", "MXN", "INR", "RUB", "ZAR", "TRY", "BRL", "TWD", "DKK", "PLN", "THB", "IDR", "HUF",
    "CZK", "ILS", "CLP", "PHP",
];

/// Payload returned by the exchangerate-api `latest` endpoint.
#[derive(Debug, Deserialize)]
pub struct RatesApiResponse {
    pub result: String,
    #[serde(rename = "conversion_rates")]
    pub rates: HashMap<String, f64>,
}

/// The active set of exchange rates plus the moment they were fetched.
///
/// Replaced wholesale on every successful fetch; readers never see a
/// partially updated snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateSnapshot {
    pub rates: HashMap<String, f64>,
    pub fetched_at: DateTime<Utc>,
}

impl RateSnapshot {
    /// Cached rates older than this are refetched instead of adopted.
    pub const MAX_AGE_HOURS: i64 = 24;

    pub fn new(rates: HashMap<String, f64>, fetched_at: DateTime<Utc>) -> Self {
        Self { rates, fetched_at }
    }

    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now - self.fetched_at < Duration::hours(Self::MAX_AGE_HOURS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_freshness_window() {
        let now = Utc::now();
        let fresh = RateSnapshot::new(HashMap::new(), now - Duration::hours(23));
        let stale = RateSnapshot::new(HashMap::new(), now - Duration::hours(25));
        assert!(fresh.is_fresh(now));
        assert!(!stale.is_fresh(now));
    }

    #[test]
    fn api_response_decodes_provider_payload() {
        let body = r#"{"result":"success","conversion_rates":{"USD":1.0,"EUR":0.92}}"#;
        let parsed: RatesApiResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.result, "success");
        assert_eq!(parsed.rates.get("EUR"), Some(&0.92));
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let snapshot = RateSnapshot::new(
            HashMap::from([("USD".to_string(), 1.0), ("JPY".to_string(), 147.3)]),
            Utc::now(),
        );
        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: RateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.rates, snapshot.rates);
        assert_eq!(parsed.fetched_at, snapshot.fetched_at);
    }

    #[test]
    fn picker_currencies_are_in_the_extended_list() {
        use crate::core::categories::UnitCategory;
        for code in UnitCategory::Currency.units() {
            assert!(AVAILABLE_CURRENCIES.contains(code));
        }
    }
}
