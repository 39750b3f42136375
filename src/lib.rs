//! Convertly conversion core.
//!
//! Pure conversion engines (factor tables plus temperature formulas), a
//! currency rate service that fetches live exchange rates and caches them
//! locally, and the equation/table helpers the UI layer renders. The UI
//! itself lives elsewhere; it talks to this crate through [`Converter`].

pub mod core;
pub mod shared;

pub use crate::core::categories::UnitCategory;
pub use crate::core::converter::{format_result, parse_input, Converter};
pub use crate::core::currency::service::CurrencyService;
pub use crate::core::currency::types::RateSnapshot;
pub use crate::shared::error::{AppError, AppResult};
pub use crate::shared::settings::AppSettings;
