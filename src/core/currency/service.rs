//! Live exchange-rate service.
//!
//! Owns the active [`RateSnapshot`], the redb cache it is persisted to,
//! and the HTTP client that refreshes it. Constructed once per process
//! and shared by reference; conversions read whichever complete
//! snapshot is current and are never blocked by an in-flight fetch.

use std::{
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex, RwLock,
    },
    time::Duration as StdDuration,
};

use chrono::{Duration, Utc};
use directories::ProjectDirs;
use redb::{Database, ReadableTable, TableDefinition};
use reqwest::Client;

use crate::core::currency::types::{RateSnapshot, RatesApiResponse};
use crate::shared::error::{AppError, AppResult};
use crate::shared::settings::AppSettings;

const RATES_TABLE: TableDefinition<&str, &str> = TableDefinition::new("currency_rates");
const CACHE_KEY: &str = "cached_exchange_rates";
const BASE_CURRENCY: &str = "USD";
const DEFAULT_ENDPOINT: &str = "https://v6.exchangerate-api.com/v6";

/// Background refresh period.
pub const UPDATE_INTERVAL_SECS: u64 = 3600;

pub struct CurrencyService {
    db: Database,
    http: Client,
    endpoint: String,
    api_key: String,
    snapshot: RwLock<Option<RateSnapshot>>,
    loading: AtomicBool,
    last_error: Mutex<Option<AppError>>,
    // Serializes fetches so the startup check and the periodic timer
    // never race on the persist-then-swap step.
    fetch_guard: tokio::sync::Mutex<()>,
}

impl CurrencyService {
    pub fn new(settings: &AppSettings) -> AppResult<Self> {
        let db_path = Self::db_path()?;
        Self::open_at(
            &db_path,
            DEFAULT_ENDPOINT,
            &settings.api_keys.currency_api_key,
        )
    }

    /// Open a service against an explicit cache path and provider
    /// endpoint.
    pub fn open_at(db_path: &Path, endpoint: &str, api_key: &str) -> AppResult<Self> {
        let db = Database::create(db_path).map_err(|e| AppError::Cache(e.to_string()))?;
        let http = Client::builder()
            .user_agent("convertly/currency")
            .build()
            .map_err(|e| AppError::Network(e.to_string()))?;

        Ok(Self {
            db,
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            snapshot: RwLock::new(None),
            loading: AtomicBool::new(false),
            last_error: Mutex::new(None),
            fetch_guard: tokio::sync::Mutex::new(()),
        })
    }

    /// Make sure a usable snapshot exists: adopt the persisted one when
    /// it is younger than 24 hours, otherwise fetch from the network.
    pub async fn ensure_rates_loaded(&self) -> AppResult<()> {
        if self.has_fresh_snapshot() {
            return Ok(());
        }

        self.seed_from_disk()?;
        if self.has_fresh_snapshot() {
            println!("[Currency] Using cached rates, skipping network fetch");
            return Ok(());
        }

        self.refresh().await
    }

    /// Fetch fresh rates and atomically replace the snapshot and the
    /// persisted cache. On failure the previous snapshot stays active
    /// and the error is recorded for display.
    pub async fn refresh(&self) -> AppResult<()> {
        // At most one fetch in flight at a time.
        let _guard = self.fetch_guard.lock().await;

        self.loading.store(true, Ordering::SeqCst);
        self.set_last_error(None);

        let result = self.fetch_and_persist().await;

        self.loading.store(false, Ordering::SeqCst);
        if let Err(err) = &result {
            eprintln!("[Currency] Refresh failed: {}", err);
            self.set_last_error(Some(err.clone()));
        }
        result
    }

    /// Re-run [`refresh`](Self::refresh) every hour for as long as the
    /// process lives. A hung fetch only delays the next snapshot; it
    /// never blocks conversions.
    pub fn spawn_periodic_refresh(self: &Arc<Self>) {
        let svc = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(StdDuration::from_secs(UPDATE_INTERVAL_SECS));
            // The first tick fires immediately; startup already fetched.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if let Err(err) = svc.refresh().await {
                    eprintln!("[Currency] Periodic refresh failed: {}", err);
                }
            }
        });
    }

    /// Cross-rate conversion relative to USD:
    /// `value / rates[from] * rates[to]`.
    pub fn convert(&self, value: f64, from: &str, to: &str) -> AppResult<f64> {
        let guard = self
            .snapshot
            .read()
            .map_err(|_| AppError::Cache("rate snapshot poisoned".into()))?;
        let snapshot = guard.as_ref().ok_or(AppError::RateUnavailable)?;

        let from_rate = *snapshot.rates.get(from).ok_or(AppError::RateUnavailable)?;
        let to_rate = *snapshot.rates.get(to).ok_or(AppError::RateUnavailable)?;
        if from_rate <= 0.0 {
            return Err(AppError::RateUnavailable);
        }

        Ok(value / from_rate * to_rate)
    }

    /// The complete current snapshot, if any.
    pub fn snapshot(&self) -> Option<RateSnapshot> {
        self.snapshot.read().ok().and_then(|g| g.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    pub fn last_error(&self) -> Option<AppError> {
        self.last_error.lock().ok().and_then(|g| g.clone())
    }

    /// Recency of the active snapshot for display.
    pub fn last_update_text(&self) -> String {
        match self.snapshot() {
            None => "Never updated".to_string(),
            Some(snapshot) => format!(
                "Last updated {}",
                relative_time(Utc::now() - snapshot.fetched_at)
            ),
        }
    }

    async fn fetch_and_persist(&self) -> AppResult<()> {
        let snapshot = self.fetch_remote_rates().await?;
        // Persist first; the in-memory swap happens only after the
        // cache write commits, so both change together or not at all.
        self.write_cache(&snapshot)?;
        self.replace_snapshot(snapshot);
        Ok(())
    }

    async fn fetch_remote_rates(&self) -> AppResult<RateSnapshot> {
        if self.api_key.is_empty() {
            return Err(AppError::ApiKeyMissing);
        }

        let url = format!("{}/{}/latest/{}", self.endpoint, self.api_key, BASE_CURRENCY);
        println!("[Currency] Fetching rates from {}/***/latest/{}", self.endpoint, BASE_CURRENCY);

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(classify_status(status.as_u16()));
        }

        let payload: RatesApiResponse = resp
            .json()
            .await
            .map_err(|e| AppError::DecodeFailed(e.to_string()))?;

        if payload.result != "success" {
            return Err(AppError::DecodeFailed(format!(
                "API reported {}",
                payload.result
            )));
        }

        let mut rates = payload.rates;
        // The provider omits the base currency from its own table.
        rates.entry(BASE_CURRENCY.to_string()).or_insert(1.0);

        Ok(RateSnapshot::new(rates, Utc::now()))
    }

    fn seed_from_disk(&self) -> AppResult<()> {
        let Some(cached) = self.read_cache()? else {
            return Ok(());
        };

        if cached.is_fresh(Utc::now()) {
            println!(
                "[Currency] Seeded {} rates from disk cache",
                cached.rates.len()
            );
            self.replace_snapshot(cached);
        }
        Ok(())
    }

    fn write_cache(&self, snapshot: &RateSnapshot) -> AppResult<()> {
        let serialized = serde_json::to_string(snapshot)?;
        let txn = self
            .db
            .begin_write()
            .map_err(|e| AppError::Cache(e.to_string()))?;
        {
            let mut table = txn
                .open_table(RATES_TABLE)
                .map_err(|e| AppError::Cache(e.to_string()))?;
            table
                .insert(CACHE_KEY, serialized.as_str())
                .map_err(|e| AppError::Cache(e.to_string()))?;
        }
        txn.commit().map_err(|e| AppError::Cache(e.to_string()))
    }

    fn read_cache(&self) -> AppResult<Option<RateSnapshot>> {
        let txn = self
            .db
            .begin_read()
            .map_err(|e| AppError::Cache(e.to_string()))?;

        // The table does not exist on first run.
        let Ok(table) = txn.open_table(RATES_TABLE) else {
            return Ok(None);
        };

        let Some(value) = table
            .get(CACHE_KEY)
            .map_err(|e| AppError::Cache(e.to_string()))?
        else {
            return Ok(None);
        };

        let snapshot = serde_json::from_str(value.value())?;
        Ok(Some(snapshot))
    }

    pub(crate) fn replace_snapshot(&self, snapshot: RateSnapshot) {
        if let Ok(mut guard) = self.snapshot.write() {
            *guard = Some(snapshot);
        }
    }

    fn has_fresh_snapshot(&self) -> bool {
        self.snapshot
            .read()
            .ok()
            .and_then(|g| g.as_ref().map(|s| s.is_fresh(Utc::now())))
            .unwrap_or(false)
    }

    fn set_last_error(&self, err: Option<AppError>) {
        if let Ok(mut guard) = self.last_error.lock() {
            *guard = err;
        }
    }

    fn db_path() -> AppResult<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "Convertly", "convertly")
            .ok_or_else(|| AppError::Io("Unable to determine data directory".into()))?;
        let path = proj_dirs.data_dir().to_path_buf();
        std::fs::create_dir_all(&path)?;
        Ok(path.join("currency_rates.redb"))
    }
}

/// Map a non-200 provider status to the error taxonomy.
fn classify_status(code: u16) -> AppError {
    match code {
        404 => AppError::EndpointNotFound,
        429 => AppError::RateLimited,
        other => AppError::ServerError(other),
    }
}

/// Coarse relative description of how long ago `elapsed` was.
fn relative_time(elapsed: Duration) -> String {
    let plural = |n: i64, word: &str| {
        if n == 1 {
            format!("1 {} ago", word)
        } else {
            format!("{} {}s ago", n, word)
        }
    };

    if elapsed < Duration::minutes(1) {
        "just now".to_string()
    } else if elapsed < Duration::hours(1) {
        plural(elapsed.num_minutes(), "minute")
    } else if elapsed < Duration::days(1) {
        plural(elapsed.num_hours(), "hour")
    } else {
        plural(elapsed.num_days(), "day")
    }
}
