//! # Dashboard Configuration
//!
//! Which store backs the dashboard and how the data access layer behaves.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     ACME_STORE_BACKEND=sqlite                                          │
//! │     ACME_DB_PATH=/srv/acme/dashboard.db                                │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/dashboard/dashboard.toml (Linux)                         │
//! │     ~/Library/Application Support/com.acme.dashboard/dashboard.toml    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     fixture store, no latency, documented invoice behavior             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # dashboard.toml
//! [store]
//! backend = "sqlite"          # fixture | sqlite
//! database_path = "./dashboard.db"
//! max_connections = 5
//!
//! [data]
//! simulated_latency_ms = 0
//! filter_invoices = false         # match the search query on the invoices page
//! round_up_invoice_pages = false  # count a partial last page
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::dal::DataOptions;
use crate::error::{ConfigError, ConfigResult};
use acme_core::PageRounding;

/// Longest simulated latency accepted.
const MAX_SIMULATED_LATENCY_MS: u64 = 60_000;

// =============================================================================
// Store Settings
// =============================================================================

/// Where dashboard rows come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    /// Built-in sample dataset, in memory.
    #[default]
    Fixture,

    /// SQLite database file.
    Sqlite,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Fixture => write!(f, "fixture"),
            StoreBackend::Sqlite => write!(f, "sqlite"),
        }
    }
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fixture" | "sample" | "memory" => Ok(StoreBackend::Fixture),
            "sqlite" => Ok(StoreBackend::Sqlite),
            other => Err(ConfigError::Invalid(format!(
                "Unknown store backend: '{}'. Valid options: fixture, sqlite",
                other
            ))),
        }
    }
}

/// `[store]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default)]
    pub backend: StoreBackend,

    /// SQLite file. Defaults to `dashboard.db` in the platform data dir.
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// Pool size for the SQLite backend.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    5
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            backend: StoreBackend::default(),
            database_path: None,
            max_connections: default_max_connections(),
        }
    }
}

// =============================================================================
// Data Settings
// =============================================================================

/// `[data]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSettings {
    /// Delay added before every store read, in milliseconds.
    #[serde(default)]
    pub simulated_latency_ms: u64,

    /// Apply the search query on the invoices page.
    #[serde(default)]
    pub filter_invoices: bool,

    /// Count a partially filled last page of invoices.
    #[serde(default)]
    pub round_up_invoice_pages: bool,
}

impl From<&DataSettings> for DataOptions {
    fn from(settings: &DataSettings) -> Self {
        DataOptions {
            simulated_latency: Duration::from_millis(settings.simulated_latency_ms),
            filter_invoices: settings.filter_invoices,
            page_rounding: if settings.round_up_invoice_pages {
                PageRounding::Ceil
            } else {
                PageRounding::Floor
            },
        }
    }
}

// =============================================================================
// Dashboard Configuration
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub data: DataSettings,
}

impl DashboardConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (dashboard.toml); a missing file is not an error
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading dashboard config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load dashboard config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.store.backend == StoreBackend::Sqlite {
            if self.store.max_connections == 0 {
                return Err(ConfigError::Invalid(
                    "max_connections must be greater than 0".into(),
                ));
            }

            if self.database_path().is_none() {
                return Err(ConfigError::Invalid(
                    "sqlite backend needs a database_path (no platform data dir found)".into(),
                ));
            }
        }

        if self.data.simulated_latency_ms > MAX_SIMULATED_LATENCY_MS {
            return Err(ConfigError::Invalid(format!(
                "simulated_latency_ms must be at most {}",
                MAX_SIMULATED_LATENCY_MS
            )));
        }

        Ok(())
    }

    /// The SQLite file to open: the configured path, or the platform default.
    pub fn database_path(&self) -> Option<PathBuf> {
        self.store
            .database_path
            .clone()
            .or_else(Self::default_database_path)
    }

    /// Behavior switches for [`DataAccess`](crate::DataAccess).
    pub fn data_options(&self) -> DataOptions {
        DataOptions::from(&self.data)
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies `ACME_*` overrides read through `var`.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(backend) = var("ACME_STORE_BACKEND") {
            match backend.parse() {
                Ok(parsed) => {
                    debug!(backend = %backend, "Overriding store backend from environment");
                    self.store.backend = parsed;
                }
                Err(e) => warn!(error = %e, "Ignoring ACME_STORE_BACKEND"),
            }
        }

        if let Some(path) = var("ACME_DB_PATH") {
            debug!(path = %path, "Overriding database path from environment");
            self.store.database_path = Some(PathBuf::from(path));
        }

        if let Some(latency) = var("ACME_SIMULATED_LATENCY_MS") {
            match latency.parse::<u64>() {
                Ok(ms) => self.data.simulated_latency_ms = ms,
                Err(_) => warn!(value = %latency, "Ignoring ACME_SIMULATED_LATENCY_MS"),
            }
        }

        if let Some(flag) = var("ACME_FILTER_INVOICES") {
            match parse_flag(&flag) {
                Some(on) => self.data.filter_invoices = on,
                None => warn!(value = %flag, "Ignoring ACME_FILTER_INVOICES"),
            }
        }

        if let Some(flag) = var("ACME_ROUND_UP_INVOICE_PAGES") {
            match parse_flag(&flag) {
                Some(on) => self.data.round_up_invoice_pages = on,
                None => warn!(value = %flag, "Ignoring ACME_ROUND_UP_INVOICE_PAGES"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "acme", "dashboard")
            .map(|dirs| dirs.config_dir().join("dashboard.toml"))
    }

    /// Returns the default SQLite file path.
    fn default_database_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "acme", "dashboard")
            .map(|dirs| dirs.data_dir().join("dashboard.db"))
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
