// src/config.rs
use crate::application::service::{DEFAULT_BINANCE_URL, DEFAULT_COINBASE_URL};
use crate::application::usecase::{SessionState, DEFAULT_HEADLINE};
use crate::domain::errors::{AppError, AppResult};
use crate::domain::model::Pair;
use crate::domain::service::DEFAULT_THRESHOLD_PERCENT;
use dotenv::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Dashboard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Initial session controls
    pub dashboard: DashboardConfig,

    /// Upstream price feeds
    pub feeds: FeedConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Initial values of the user-facing controls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Selected pair (BTC or ETH)
    pub pair: Pair,

    /// Arbitrage alert threshold in percent
    pub threshold_percent: f64,

    /// Headline scored on every refresh
    pub headline: String,

    /// Start with auto-refresh engaged
    pub auto_refresh: bool,

    /// Auto-refresh period in seconds
    pub refresh_interval_secs: u64,

    /// Most recent history rows shown
    pub history_rows: usize,
}

/// Price feed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    pub binance_base_url: String,
    pub coinbase_base_url: String,

    /// Price cache time-to-live in seconds
    pub cache_ttl_secs: u64,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (e.g., "info", "debug", "warn", "error")
    pub level: String,

    /// Log to file
    pub to_file: bool,

    /// Log file path
    pub file_path: Option<String>,
}

fn env_or<T: FromStr>(key: &str, default: T) -> AppResult<T> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("Invalid value for {}: '{}'", key, raw))),
        Err(_) => Ok(default),
    }
}

impl Config {
    /// Load from the JSON file named by `DASHBOARD_CONFIG`, or from the environment
    pub fn load() -> AppResult<Self> {
        dotenv().ok();

        match env::var("DASHBOARD_CONFIG") {
            Ok(path) => Self::from_file(path),
            Err(_) => Self::from_env(),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let defaults = Config::default();

        let dashboard_config = DashboardConfig {
            pair: env::var("DEFAULT_PAIR")
                .map(|s| Pair::from_selector(&s))
                .unwrap_or(defaults.dashboard.pair),
            threshold_percent: env_or("ALERT_THRESHOLD", defaults.dashboard.threshold_percent)?,
            headline: env::var("HEADLINE").unwrap_or(defaults.dashboard.headline),
            auto_refresh: env_or("AUTO_REFRESH", defaults.dashboard.auto_refresh)?,
            refresh_interval_secs: env_or(
                "REFRESH_INTERVAL_SECS",
                defaults.dashboard.refresh_interval_secs,
            )?,
            history_rows: env_or("HISTORY_ROWS", defaults.dashboard.history_rows)?,
        };

        let feed_config = FeedConfig {
            binance_base_url: env::var("BINANCE_API_URL").unwrap_or(defaults.feeds.binance_base_url),
            coinbase_base_url: env::var("COINBASE_API_URL")
                .unwrap_or(defaults.feeds.coinbase_base_url),
            cache_ttl_secs: env_or("PRICE_CACHE_TTL_SECS", defaults.feeds.cache_ttl_secs)?,
            request_timeout_secs: env_or(
                "REQUEST_TIMEOUT_SECS",
                defaults.feeds.request_timeout_secs,
            )?,
        };

        let logging_config = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            to_file: env_or("LOG_TO_FILE", false)?,
            file_path: env::var("LOG_FILE_PATH").ok(),
        };

        let config = Config {
            dashboard: dashboard_config,
            feeds: feed_config,
            logging: logging_config,
        };
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let mut file = File::open(path).map_err(|e| {
            AppError::Config(format!("Failed to open config file: {}", e))
        })?;

        let mut contents = String::new();
        file.read_to_string(&mut contents).map_err(|e| {
            AppError::Config(format!("Failed to read config file: {}", e))
        })?;

        let config: Config = serde_json::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file: {}", e))
        })?;
        config.validate()?;

        Ok(config)
    }

    /// Save configuration to a file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> AppResult<()> {
        let contents = serde_json::to_string_pretty(self)?;

        std::fs::write(path, contents).map_err(|e| {
            AppError::Config(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        let threshold = self.dashboard.threshold_percent;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(AppError::Config(format!(
                "Alert threshold must be a non-negative number, got {}",
                threshold
            )));
        }
        if self.dashboard.refresh_interval_secs == 0 {
            return Err(AppError::Config("Refresh interval must be at least 1 second".to_string()));
        }
        if self.feeds.request_timeout_secs == 0 {
            return Err(AppError::Config("Request timeout must be at least 1 second".to_string()));
        }
        Ok(())
    }

    /// Fresh session seeded from the configured controls
    pub fn session(&self) -> SessionState {
        SessionState::new(
            self.dashboard.pair,
            self.dashboard.threshold_percent,
            &self.dashboard.headline,
            self.dashboard.auto_refresh,
        )
    }

    /// Initialize logging based on configuration
    pub fn init_logging(&self) -> AppResult<()> {
        let mut builder = env_logger::Builder::new();

        // Set log level
        let log_level = match self.logging.level.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            "off" => log::LevelFilter::Off,
            _ => log::LevelFilter::Info,
        };

        builder.filter_level(log_level);

        // Configure output
        if self.logging.to_file {
            if let Some(file_path) = &self.logging.file_path {
                let file = File::create(file_path).map_err(|e| {
                    AppError::Config(format!("Failed to create log file: {}", e))
                })?;

                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
        }

        builder
            .try_init()
            .map_err(|e| AppError::Config(format!("Failed to initialize logger: {}", e)))?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dashboard: DashboardConfig {
                pair: Pair::Btc,
                threshold_percent: DEFAULT_THRESHOLD_PERCENT,
                headline: DEFAULT_HEADLINE.to_string(),
                auto_refresh: false,
                refresh_interval_secs: 60,
                history_rows: 20,
            },
            feeds: FeedConfig {
                binance_base_url: DEFAULT_BINANCE_URL.to_string(),
                coinbase_base_url: DEFAULT_COINBASE_URL.to_string(),
                cache_ttl_secs: 60,
                request_timeout_secs: 10,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                to_file: false,
                file_path: None,
            },
        }
    }
}
