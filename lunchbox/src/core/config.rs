use chrono::NaiveTime;
use std::time::Duration;

use crate::delivery::{default_cutoff, parse_cutoff_time};

/// Application configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | API_BASE_URL | http://localhost:4000 | backend base URL |
/// | API_TOKEN | - | bearer token |
/// | PAYMENT_PUBLISHABLE_KEY | - | payment provider publishable key |
/// | MAPS_API_KEY | - | address lookup key |
/// | IMAGE_REMOTE_PATTERNS | - | comma-separated remote image patterns |
/// | ORDER_CUTOFF_TIME | 11:00 | daily cutoff (HH:MM[:SS]) |
/// | REQUEST_TIMEOUT_SECS | - | client timeout in seconds |
/// | LOG_LEVEL | info | tracing level |
/// | LOG_DIR | - | daily rolling log directory |
/// | ENVIRONMENT | development | development / staging / production |
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub api_token: Option<String>,
    pub payment_publishable_key: Option<String>,
    pub maps_api_key: Option<String>,
    pub image_remote_patterns: Vec<String>,
    /// Time of day after which next-day ordering closes
    pub order_cutoff: NaiveTime,
    pub request_timeout: Option<Duration>,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// development | staging | production
    pub environment: String,
}

impl Config {
    /// Load from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup; unset or blank keys take defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| non_blank(lookup(key));
        let log = LogSettings::from_lookup(&lookup);

        let order_cutoff = match get("ORDER_CUTOFF_TIME") {
            Some(raw) => parse_cutoff_time(&raw).unwrap_or_else(|e| {
                tracing::warn!(value = %raw, error = %e, "invalid ORDER_CUTOFF_TIME, using default");
                default_cutoff()
            }),
            None => default_cutoff(),
        };

        Self {
            api_base_url: get("API_BASE_URL").unwrap_or_else(|| "http://localhost:4000".into()),
            api_token: get("API_TOKEN"),
            payment_publishable_key: get("PAYMENT_PUBLISHABLE_KEY"),
            maps_api_key: get("MAPS_API_KEY"),
            image_remote_patterns: get("IMAGE_REMOTE_PATTERNS")
                .map(|v| {
                    v.split(',')
                        .map(str::trim)
                        .filter(|p| !p.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
            order_cutoff,
            request_timeout: get("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs),
            log_level: log.level,
            log_dir: log.dir,
            environment: get("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        }
    }

    /// Client configuration for the backend API
    pub fn client_config(&self) -> lunchbox_client::ClientConfig {
        let mut config = lunchbox_client::ClientConfig::new(&self.api_base_url);
        if let Some(token) = &self.api_token {
            config = config.with_token(token);
        }
        if let Some(timeout) = self.request_timeout {
            config = config.with_timeout(timeout);
        }
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

/// Logging settings, read on their own so the logger is up before the rest
/// of the configuration is parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: String,
    pub dir: Option<String>,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            level: non_blank(lookup("LOG_LEVEL")).unwrap_or_else(|| "info".into()),
            dir: non_blank(lookup("LOG_DIR")),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
