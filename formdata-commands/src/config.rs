//! Form data cache configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use formdata_cache::CacheConfig;
use formdata_core::constants::{
    DEFAULT_CACHE_THRESHOLD, DEFAULT_CACHE_TIMEOUT_SECONDS, DEFAULT_REFRESH_TIMEOUT_ON_RETRIEVAL,
    ENV_CACHE_DEFAULT_TIMEOUT, ENV_CACHE_THRESHOLD, ENV_REFRESH_TIMEOUT_ON_RETRIEVAL,
};

/// Configuration passed to the form data commands at construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDataCacheConfig {
    /// Extend an entry's lifetime every time it is read
    pub refresh_timeout_on_retrieval: bool,
    /// Entry lifetime in seconds
    pub default_timeout_seconds: u64,
    /// Maximum number of entries for in-memory stores
    pub threshold: usize,
}

impl Default for FormDataCacheConfig {
    fn default() -> Self {
        Self {
            refresh_timeout_on_retrieval: DEFAULT_REFRESH_TIMEOUT_ON_RETRIEVAL,
            default_timeout_seconds: DEFAULT_CACHE_TIMEOUT_SECONDS,
            threshold: DEFAULT_CACHE_THRESHOLD,
        }
    }
}

impl FormDataCacheConfig {
    /// Loads `.env` (if any) and reads overrides from the environment.
    ///
    /// Unset variables keep their defaults; unparseable ones are logged and
    /// ignored.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            refresh_timeout_on_retrieval: lookup(ENV_REFRESH_TIMEOUT_ON_RETRIEVAL)
                .map(|v| parse_flag(ENV_REFRESH_TIMEOUT_ON_RETRIEVAL, &v, defaults.refresh_timeout_on_retrieval))
                .unwrap_or(defaults.refresh_timeout_on_retrieval),
            default_timeout_seconds: lookup(ENV_CACHE_DEFAULT_TIMEOUT)
                .map(|v| parse_or(ENV_CACHE_DEFAULT_TIMEOUT, &v, defaults.default_timeout_seconds))
                .unwrap_or(defaults.default_timeout_seconds),
            threshold: lookup(ENV_CACHE_THRESHOLD)
                .map(|v| parse_or(ENV_CACHE_THRESHOLD, &v, defaults.threshold))
                .unwrap_or(defaults.threshold),
        }
    }

    /// Enables or disables refresh-on-retrieval.
    pub fn with_refresh_on_retrieval(mut self, enabled: bool) -> Self {
        self.refresh_timeout_on_retrieval = enabled;
        self
    }

    /// Configuration for an in-memory store honoring this config.
    pub fn store_config(&self) -> CacheConfig {
        CacheConfig {
            max_entries: self.threshold,
            default_ttl_seconds: self.default_timeout_seconds,
            auto_cleanup: true,
        }
    }
}

fn parse_flag(name: &str, raw: &str, default: bool) -> bool {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        other => {
            warn!(var = name, value = other, "Unrecognized boolean, using default");
            default
        }
    }
}

fn parse_or<T: FromStr + Copy>(name: &str, raw: &str, default: T) -> T {
    raw.trim().parse().unwrap_or_else(|_| {
        warn!(var = name, value = raw, "Unparseable value, using default");
        default
    })
}
