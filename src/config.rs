//! Service Configuration
//!
//! Everything is read once from the environment at start-up. A `.env` file in
//! the working directory, if present, is loaded first.

use crate::ranking::engine::{DEFAULT_MAX_RESULTS_SEARCH, DEFAULT_TOP_K};
use crate::youtube::protocol::DEFAULT_API_BASE;
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

pub const ENV_API_KEY: &str = "YOUTUBE_API_KEY";
pub const ENV_API_BASE: &str = "YOUTUBE_API_BASE";
pub const ENV_BIND: &str = "HASHTAGS_BIND";
pub const ENV_TIMEOUT_SECS: &str = "HASHTAGS_TIMEOUT_SECS";
pub const ENV_WINDOW_DAYS: &str = "HASHTAGS_WINDOW_DAYS";
pub const ENV_MAX_RESULTS: &str = "HASHTAGS_MAX_RESULTS";
pub const ENV_TOP_K: &str = "HASHTAGS_TOP_K";

#[derive(Debug, Clone)]
pub struct Config {
    /// Platform credential. `None` keeps the server up but fails every ranking request.
    pub api_key: Option<String>,
    pub api_base: String,
    pub bind_addr: SocketAddr,
    /// Timeout applied to each outbound call.
    pub request_timeout: Duration,
    /// Only videos published within this many days are searched.
    pub days_window: i64,
    pub max_results_search: u32,
    pub top_k: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            request_timeout: Duration::from_secs(20),
            days_window: 30,
            max_results_search: DEFAULT_MAX_RESULTS_SEARCH,
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl Config {
    /// Loads `.env` (if any) and then reads the process environment.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Ok(Self {
            api_key: get(ENV_API_KEY).map(|key| key.trim().to_string()),
            api_base: get(ENV_API_BASE).unwrap_or(defaults.api_base),
            bind_addr: parse_or(get(ENV_BIND), ENV_BIND, defaults.bind_addr)?,
            request_timeout: Duration::from_secs(parse_or(
                get(ENV_TIMEOUT_SECS),
                ENV_TIMEOUT_SECS,
                defaults.request_timeout.as_secs(),
            )?),
            days_window: parse_or(get(ENV_WINDOW_DAYS), ENV_WINDOW_DAYS, defaults.days_window)?,
            max_results_search: parse_or(
                get(ENV_MAX_RESULTS),
                ENV_MAX_RESULTS,
                defaults.max_results_search,
            )?,
            top_k: parse_or(get(ENV_TOP_K), ENV_TOP_K, defaults.top_k)?,
        })
    }
}

fn parse_or<T>(raw: Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .trim()
            .parse::<T>()
            .with_context(|| format!("invalid value for {}: {:?}", key, value)),
        None => Ok(default),
    }
}
