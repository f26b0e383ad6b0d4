//! Runtime configuration read from the environment.
//!
//! `main` loads a `.env` file first (if present), so every value here can be
//! set either way. Unset variables fall back to the defaults below.

use std::env;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_LOOKUP_CONCURRENCY: usize = 8;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} has an invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Resolver overrides; `None` keeps the system/library value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DnsConfig {
    pub timeout: Option<Duration>,
    pub attempts: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound on MX lookups in flight for one upload
    pub lookup_concurrency: usize,
    pub max_upload_bytes: usize,
    pub dns: DnsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            lookup_concurrency: DEFAULT_LOOKUP_CONCURRENCY,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            dns: DnsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Reads `HOST`, `PORT`, `LOOKUP_CONCURRENCY`, `MAX_UPLOAD_BYTES`,
    /// `DNS_TIMEOUT_SECS` and `DNS_ATTEMPTS` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let lookup_concurrency =
            parse_var(&lookup, "LOOKUP_CONCURRENCY")?.unwrap_or(defaults.lookup_concurrency);
        if lookup_concurrency == 0 {
            return Err(ConfigError::Invalid {
                name: "LOOKUP_CONCURRENCY",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            host: lookup("HOST")
                .filter(|host| !host.trim().is_empty())
                .unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT")?.unwrap_or(defaults.port),
            lookup_concurrency,
            max_upload_bytes: parse_var(&lookup, "MAX_UPLOAD_BYTES")?
                .unwrap_or(defaults.max_upload_bytes),
            dns: DnsConfig {
                timeout: parse_var(&lookup, "DNS_TIMEOUT_SECS")?.map(Duration::from_secs),
                attempts: parse_var(&lookup, "DNS_ATTEMPTS")?,
            },
        })
    }
}

// Empty values count as unset.
fn parse_var<F, T>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
    }
}
