use std::{net::SocketAddr, str::FromStr, time::Duration};

use crate::server::{
    allocator::AllocationPolicy,
    error::{config::ConfigError, AppError},
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,

    /// Policy used for every create operation.
    pub id_allocation: AllocationPolicy,
    /// Upper bound on the time a single HTTP request may take.
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `DATABASE_URL` is required; `BIND_ADDR`, `ID_ALLOCATION` and
    /// `REQUEST_TIMEOUT_SECS` fall back to defaults when unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_addr = parse_or_default(&lookup, "BIND_ADDR", || {
            SocketAddr::from_str(DEFAULT_BIND_ADDR)
        })?;
        let id_allocation =
            parse_or_default(&lookup, "ID_ALLOCATION", || Ok(AllocationPolicy::default()))?;
        let request_timeout_secs = parse_or_default(&lookup, "REQUEST_TIMEOUT_SECS", || {
            Ok::<_, std::num::ParseIntError>(DEFAULT_REQUEST_TIMEOUT_SECS)
        })?;

        Ok(Self {
            database_url,
            bind_addr,
            id_allocation,
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }
}

fn parse_or_default<F, T, D>(lookup: &F, name: &str, default: D) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
    D: FnOnce() -> Result<T, T::Err>,
{
    let invalid = |value: String, reason: T::Err| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
        reason: reason.to_string(),
    };

    match lookup(name) {
        Some(value) => value.parse::<T>().map_err(|e| invalid(value, e)),
        None => default().map_err(|e| invalid(String::new(), e)),
    }
}
