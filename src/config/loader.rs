//! Configuration loading from the process environment.

use std::num::{NonZeroU16, NonZeroU64};
use std::str::FromStr;

use crate::config::schema::ProbeConfig;

/// Environment variable holding the listen port.
pub const PORT_VAR: &str = "PORT";

/// Environment variable holding the access-log interval.
pub const LOG_EVERY_N_VAR: &str = "LOG_EVERY_N";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

impl ProbeConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration using `lookup` to resolve variable names.
    ///
    /// Variables that are missing or blank keep their default value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ProbeConfig::default();

        let port = parse_var::<NonZeroU16, _>(&lookup, PORT_VAR)?.unwrap_or(defaults.port);
        let log_every_n =
            parse_var::<NonZeroU64, _>(&lookup, LOG_EVERY_N_VAR)?.unwrap_or(defaults.log_every_n);

        Ok(Self { port, log_every_n })
    }
}

fn parse_var<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse::<T>()
        .map(Some)
        .map_err(|e| ConfigError::InvalidValue {
            var,
            value: raw.clone(),
            reason: e.to_string(),
        })
}
