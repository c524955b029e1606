use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;

use crate::auth::password::{DEFAULT_COST, MAX_COST, MIN_COST};

/// Errors raised while reading configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("BCRYPT_COST must be between 4 and 31, got {0}")]
    CostOutOfRange(u32),
}

/// Runtime configuration
///
/// Read from the process environment, after loading `.env` if present:
/// - `HOST` - bind address (default `0.0.0.0`)
/// - `PORT` - listen port (default `3000`)
/// - `TRACK_SAMPLER_SEED` - fixes the initial track selection sequence
/// - `BCRYPT_COST` - password hashing work factor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub track_sampler_seed: Option<u64>,
    pub bcrypt_cost: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            track_sampler_seed: None,
            bcrypt_cost: DEFAULT_COST,
        }
    }
}

impl AppConfig {
    /// Loads `.env` and reads the configuration from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = parse_var(&lookup, "HOST")?.unwrap_or(defaults.host);
        let port = parse_var(&lookup, "PORT")?.unwrap_or(defaults.port);
        let track_sampler_seed = parse_var(&lookup, "TRACK_SAMPLER_SEED")?;
        let bcrypt_cost = parse_var(&lookup, "BCRYPT_COST")?.unwrap_or(defaults.bcrypt_cost);

        if !(MIN_COST..=MAX_COST).contains(&bcrypt_cost) {
            return Err(ConfigError::CostOutOfRange(bcrypt_cost));
        }

        Ok(Self {
            host,
            port,
            track_sampler_seed,
            bcrypt_cost,
        })
    }

    /// Address the server binds to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}
