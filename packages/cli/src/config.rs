use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;

use carryover_core::database_file;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub host: String,
    pub database_path: PathBuf,
    pub api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(port_str) => parse_port(&port_str)?,
            None => DEFAULT_PORT,
        };

        let host = non_empty("HOST", lookup("HOST"))?.unwrap_or_else(|| DEFAULT_HOST.to_string());

        let database_path = non_empty("DATABASE_PATH", lookup("DATABASE_PATH"))?
            .map(PathBuf::from)
            .unwrap_or_else(database_file);

        let api_url = non_empty("CARRYOVER_API_URL", lookup("CARRYOVER_API_URL"))?
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Config {
            port,
            host,
            database_path,
            api_url,
        })
    }
}

pub fn parse_port(value: &str) -> Result<u16, ConfigError> {
    let port = value.trim().parse::<u16>()?;

    // Validate port is in valid range
    if port == 0 {
        return Err(ConfigError::PortOutOfRange(port));
    }
    Ok(port)
}

fn non_empty(key: &'static str, value: Option<String>) -> Result<Option<String>, ConfigError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(ConfigError::Empty(key)),
        other => Ok(other),
    }
}
