//! Environment-driven HTTP and seed configuration.
//!
//! Environment variables must be set by the runtime environment:
//! - Docker: via docker-compose env_file or docker run --env-file
//! - Local dev: source env files manually (e.g., set -a; . ./.env; set +a)

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

/// Bind address for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

/// Read `BACKEND_HOST` / `BACKEND_PORT`, falling back to defaults.
pub fn http_config_from_env() -> Result<HttpConfig, AppError> {
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

    let port = match std::env::var("BACKEND_PORT") {
        Ok(raw) => raw.parse::<u16>().map_err(|_| {
            AppError::config(format!("BACKEND_PORT must be a valid port number, got: {raw}"))
        })?,
        Err(_) => DEFAULT_PORT,
    };

    Ok(HttpConfig { host, port })
}

/// Which dataset the storage starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedProfile {
    /// The original dashboard's demo dataset.
    #[default]
    Demo,
    /// Empty store (used by most tests).
    Empty,
}

impl SeedProfile {
    /// Read `BACKEND_SEED` ("demo" or "empty"); unknown values are rejected.
    pub fn from_env() -> Result<Self, AppError> {
        match std::env::var("BACKEND_SEED") {
            Ok(raw) => raw.parse(),
            Err(_) => Ok(Self::Demo),
        }
    }
}

impl std::str::FromStr for SeedProfile {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "demo" => Ok(Self::Demo),
            "empty" => Ok(Self::Empty),
            other => Err(AppError::config(format!(
                "BACKEND_SEED must be 'demo' or 'empty', got: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_profile_parses_known_values() {
        assert_eq!("demo".parse::<SeedProfile>().unwrap(), SeedProfile::Demo);
        assert_eq!("EMPTY".parse::<SeedProfile>().unwrap(), SeedProfile::Empty);
    }

    #[test]
    fn seed_profile_rejects_unknown_values() {
        assert!("full".parse::<SeedProfile>().is_err());
    }
}
