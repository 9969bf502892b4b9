//! Configuration loader for the `wattwatch-api` backend service.
//!
//! This module centralizes all runtime configuration values and their defaults,
//! loading from environment variables (with optional `.env` file support
//! provided by the caller). By consolidating configuration logic here, we
//! avoid scattering `env::var` calls throughout the codebase.
//!
use std::env;

use anyhow::{anyhow, Result};

/// Parse an optional integer environment variable with a default value.
macro_rules! parse_env_u32 {
    ($var_name:expr, $default:expr) => {
        env::var($var_name)
            .ok()
            .map(|v| v.parse::<u32>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Read an optional string environment variable; empty counts as unset.
macro_rules! optional_env {
    ($var_name:expr) => {
        env::var($var_name).ok().filter(|v| !v.trim().is_empty())
    };
}

/// Strongly typed application configuration.
///
/// All fields are immutable after loading, ensuring a consistent configuration
/// snapshot for the lifetime of the application.
#[derive(Debug, Clone)]
pub struct Config {
    // ---
    /// TCP port the HTTP server binds on all interfaces.
    pub port: u16,

    /// Optional path to a JSON catalog replacing the built-in demo data.
    pub catalog_path: Option<String>,

    /// Number of rooms `/rooms` returns when no `limit` is given.
    pub rooms_default_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            catalog_path: None,
            rooms_default_limit: 1000,
        }
    }
}

/// Load configuration from environment variables with defaults.
///
/// Optional:
/// - `WATTWATCH_PORT` – HTTP port (default: 8080)
/// - `WATTWATCH_CATALOG` – JSON catalog override (default: built-in)
/// - `ROOMS_DEFAULT_LIMIT` – default page size for `/rooms` (default: 1000)
///
/// Returns an error if any variable is present but invalid.
pub fn load_from_env() -> Result<Config> {
    // ---
    let port = parse_env_u32!("WATTWATCH_PORT", 8080);
    let port = u16::try_from(port).map_err(|_| anyhow!("Invalid WATTWATCH_PORT: {}", port))?;
    let catalog_path = optional_env!("WATTWATCH_CATALOG");
    let rooms_default_limit = parse_env_u32!("ROOMS_DEFAULT_LIMIT", 1000);

    Ok(Config {
        port,
        catalog_path,
        rooms_default_limit,
    })
}

impl Config {
    /// Log the loaded configuration for debugging purposes.
    pub fn log_config(&self) {
        // ---
        let catalog = self.catalog_path.as_deref().unwrap_or("<built-in>");

        tracing::info!("Configuration loaded:");
        tracing::info!("  WATTWATCH_PORT      : {}", self.port);
        tracing::info!("  WATTWATCH_CATALOG   : {}", catalog);
        tracing::info!("  ROOMS_DEFAULT_LIMIT : {}", self.rooms_default_limit);
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    // Environment is process-global; keep every env mutation in one test.
    #[test]
    fn test_load_from_env() {
        // ---
        env::remove_var("WATTWATCH_PORT");
        env::remove_var("WATTWATCH_CATALOG");
        env::remove_var("ROOMS_DEFAULT_LIMIT");

        let cfg = load_from_env().unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.catalog_path, None);
        assert_eq!(cfg.rooms_default_limit, 1000);

        env::set_var("WATTWATCH_PORT", "9090");
        env::set_var("WATTWATCH_CATALOG", "  ");
        env::set_var("ROOMS_DEFAULT_LIMIT", "5");
        let cfg = load_from_env().unwrap();
        assert_eq!(cfg.port, 9090);
        assert_eq!(cfg.catalog_path, None);
        assert_eq!(cfg.rooms_default_limit, 5);

        env::set_var("WATTWATCH_PORT", "70000");
        assert!(load_from_env().is_err());

        env::set_var("WATTWATCH_PORT", "abc");
        let err = load_from_env().unwrap_err();
        assert!(err.to_string().starts_with("Invalid WATTWATCH_PORT"));

        env::remove_var("WATTWATCH_PORT");
        env::remove_var("ROOMS_DEFAULT_LIMIT");
    }
}
