use std::time::Duration;

use vtwin_core::placement::PlacementBudget;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Graceful shutdown timeout in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Wall-clock budget for finding a free marker position, in
    /// milliseconds (default: `5000`).
    pub placement_timeout_ms: u64,
    /// Optional cap on placement samples (default: unset).
    pub placement_max_attempts: Option<u32>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                    |
    /// |--------------------------|----------------------------|
    /// | `HOST`                   | `0.0.0.0`                  |
    /// | `PORT`                   | `3000`                     |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`  | `30`                       |
    /// | `PLACEMENT_TIMEOUT_MS`   | `5000`                     |
    /// | `PLACEMENT_MAX_ATTEMPTS` | unset                      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let placement_timeout_ms: u64 = std::env::var("PLACEMENT_TIMEOUT_MS")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PLACEMENT_TIMEOUT_MS must be a valid u64");

        let placement_max_attempts: Option<u32> = std::env::var("PLACEMENT_MAX_ATTEMPTS")
            .ok()
            .map(|v| v.parse().expect("PLACEMENT_MAX_ATTEMPTS must be a valid u32"));

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            placement_timeout_ms,
            placement_max_attempts,
        }
    }

    /// Budget handed to overlap avoidance on every entity creation.
    pub fn placement_budget(&self) -> PlacementBudget {
        let budget = PlacementBudget::new(Duration::from_millis(self.placement_timeout_ms));
        match self.placement_max_attempts {
            Some(max) => budget.with_max_attempts(max),
            None => budget,
        }
    }
}
