use paygate_core::pagination::PaginationConfig;

use crate::auth::jwt::JwtConfig;

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
    /// Grace period for in-flight requests after a shutdown signal (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Listing defaults and the hard page-size cap.
    pub pagination: PaginationConfig,
    /// Base URL of the billing backend.
    pub billing_url: String,
    /// Per-call timeout for billing backend requests in seconds (default: `10`).
    pub billing_timeout_secs: u64,
    /// Emit JSON log lines instead of human-readable ones.
    pub log_json: bool,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                    |
    /// |-------------------------|----------------------------|
    /// | `HOST`                  | `0.0.0.0`                  |
    /// | `PORT`                  | `3000`                     |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `30`                       |
    /// | `LIMIT_DEFAULT`         | `100`                      |
    /// | `OFFSET_DEFAULT`        | `0`                        |
    /// | `LIMIT_MAX`             | `1000`                     |
    /// | `BILLING_URL`           | `http://localhost:8080`    |
    /// | `BILLING_TIMEOUT_SECS`  | `10`                       |
    /// | `LOG_FORMAT`            | `text` (`json` to switch)  |
    ///
    /// # Panics
    ///
    /// Panics on unparsable values or an inconsistent pagination setup;
    /// misconfiguration should fail at startup.
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

        let limit_default: i32 = std::env::var("LIMIT_DEFAULT")
            .unwrap_or_else(|_| "100".into())
            .parse()
            .expect("LIMIT_DEFAULT must be a valid i32");

        let offset_default: i32 = std::env::var("OFFSET_DEFAULT")
            .unwrap_or_else(|_| "0".into())
            .parse()
            .expect("OFFSET_DEFAULT must be a valid i32");

        let limit_max: i32 = std::env::var("LIMIT_MAX")
            .unwrap_or_else(|_| "1000".into())
            .parse()
            .expect("LIMIT_MAX must be a valid i32");

        let pagination = PaginationConfig::new(limit_default, offset_default, limit_max)
            .unwrap_or_else(|e| panic!("Invalid pagination settings: {e}"));

        let billing_url = std::env::var("BILLING_URL")
            .unwrap_or_else(|_| "http://localhost:8080".into())
            .trim_end_matches('/')
            .to_string();

        let billing_timeout_secs: u64 = std::env::var("BILLING_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("BILLING_TIMEOUT_SECS must be a valid u64");

        let log_json = std::env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            pagination,
            billing_url,
            billing_timeout_secs,
            log_json,
            jwt,
        }
    }
}
