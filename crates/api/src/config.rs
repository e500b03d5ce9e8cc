use std::path::PathBuf;

use questboard_core::ledger::DEFAULT_PLAYER_ID;
use questboard_core::types::DbId;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for running the board locally.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// SQLite connection string (default: `sqlite://quest_manager.db`).
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A `*` entry allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// The player every request acts on (default: `1`).
    pub player_id: DbId,
    /// Write the default catalogue into empty tables at startup.
    pub seed_defaults: bool,
    /// Directory of the browser client served for non-API paths.
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                     |
    /// |------------------------|-----------------------------|
    /// | `HOST`                 | `0.0.0.0`                   |
    /// | `PORT`                 | `3000`                      |
    /// | `DATABASE_URL`         | `sqlite://quest_manager.db` |
    /// | `CORS_ORIGINS`         | `*`                         |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                        |
    /// | `PLAYER_ID`            | `1`                         |
    /// | `SEED_DEFAULTS`        | `true`                      |
    /// | `STATIC_DIR`           | unset                       |
    ///
    /// Panics on malformed values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://quest_manager.db".into());

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let player_id: DbId = std::env::var("PLAYER_ID")
            .map(|v| v.parse().expect("PLAYER_ID must be a valid integer"))
            .unwrap_or(DEFAULT_PLAYER_ID);

        let seed_defaults: bool = std::env::var("SEED_DEFAULTS")
            .unwrap_or_else(|_| "true".into())
            .parse()
            .expect("SEED_DEFAULTS must be `true` or `false`");

        let static_dir = std::env::var("STATIC_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            player_id,
            seed_defaults,
            static_dir,
        }
    }

    /// Whether any origin may call the API.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
