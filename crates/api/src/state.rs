use std::sync::Arc;

use questboard_core::types::DbId;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted and the config sits
/// behind an `Arc`. Handlers keep nothing between requests.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: questboard_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// The player the current request acts on.
    pub fn player_id(&self) -> DbId {
        self.config.player_id
    }
}
