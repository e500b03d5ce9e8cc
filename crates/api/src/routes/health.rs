//! Readiness check for the quest board.
//!
//! The board is only usable when the database answers and the configured
//! player row exists; without the player every points operation returns 404.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use questboard_core::types::DbId;
use questboard_db::repositories::PlayerRepo;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `"ok"` when the board is usable, `"degraded"` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// The player every request acts on.
    pub player_id: DbId,
    /// Whether that player row exists.
    pub player_ready: bool,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let player_id = state.player_id();
    let db_healthy = questboard_db::health_check(&state.pool).await.is_ok();

    let player_ready = db_healthy
        && match PlayerRepo::find_by_id(&state.pool, player_id).await {
            Ok(player) => player.is_some(),
            Err(e) => {
                tracing::warn!(error = %e, player_id, "Player lookup failed during health check");
                false
            }
        };

    if db_healthy && !player_ready {
        tracing::warn!(player_id, "Configured player is missing");
    }

    Json(HealthResponse {
        status: if player_ready { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        player_id,
        player_ready,
    })
}

/// Mounted at the root, outside `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
