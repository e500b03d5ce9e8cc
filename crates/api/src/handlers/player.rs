//! Handlers for the `/player` resource.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use questboard_core::error::CoreError;
use questboard_core::ledger::PLAYER_ENTITY;
use questboard_db::repositories::PlayerRepo;

use crate::error::{AppError, AppResult};
use crate::response::PointsResponse;
use crate::state::AppState;

/// GET /api/player
///
/// Return the configured player's points balance. A missing player row is
/// reported as 404, never defaulted.
pub async fn get_points(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let player_id = state.player_id();
    let player = PlayerRepo::find_by_id(&state.pool, player_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: PLAYER_ENTITY,
            id: player_id,
        }))?;
    Ok(Json(PointsResponse {
        total_points: player.total_points,
    }))
}
