//! Handler for the board-wide reset.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use questboard_db::repositories::BoardRepo;

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

pub const BOARD_RESET: &str =
    "All missions and rewards have been deleted, and points have been reset to 0.";

/// DELETE /api/rewards/reset
///
/// Delete every mission and reward and zero the player's balance, all in one
/// transaction. Irreversible.
pub async fn reset(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let player_id = state.player_id();
    let summary = BoardRepo::reset(&state.pool, player_id).await?;

    tracing::info!(
        player_id,
        missions_removed = summary.missions_removed,
        rewards_removed = summary.rewards_removed,
        points_reset = summary.points_reset,
        "Board reset",
    );
    Ok(Json(MessageResponse {
        message: BOARD_RESET,
    }))
}
