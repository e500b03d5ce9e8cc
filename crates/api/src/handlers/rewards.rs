//! Handlers for the `/rewards` resource.
//!
//! Rewards persist across redemptions; redeeming only debits the player.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use questboard_core::ledger::REWARD_ENTITY;
use questboard_db::models::reward::CreateReward;
use questboard_db::repositories::RewardRepo;

use crate::error::AppResult;
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

pub const REWARD_CREATED: &str = "Reward added successfully.";
pub const REWARD_REDEEMED: &str = "Reward redeemed successfully.";

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/rewards
///
/// List every reward in insertion order.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rewards = RewardRepo::list(&state.pool).await?;
    Ok(Json(rewards))
}

/// POST /api/rewards
///
/// Create a reward. Values are stored as given (no range checks).
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateReward>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let reward = RewardRepo::create(&state.pool, &input).await?;
    tracing::info!(
        id = reward.id,
        description = %reward.description,
        points_required = reward.points_required,
        "Reward created",
    );
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: REWARD_CREATED,
            id: reward.id,
        }),
    ))
}

/// POST /api/rewards/{id}/redeem
///
/// Debit the reward's cost from the player if the balance covers it.
pub async fn redeem(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(raw_id) = path?;
    let id = super::parse_id(REWARD_ENTITY, &raw_id)?;
    let player_id = state.player_id();

    let total_points = RewardRepo::redeem(&state.pool, id, player_id)
        .await?
        .into_result()?;

    tracing::info!(reward_id = id, player_id, total_points, "Reward redeemed");
    Ok(Json(MessageResponse {
        message: REWARD_REDEEMED,
    }))
}
