//! Handlers for the `/missions` resource.
//!
//! Missions are one-shot: completing one deletes it and credits its reward
//! to the player.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use questboard_core::ledger::MISSION_ENTITY;
use questboard_db::models::mission::CreateMission;
use questboard_db::repositories::MissionRepo;

use crate::error::AppResult;
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

pub const MISSION_CREATED: &str = "Mission added successfully.";
pub const MISSION_COMPLETED: &str = "Mission completed and points added.";

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/missions
///
/// List every mission in insertion order.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let missions = MissionRepo::list(&state.pool).await?;
    Ok(Json(missions))
}

/// POST /api/missions
///
/// Create a mission. Values are stored as given (no range checks).
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateMission>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let mission = MissionRepo::create(&state.pool, &input).await?;
    tracing::info!(
        id = mission.id,
        title = %mission.title,
        reward_points = mission.reward_points,
        "Mission created",
    );
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: MISSION_CREATED,
            id: mission.id,
        }),
    ))
}

/// PUT /api/missions/{id}/complete
///
/// Consume the mission and credit its reward to the player in one
/// transaction.
pub async fn complete(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(raw_id) = path?;
    let id = super::parse_id(MISSION_ENTITY, &raw_id)?;
    let player_id = state.player_id();

    let total_points = MissionRepo::complete(&state.pool, id, player_id)
        .await?
        .into_result()?;

    tracing::info!(mission_id = id, player_id, total_points, "Mission completed");
    Ok(Json(MessageResponse {
        message: MISSION_COMPLETED,
    }))
}
