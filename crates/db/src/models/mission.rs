use questboard_core::types::{DbId, Points};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `missions` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Mission {
    pub id: DbId,
    pub title: String,
    pub difficulty: String,
    pub reward_points: Points,
}

/// DTO for creating a new mission. Values are stored as given.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMission {
    pub title: String,
    pub difficulty: String,
    pub reward_points: Points,
}
