use questboard_core::types::{DbId, Points};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `rewards` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Reward {
    pub id: DbId,
    pub description: String,
    pub points_required: Points,
}

/// DTO for creating a new reward. Values are stored as given.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReward {
    pub description: String,
    pub points_required: Points,
}
