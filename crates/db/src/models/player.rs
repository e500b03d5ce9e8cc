use questboard_core::types::{DbId, Points};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `players` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Player {
    pub id: DbId,
    pub total_points: Points,
}
