//! Shared response payload types for API handlers.
//!
//! Every response carries a `message` string except the plain reads (lists
//! and the points balance), which return the records themselves.

use questboard_core::types::{DbId, Points};
use serde::Serialize;

/// `{ "message": ... }` confirmation for mutations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// `{ "message": ..., "id": ... }` confirmation for inserts.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub id: DbId,
}

/// `{ "total_points": ... }` for the player's balance.
#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub total_points: Points,
}
