//! Request handlers for the quest board.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `questboard_db`,
//! always acting on the configured player, and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod board;
pub mod missions;
pub mod player;
pub mod rewards;

use questboard_core::types::DbId;

use crate::error::{AppError, AppResult};

/// Resolve an `{id}` path segment.
///
/// A segment that is not an integer matches no row, so it is reported as a
/// missing `entity` rather than a malformed request.
pub(crate) fn parse_id(entity: &'static str, raw: &str) -> AppResult<DbId> {
    raw.parse()
        .map_err(|_| AppError::NotFound(format!("{entity} with id {raw} not found")))
}
