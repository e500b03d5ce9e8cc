//! Route definitions for rewards and the board reset.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{board, rewards};
use crate::state::AppState;

/// Routes mounted at `/rewards`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// POST   /{id}/redeem   -> redeem
/// DELETE /reset         -> reset missions, rewards and points
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(rewards::list).post(rewards::create))
        .route("/{id}/redeem", post(rewards::redeem))
        .route("/reset", delete(board::reset))
}
