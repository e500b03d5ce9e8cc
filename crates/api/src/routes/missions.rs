//! Route definitions for missions.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::missions;
use crate::state::AppState;

/// Routes mounted at `/missions`.
///
/// ```text
/// GET  /                -> list
/// POST /                -> create
/// PUT  /{id}/complete   -> complete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(missions::list).post(missions::create))
        .route("/{id}/complete", put(missions::complete))
}
