pub mod health;
pub mod missions;
pub mod rewards;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Plain-text greeting served at `/` when no static client is configured.
pub const WELCOME: &str = "Welcome to the quest manager!";

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /player                      points balance (GET)
///
/// /missions                    list, create (GET, POST)
/// /missions/{id}/complete      complete (PUT)
///
/// /rewards                     list, create (GET, POST)
/// /rewards/{id}/redeem         redeem (POST)
/// /rewards/reset               reset the whole board (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/player", get(handlers::player::get_points))
        .nest("/missions", missions::router())
        .nest("/rewards", rewards::router())
}

/// GET / -- greeting for a bare server.
pub async fn welcome() -> &'static str {
    WELCOME
}
