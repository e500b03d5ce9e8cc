//! Serving the browser client from a configured directory.

mod common;

use axum::http::StatusCode;
use common::{body_json, body_text, build_test_app_with_static, get};
use sqlx::SqlitePool;

const INDEX: &str = "<!doctype html><title>Quest manager</title>";

#[sqlx::test(migrations = "../../db/migrations")]
async fn static_dir_serves_index_and_assets(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log('hi');").unwrap();

    let app = build_test_app_with_static(pool, dir.path().to_path_buf());

    let index = get(app.clone(), "/").await;
    assert_eq!(index.status(), StatusCode::OK);
    assert_eq!(body_text(index).await, INDEX);

    let script = get(app, "/app.js").await;
    assert_eq!(script.status(), StatusCode::OK);
    assert_eq!(body_text(script).await, "console.log('hi');");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn api_routes_take_precedence_over_static_files(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), INDEX).unwrap();

    let app = build_test_app_with_static(pool, dir.path().to_path_buf());

    let response = get(app.clone(), "/api/missions").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));

    let missing = get(app, "/missing.css").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}
