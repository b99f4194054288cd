pub mod health;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /analyze-scene      AI shot breakdown (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/analyze-scene", post(handlers::scene::analyze_scene))
}
