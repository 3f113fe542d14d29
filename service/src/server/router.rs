use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::api;
use crate::app::AppState;

/// Create the axum router: one route per format plus docs and status.
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        // --- Core ---
        .route("/", get(api::docs::index))
        .route("/status", get(api::status_handler));

    // --- Codes ---
    for spec in state.formats() {
        router = router.route(
            spec.path,
            get(api::codes::render_code).post(api::codes::render_code),
        );
    }

    router
        // --- Middleware ---
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
