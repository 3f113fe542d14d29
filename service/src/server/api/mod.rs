//! HTTP handlers.

pub mod codes;
pub mod docs;

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::app::AppState;

/// GET /status
pub async fn status_handler(State(state): State<AppState>) -> Json<Value> {
    let formats: Vec<&str> = state.formats().iter().map(|spec| spec.path).collect();
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "listen": state.config().addr(),
        "formats": formats,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceConfig;

    #[tokio::test]
    async fn status_reports_routes_and_address() {
        let config = ServiceConfig {
            host: "127.0.0.1".into(),
            port: "9000".into(),
        };
        let Json(body) = status_handler(State(AppState::new(config))).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["listen"], "127.0.0.1:9000");
        assert_eq!(body["formats"].as_array().map(Vec::len), Some(4));
    }
}
