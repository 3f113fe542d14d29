//! Code rendering endpoints (`/qr`, `/datamatrix`, `/ean128`, `/ean13`).

use axum::body::Bytes;
use axum::extract::{MatchedPath, RawQuery, State};
use axum::http::{HeaderMap, Method, header};
use axum::response::{IntoResponse, Response};

use crate::app::AppState;
use crate::error::RenderError;
use crate::render::{RawParams, render, resolve};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// GET|POST /{format}
pub async fn render_code(
    State(state): State<AppState>,
    matched: MatchedPath,
    method: Method,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> Result<Response, RenderError> {
    render_for_path(&state, matched.as_str(), &method, &headers, query.as_deref(), &body).await
}

/// Resolve parameters, run the pipeline off the async runtime, and build the
/// PNG response. Nothing is written until the whole image is encoded.
pub async fn render_for_path(
    state: &AppState,
    path: &str,
    method: &Method,
    headers: &HeaderMap,
    query: Option<&str>,
    body: &[u8],
) -> Result<Response, RenderError> {
    let spec = state
        .format(path)
        .ok_or_else(|| RenderError::UnknownFormat(path.to_string()))?;

    let form_body = is_form_submission(method, headers).then_some(body);
    let request = resolve(&RawParams::from_parts(query, form_body)?)?;
    tracing::debug!(
        path,
        width = request.width,
        height = request.height,
        level = ?request.ec_level,
        "Render requested"
    );

    let image = tokio::task::spawn_blocking(move || render(spec, &request))
        .await
        .map_err(|e| RenderError::Worker(e.to_string()))??;

    Ok(([(header::CONTENT_TYPE, "image/png")], image.png).into_response())
}

fn is_form_submission(method: &Method, headers: &HeaderMap) -> bool {
    let has_body = matches!(*method, Method::POST | Method::PUT | Method::PATCH);
    // Media types are case-insensitive; parameters after `;` are ignored.
    let is_form = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| ct.split(';').next())
        .is_some_and(|media| media.trim().eq_ignore_ascii_case(FORM_CONTENT_TYPE));
    has_body && is_form
}
