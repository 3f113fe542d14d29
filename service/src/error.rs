//! Render pipeline errors and their HTTP mapping.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use image_processor::ProcessError;
use symbol_encoder::EncodeError;

/// Failure of one stage of the render pipeline.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("missing text")]
    MissingText,

    #[error("invalid form data: {0}")]
    MalformedParams(String),

    #[error(transparent)]
    Encoding(#[from] EncodeError),

    #[error("scale error: {0}")]
    Scale(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("render worker failed: {0}")]
    Worker(String),

    #[error("no format registered for {0}")]
    UnknownFormat(String),
}

impl From<ProcessError> for RenderError {
    fn from(e: ProcessError) -> Self {
        if e.is_scale_error() {
            Self::Scale(e.to_string())
        } else {
            Self::Serialization(e.to_string())
        }
    }
}

impl RenderError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingText | Self::MalformedParams(_) => StatusCode::BAD_REQUEST,
            Self::UnknownFormat(_) => StatusCode::NOT_FOUND,
            Self::Encoding(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            Self::Encoding(_) | Self::Scale(_) | Self::Serialization(_) | Self::Worker(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for RenderError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, error = %self, "Render failed");
        } else {
            tracing::warn!(%status, error = %self, "Render rejected");
        }
        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_text_is_bad_request() {
        assert_eq!(RenderError::MissingText.status(), StatusCode::BAD_REQUEST);
        assert_eq!(RenderError::MissingText.to_string(), "missing text");
    }

    #[test]
    fn malformed_params_are_bad_request() {
        let err = RenderError::MalformedParams("invalid URL escape \"%zz\"".into());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn encoding_status_depends_on_cause() {
        let client = RenderError::from(EncodeError::InvalidInput("bad digits".into()));
        assert_eq!(client.status(), StatusCode::BAD_REQUEST);
        assert_eq!(client.to_string(), "bad digits");

        let internal = RenderError::from(EncodeError::Internal("boom".into()));
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn process_errors_map_to_server_errors() {
        let scale = RenderError::from(ProcessError::InvalidSize {
            width: 0,
            height: 10,
        });
        assert!(matches!(scale, RenderError::Scale(_)));
        assert_eq!(scale.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let ser = RenderError::from(ProcessError::Serialization("io".into()));
        assert!(matches!(ser, RenderError::Serialization(_)));
        assert_eq!(ser.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn response_is_plain_text() {
        let response = RenderError::MissingText.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"missing text");
    }
}
