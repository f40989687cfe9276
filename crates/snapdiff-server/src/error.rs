use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use snapdiff_fs::FsError;
use snapdiff_render::html;

/// Errors surfaced by the HTTP layer.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The requested file exists in neither compared version.
    #[error("file not found in either version: {0}")]
    FileNotFound(String),

    /// Boundary filesystem error (missing project/version, binary file, I/O).
    #[error(transparent)]
    Fs(#[from] FsError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Convenience alias for server results.
pub type ServerResult<T> = Result<T, ServerError>;

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServerError::FileNotFound(_) => StatusCode::NOT_FOUND,
            ServerError::Fs(FsError::ProjectNotFound(_)) => StatusCode::NOT_FOUND,
            ServerError::Fs(FsError::VersionNotFound { .. }) => StatusCode::NOT_FOUND,
            ServerError::Fs(FsError::NonUtf8(_)) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        }
        (status, Html(html::not_found_page(&self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_project_maps_to_404() {
        let response =
            ServerError::Fs(FsError::ProjectNotFound("demo".into())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn binary_file_maps_to_415() {
        let response =
            ServerError::Fs(FsError::NonUtf8("blob.bin".into())).into_response();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[test]
    fn config_error_maps_to_500() {
        let response = ServerError::Config("bad".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
