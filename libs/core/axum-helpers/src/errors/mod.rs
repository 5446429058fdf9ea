pub mod codes;
pub mod handlers;

pub use codes::ErrorCode;

use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Content type of every error body.
pub const PLAIN_TEXT_UTF8: &str = "text/plain; charset=utf-8";

/// Application error rendered as a plain-text HTTP response.
///
/// The variant selects the status code; the payload is the exact body text.
/// A trailing newline is appended on the wire, so `NotFound("product not found")`
/// is sent as `product not found\n` with status 404.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::BadRequest(_) => ErrorCode::InvalidPayload,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::InternalServerError(_) => ErrorCode::InternalError,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::InternalServerError(msg) => msg,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        let status = code.status();

        if status.is_server_error() {
            tracing::error!(error_code = code.code(), kind = %code, "{}", self.message());
        } else {
            tracing::warn!(error_code = code.code(), kind = %code, "{}", self.message());
        }

        let mut response = (status, format!("{}\n", self.message())).into_response();
        let headers = response.headers_mut();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(PLAIN_TEXT_UTF8),
        );
        headers.insert(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        );
        response
    }
}
