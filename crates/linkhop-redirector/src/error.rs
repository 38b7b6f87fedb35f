use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use linkhop_core::CoreError;
use thiserror::Error;
use tracing::error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Errors produced while answering a redirect request.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("short code not found")]
    NotFound,
    #[error("malformed request path: {0}")]
    MalformedPath(#[from] CoreError),
    #[error("stored url is not a valid location header: {0}")]
    InvalidLocation(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound | AppError::MalformedPath(_) => {
                (StatusCode::NOT_FOUND, "404 page not found").into_response()
            }
            AppError::InvalidLocation(url) => {
                error!(url = %url, "cannot redirect to stored url");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// Errors that stop the redirect server.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
