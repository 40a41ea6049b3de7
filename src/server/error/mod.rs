//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type returned by services and controllers. It implements
//! `IntoResponse` so handlers can return `Result<impl IntoResponse, AppError>` and have each
//! variant mapped to its status code and body shape.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, ErrorsDto},
    server::error::config::ConfigError,
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error if it ever reaches a response.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding or serving the listener.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with `{"error": <message>}`.
    #[error("{0}")]
    NotFound(String),

    /// Validation or integrity failure while creating an association.
    ///
    /// Results in 400 Bad Request with `{"errors": [...]}`. The list is never empty.
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
}

impl AppError {
    /// Wraps a single message as a validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(vec![message.into()])
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation`, with an `errors` list body
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For every other variant, with a generic message
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ErrorsDto { errors })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client so storage details are
/// not exposed.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
