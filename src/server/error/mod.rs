//! Error types for the company master server.
//!
//! Domain-specific error enums (configuration, company) are aggregated into a single
//! [`Error`] with `thiserror`. Every error implements `IntoResponse` so handlers can return
//! `Result<_, Error>` directly.

pub mod company;
pub mod config;
pub mod retry;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{company::CompanyError, config::ConfigError},
};

/// Main error type for the company master server.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Company errors (validation failures, unknown company, identity assignment)
/// - External library errors (database, sessions, session store)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Company error (validation, not found, identity exhaustion).
    #[error(transparent)]
    CompanyError(#[from] CompanyError),
    /// Parse error for request values such as comma separated ID lists.
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// I/O error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For unparsable request values
/// - 404 Not Found - For unknown companies
/// - 422 Unprocessable Entity - For validation failures, with the field-keyed messages
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::CompanyError(err) => err.into_response(),
            Self::ParseError(reason) => {
                tracing::debug!("Rejected request value: {}", reason);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: format!("Invalid request value: {}", reason),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message so internal details are not
/// exposed to the client.
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
