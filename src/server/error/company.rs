//! Company record errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::{api::ErrorDto, company::ValidationErrors},
    server::error::InternalServerError,
};

/// Errors of the company record lifecycle.
#[derive(Error, Debug)]
pub enum CompanyError {
    /// No company is stored under the identity.
    #[error("Company {0:?} not found")]
    NotFound(String),
    /// The candidate record violated one or more rules, nothing was persisted.
    #[error("Company failed validation, {0}")]
    Validation(ValidationErrors),
    /// Every drawn identity collided with a record created concurrently.
    #[error("Failed to store company under a fresh ID after {0} attempts")]
    IdentityExhausted(u32),
}

impl IntoResponse for CompanyError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(company_id) => {
                tracing::debug!("Company {} not found", company_id);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Company not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::Validation(errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}
