//! HTTP controller endpoints for the company master API.
//!
//! This module contains Axum handlers for the geo catalog, the company form's
//! state/city selection and the company records. Controllers extract request values,
//! call the services and return HTTP responses. The form selection lives in the
//! tower-sessions session and every endpoint carries utoipa OpenAPI annotations.

pub mod company;
pub mod geo;
pub mod selection;
