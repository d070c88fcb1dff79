//! Client-facing request errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Client errors raised while validating a request.
///
/// The `Display` output is returned to the client verbatim in the `error` field.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// A referenced entity does not exist, e.g. "Planet not found"
    #[error("{0}")]
    NotFound(&'static str),
    /// The request body could not be read as JSON
    #[error("{0}")]
    BadRequest(String),
    /// The request body is valid JSON but lacks a required field
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) | Self::MissingField(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!("Client error: {}", self);

        (
            self.status(),
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
