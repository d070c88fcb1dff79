//! Extraction helpers shared by handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path,
    },
    Json,
};

use crate::{
    model::favorite::FavoriteRequestDto,
    server::error::{api::ApiError, Error},
};

/// Reads an integer ID from the request path
///
/// # Returns
/// - `Ok(i32)`: The path segment parsed as an integer
/// - `Err(ApiError::BadRequest)`: The segment is not an integer
pub fn path_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, Error> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => Err(ApiError::BadRequest(rejection.body_text()).into()),
    }
}

/// Reads the acting user from a favorite request body
///
/// # Returns
/// - `Ok(i32)`: The `user_id` field of the body
/// - `Err(ApiError::BadRequest)`: Missing body, wrong content type or malformed JSON
/// - `Err(ApiError::MissingField)`: The body has no `user_id`
pub fn acting_user_id(
    body: Result<Json<FavoriteRequestDto>, JsonRejection>,
) -> Result<i32, Error> {
    let Json(request) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    request
        .user_id
        .ok_or_else(|| ApiError::MissingField("user_id").into())
}
