//! Favorites endpoints.
//!
//! The acting user is read from the path when listing and from the `{"user_id": ..}` JSON body
//! for every mutation.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::{FavoriteDto, FavoriteRequestDto},
    },
    server::{
        controller::util::request::{acting_user_id, path_id},
        error::Error,
        model::{app::AppState, favorite::FavoriteTarget},
        service::favorite::{AddFavoriteOutcome, FavoriteService},
    },
};

/// OpenAPI tag for favorite endpoints
pub static FAVORITE_TAG: &str = "favorite";

/// Get all favorites of a user
#[utoipa::path(
    get,
    path = "/users/{user_id}/favorites",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user")
    ),
    responses(
        (status = 200, description = "Success when retrieving the user's favorites", body = Vec<FavoriteDto>),
        (status = 400, description = "ID is not an integer", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    user_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let user_id = path_id(user_id)?;

    let favorites = FavoriteService::new(&state.db)
        .get_user_favorites(user_id)
        .await?;

    Ok((StatusCode::OK, Json(favorites)))
}

/// Add a planet to the acting user's favorites
#[utoipa::path(
    post,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("planet_id" = i32, Path, description = "ID of the planet")
    ),
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Favorite added, or already present", body = MessageDto),
        (status = 400, description = "Malformed body or missing user_id", body = ErrorDto),
        (status = 404, description = "User or planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    planet_id: Result<Path<i32>, PathRejection>,
    body: Result<Json<FavoriteRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let target = FavoriteTarget::Planet(path_id(planet_id)?);

    add_favorite(&state, target, body).await
}

/// Remove a planet from the acting user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("planet_id" = i32, Path, description = "ID of the planet")
    ),
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Favorite deleted", body = MessageDto),
        (status = 400, description = "Malformed body or missing user_id", body = ErrorDto),
        (status = 404, description = "Favorite planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_planet(
    State(state): State<AppState>,
    planet_id: Result<Path<i32>, PathRejection>,
    body: Result<Json<FavoriteRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let target = FavoriteTarget::Planet(path_id(planet_id)?);

    remove_favorite(&state, target, body).await
}

/// Add a person to the acting user's favorites
#[utoipa::path(
    post,
    path = "/favorite/people/{people_id}",
    tag = FAVORITE_TAG,
    params(
        ("people_id" = i32, Path, description = "ID of the person")
    ),
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Favorite added, or already present", body = MessageDto),
        (status = 400, description = "Malformed body or missing user_id", body = ErrorDto),
        (status = 404, description = "User or person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_people(
    State(state): State<AppState>,
    people_id: Result<Path<i32>, PathRejection>,
    body: Result<Json<FavoriteRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let target = FavoriteTarget::Person(path_id(people_id)?);

    add_favorite(&state, target, body).await
}

/// Remove a person from the acting user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/people/{people_id}",
    tag = FAVORITE_TAG,
    params(
        ("people_id" = i32, Path, description = "ID of the person")
    ),
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Favorite deleted", body = MessageDto),
        (status = 400, description = "Malformed body or missing user_id", body = ErrorDto),
        (status = 404, description = "Favorite people not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_people(
    State(state): State<AppState>,
    people_id: Result<Path<i32>, PathRejection>,
    body: Result<Json<FavoriteRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let target = FavoriteTarget::Person(path_id(people_id)?);

    remove_favorite(&state, target, body).await
}

async fn add_favorite(
    state: &AppState,
    target: FavoriteTarget,
    body: Result<Json<FavoriteRequestDto>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageDto>), Error> {
    let user_id = acting_user_id(body)?;

    let message = match FavoriteService::new(&state.db)
        .add_favorite(user_id, target)
        .await?
    {
        AddFavoriteOutcome::Added(_) => format!("Favorite {} added successfully", target.label()),
        AddFavoriteOutcome::AlreadyExists => {
            format!("Favorite {} already added", target.label())
        }
    };

    Ok((StatusCode::OK, Json(MessageDto::new(message))))
}

async fn remove_favorite(
    state: &AppState,
    target: FavoriteTarget,
    body: Result<Json<FavoriteRequestDto>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageDto>), Error> {
    let user_id = acting_user_id(body)?;

    FavoriteService::new(&state.db)
        .remove_favorite(user_id, target)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!(
            "Favorite {} deleted successfully",
            target.label()
        ))),
    ))
}
