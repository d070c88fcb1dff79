use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holonet::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::FavoriteRequestDto,
    },
    server::controller::favorite::add_favorite_planet,
};
use sea_orm::EntityTrait;

use super::*;

/// Tests adding a planet favorite for an existing user and planet.
///
/// Expected: Ok with 200 OK response and a success message
#[tokio::test]
async fn success_adding_planet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("luke").await?;
    let planet = test.catalog().insert_planet("Tatooine").await?;

    let result = add_favorite_planet(
        State(test.into_app_state()),
        Ok(Path(planet.id)),
        Ok(acting_user(user.id)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: MessageDto = body_json(resp).await;
    assert_eq!(body.message, "Favorite planet added successfully");

    Ok(())
}

/// Tests adding the same planet favorite twice.
///
/// Expected: Ok with 200 OK response reporting the favorite as already added, one stored row
#[tokio::test]
async fn repeated_add_reports_already_added() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("luke").await?;
    let planet = test.catalog().insert_planet("Tatooine").await?;
    test.favorite()
        .insert_planet_favorite(user.id, planet.id)
        .await?;

    let result = add_favorite_planet(
        State(test.into_app_state()),
        Ok(Path(planet.id)),
        Ok(acting_user(user.id)),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: MessageDto = body_json(resp).await;
    assert_eq!(body.message, "Favorite planet already added");
    let stored = entity::prelude::Favorite::find().all(&test.db).await?;
    assert_eq!(stored.len(), 1);

    Ok(())
}

/// Tests adding a planet that does not exist.
///
/// Expected: Err responding 404 with "Planet not found"
#[tokio::test]
async fn not_found_for_nonexistent_planet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("luke").await?;

    let result = add_favorite_planet(
        State(test.into_app_state()),
        Ok(Path(9999)),
        Ok(acting_user(user.id)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Planet not found");

    Ok(())
}

/// Tests adding a favorite for a user that does not exist.
///
/// Expected: Err responding 404 with "User not found"
#[tokio::test]
async fn not_found_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let planet = test.catalog().insert_planet("Tatooine").await?;

    let result = add_favorite_planet(
        State(test.into_app_state()),
        Ok(Path(planet.id)),
        Ok(acting_user(9999)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "User not found");

    Ok(())
}

/// Tests a request body without `user_id`.
///
/// Expected: Err responding 400 naming the missing field
#[tokio::test]
async fn bad_request_for_missing_user_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let planet = test.catalog().insert_planet("Tatooine").await?;

    let result = add_favorite_planet(
        State(test.into_app_state()),
        Ok(Path(planet.id)),
        Ok(Json(FavoriteRequestDto::default())),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Missing required field: user_id");

    Ok(())
}
