use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holonet::{
    model::{api::ErrorDto, favorite::FavoriteDto},
    server::controller::favorite::get_user_favorites,
};

use super::*;

/// Tests listing the favorites of a user with one of each kind.
///
/// Expected: Ok with 200 OK response and both favorites ordered by ID
#[tokio::test]
async fn success_with_planet_and_person() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("luke").await?;
    let planet = test.catalog().insert_planet("Tatooine").await?;
    let person = test.catalog().insert_person("Obi-Wan", None, None, None).await?;
    let planet_favorite = test
        .favorite()
        .insert_planet_favorite(user.id, planet.id)
        .await?;
    let people_favorite = test
        .favorite()
        .insert_people_favorite(user.id, person.id)
        .await?;

    let result = get_user_favorites(State(test.into_app_state()), Ok(Path(user.id))).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Vec<FavoriteDto> = body_json(resp).await;
    assert_eq!(
        body,
        vec![
            FavoriteDto {
                id: planet_favorite.id,
                user_id: user.id,
                planet_id: Some(planet.id),
                people_id: None,
            },
            FavoriteDto {
                id: people_favorite.id,
                user_id: user.id,
                planet_id: None,
                people_id: Some(person.id),
            },
        ]
    );

    Ok(())
}

/// Tests listing favorites of a user that does not exist.
///
/// Expected: Err responding 404 with "User not found"
#[tokio::test]
async fn not_found_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = get_user_favorites(State(test.into_app_state()), Ok(Path(9999))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "User not found");

    Ok(())
}
