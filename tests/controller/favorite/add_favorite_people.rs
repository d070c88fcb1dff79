use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holonet::{
    model::api::{ErrorDto, MessageDto},
    server::controller::favorite::add_favorite_people,
};

use super::*;

/// Tests adding a person favorite for an existing user and person.
///
/// Expected: Ok with 200 OK response and a success message
#[tokio::test]
async fn success_adding_person() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("luke").await?;
    let person = test.catalog().insert_person("Leia Organa", None, None, None).await?;

    let result = add_favorite_people(
        State(test.into_app_state()),
        Ok(Path(person.id)),
        Ok(acting_user(user.id)),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: MessageDto = body_json(resp).await;
    assert_eq!(body.message, "Favorite people added successfully");

    Ok(())
}

/// Tests adding a person that does not exist.
///
/// Expected: Err responding 404 with "Person not found"
#[tokio::test]
async fn not_found_for_nonexistent_person() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("luke").await?;

    let result = add_favorite_people(
        State(test.into_app_state()),
        Ok(Path(9999)),
        Ok(acting_user(user.id)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Person not found");

    Ok(())
}
