use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use holonet::model::{
    api::{ErrorDto, MessageDto},
    favorite::FavoriteDto,
};
use sea_orm::EntityTrait;
use serde_json::json;

use super::*;

/// Expect a planet added through POST to appear in the user's favorites
#[tokio::test]
async fn added_planet_is_listed() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("luke").await?;
    let planet = test.catalog().insert_planet("Tatooine").await?;

    let resp = test
        .into_router()
        .oneshot(json_request(
            Method::POST,
            &format!("/favorite/planet/{}", planet.id),
            json!({ "user_id": user.id }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: MessageDto = body_json(resp).await;
    assert_eq!(body.message, "Favorite planet added successfully");

    let resp = test
        .into_router()
        .oneshot(get(&format!("/users/{}/favorites", user.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let favorites: Vec<FavoriteDto> = body_json(resp).await;
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].planet_id, Some(planet.id));
    assert_eq!(favorites[0].user_id, user.id);
    assert!(favorites[0].people_id.is_none());

    Ok(())
}

/// Expect two identical POSTs to leave exactly one stored favorite
#[tokio::test]
async fn duplicate_add_stores_one_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("luke").await?;
    let person = test.catalog().insert_person("Yoda", None, None, None).await?;
    let uri = format!("/favorite/people/{}", person.id);

    let mut messages = Vec::new();
    for _ in 0..2 {
        let resp = test
            .into_router()
            .oneshot(json_request(Method::POST, &uri, json!({ "user_id": user.id })))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body: MessageDto = body_json(resp).await;
        messages.push(body.message);
    }

    assert_eq!(
        messages,
        vec![
            "Favorite people added successfully",
            "Favorite people already added"
        ]
    );
    let stored = entity::prelude::Favorite::find().all(&test.db).await?;
    assert_eq!(stored.len(), 1);

    Ok(())
}

/// Expect DELETE to succeed once and then answer 404
#[tokio::test]
async fn delete_twice_is_ok_then_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("luke").await?;
    let planet = test.catalog().insert_planet("Hoth").await?;
    test.favorite()
        .insert_planet_favorite(user.id, planet.id)
        .await?;
    let uri = format!("/favorite/planet/{}", planet.id);

    let first = test
        .into_router()
        .oneshot(json_request(Method::DELETE, &uri, json!({ "user_id": user.id })))
        .await
        .unwrap();
    let second = test
        .into_router()
        .oneshot(json_request(Method::DELETE, &uri, json!({ "user_id": user.id })))
        .await
        .unwrap();

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(second).await;
    assert_eq!(body.error, "Favorite planet not found");

    Ok(())
}

/// Expect 400 naming the field when the body lacks `user_id`
#[tokio::test]
async fn missing_user_id_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let planet = test.catalog().insert_planet("Endor").await?;

    let resp = test
        .into_router()
        .oneshot(json_request(
            Method::POST,
            &format!("/favorite/planet/{}", planet.id),
            json!({}),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Missing required field: user_id");

    Ok(())
}

/// Expect 400 with a JSON error for a body that is not valid JSON
#[tokio::test]
async fn malformed_body_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let planet = test.catalog().insert_planet("Endor").await?;

    let request = Request::builder()
        .method(Method::POST)
        .uri(format!("/favorite/planet/{}", planet.id))
        .header("content-type", "application/json")
        .body(Body::from("{\"user_id\":"))
        .unwrap();
    let resp = test.into_router().oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = body_json(resp).await;
    assert!(!body.error.is_empty());

    Ok(())
}

/// Expect 400 when the body is sent without a JSON content type
#[tokio::test]
async fn missing_content_type_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let planet = test.catalog().insert_planet("Endor").await?;

    let request = Request::builder()
        .method(Method::DELETE)
        .uri(format!("/favorite/planet/{}", planet.id))
        .body(Body::from("{\"user_id\":1}"))
        .unwrap();
    let resp = test.into_router().oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
