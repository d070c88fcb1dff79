use axum::http::StatusCode;
use holonet::model::api::ErrorDto;
use serde_json::{json, Value};

use super::*;

/// Expect 404 naming the planet for `GET /planets/9999`
#[tokio::test]
async fn missing_planet_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = test.into_router().oneshot(get("/planets/9999")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Planet not found");

    Ok(())
}

/// Expect 400 with a JSON error for an ID that is not an integer
#[tokio::test]
async fn non_integer_id_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = test.into_router().oneshot(get("/people/luke")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = body_json(resp).await;
    assert!(!body.error.is_empty());

    Ok(())
}

/// Expect every list route to answer 200 with `[]` on an empty database
#[tokio::test]
async fn empty_lists_are_empty_arrays() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    for uri in [
        "/people",
        "/planets",
        "/films",
        "/starships",
        "/vehicles",
        "/genders",
        "/species",
        "/directors",
        "/user",
    ] {
        let resp = test.into_router().oneshot(get(uri)).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK, "{}", uri);
        let body: Value = body_json(resp).await;
        assert_eq!(body, json!([]), "{}", uri);
    }

    Ok(())
}

/// Expect each lookup by ID to name its entity when the row is missing
#[tokio::test]
async fn not_found_messages_name_the_entity() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    for (uri, message) in [
        ("/people/1", "Person not found"),
        ("/films/1", "Film not found"),
        ("/starships/1", "Starship not found"),
        ("/vehicles/1", "Vehicle not found"),
        ("/genders/1", "Gender not found"),
        ("/species/1", "Species not found"),
        ("/directors/1", "Director not found"),
    ] {
        let resp = test.into_router().oneshot(get(uri)).await.unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);
        let body: ErrorDto = body_json(resp).await;
        assert_eq!(body.error, message);
    }

    Ok(())
}

/// Expect a stored gender to be returned with its label under `type`
#[tokio::test]
async fn gender_is_returned_by_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let gender = test.catalog().insert_gender("female").await?;

    let uri = format!("/genders/{}", gender.id);
    let resp = test.into_router().oneshot(get(&uri)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body, json!({ "id": gender.id, "type": "female" }));

    Ok(())
}
