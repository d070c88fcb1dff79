use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holonet::server::controller::user::get_users;

use super::*;

/// Tests listing users.
///
/// Verifies that every user is returned and that the stored password is never serialized.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_without_passwords() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await?;
    test.user().insert_user("luke").await?;
    test.user().insert_user("leia").await?;

    let result = get_users(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["username"], "luke");
    assert!(users.iter().all(|u| u.get("password").is_none()));

    Ok(())
}

/// Tests listing users when none are registered.
///
/// Expected: Ok with 200 OK response and an empty array
#[tokio::test]
async fn success_with_empty_list() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await?;

    let result = get_users(State(test.into_app_state())).await;

    let resp = result.unwrap().into_response();
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body, serde_json::json!([]));

    Ok(())
}
