use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holonet::{model::catalog::DirectorDto, server::controller::catalog::get_director};

use super::*;

/// Tests retrieval of an existing director.
///
/// Expected: Ok with 200 OK response and the stored name
#[tokio::test]
async fn success_for_existing_director() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Director)
        .build()
        .await?;
    let director = test.catalog().insert_director("Irvin Kershner").await?;

    let result = get_director(State(test.into_app_state()), Ok(Path(director.id))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: DirectorDto = body_json(resp).await;
    assert_eq!(
        body,
        DirectorDto {
            id: director.id,
            name: director.name,
        }
    );

    Ok(())
}
