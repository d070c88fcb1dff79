use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holonet::{
    model::{api::ErrorDto, catalog::SpeciesDto},
    server::controller::catalog::get_species,
};

use super::*;

/// Tests retrieval of an existing species.
///
/// Verifies that language and classification are returned as stored.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_for_existing_species() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Species)
        .build()
        .await?;
    let species = test.catalog().insert_species("Shyriiwook").await?;

    let result = get_species(State(test.into_app_state()), Ok(Path(species.id))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: SpeciesDto = body_json(resp).await;
    assert_eq!(
        body,
        SpeciesDto {
            id: species.id,
            language: species.language,
            classification: species.classification,
        }
    );

    Ok(())
}

/// Tests retrieval of a species that does not exist.
///
/// Expected: Err responding 404 with "Species not found"
#[tokio::test]
async fn not_found_for_nonexistent_species() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Species)
        .build()
        .await?;

    let result = get_species(State(test.into_app_state()), Ok(Path(9999))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Species not found");

    Ok(())
}
