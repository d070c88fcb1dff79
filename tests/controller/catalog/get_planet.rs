use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holonet::{
    model::{api::ErrorDto, catalog::PlanetDto},
    server::controller::catalog::get_planet,
};

use super::*;

/// Tests retrieval of an existing planet.
///
/// Verifies that the body matches the stored row field by field.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_for_existing_planet() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await?;
    let planet = test.catalog().insert_planet("Tatooine").await?;

    let result = get_planet(State(test.into_app_state()), Ok(Path(planet.id))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: PlanetDto = body_json(resp).await;
    assert_eq!(
        body,
        PlanetDto {
            id: planet.id,
            name: planet.name,
            population: planet.population,
            terrain: planet.terrain,
            diameter: planet.diameter,
        }
    );

    Ok(())
}

/// Tests retrieval of a planet that does not exist.
///
/// Expected: Err responding 404 with "Planet not found"
#[tokio::test]
async fn not_found_for_nonexistent_planet() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await?;

    let result = get_planet(State(test.into_app_state()), Ok(Path(9999))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Planet not found");

    Ok(())
}

/// Tests the response when the planet table is missing.
///
/// Expected: Err responding 500 without leaking the database error
#[tokio::test]
async fn internal_error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_planet(State(test.into_app_state()), Ok(Path(1))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Internal server error");

    Ok(())
}
