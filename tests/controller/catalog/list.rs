use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holonet::{
    model::catalog::{DirectorDto, GenderDto, SpeciesDto, StarshipDto, VehicleDto},
    server::controller::catalog::{
        get_directors, get_genders, get_species_list, get_starships, get_vehicles,
    },
};

use super::*;

/// Tests listing every catalog table while all are empty.
///
/// Expected: Ok with 200 OK response and `[]` for each list
#[tokio::test]
async fn empty_tables_list_as_empty_arrays() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = get_starships(State(test.into_app_state()))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_json::<Vec<StarshipDto>>(resp).await.is_empty());

    let resp = get_vehicles(State(test.into_app_state()))
        .await
        .unwrap()
        .into_response();
    assert!(body_json::<Vec<VehicleDto>>(resp).await.is_empty());

    let resp = get_genders(State(test.into_app_state()))
        .await
        .unwrap()
        .into_response();
    assert!(body_json::<Vec<GenderDto>>(resp).await.is_empty());

    let resp = get_species_list(State(test.into_app_state()))
        .await
        .unwrap()
        .into_response();
    assert!(body_json::<Vec<SpeciesDto>>(resp).await.is_empty());

    let resp = get_directors(State(test.into_app_state()))
        .await
        .unwrap()
        .into_response();
    assert!(body_json::<Vec<DirectorDto>>(resp).await.is_empty());

    Ok(())
}

/// Tests listing starships.
///
/// Expected: Ok with 200 OK response, rows ordered by ID
#[tokio::test]
async fn lists_starships_ordered_by_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Starship)
        .build()
        .await?;
    let falcon = test.catalog().insert_starship("Millennium Falcon").await?;
    let tantive = test.catalog().insert_starship("Tantive IV").await?;

    let resp = get_starships(State(test.into_app_state()))
        .await
        .unwrap()
        .into_response();

    let body: Vec<StarshipDto> = body_json(resp).await;
    let ids: Vec<i32> = body.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![falcon.id, tantive.id]);
    assert_eq!(body[0].name, "Millennium Falcon");

    Ok(())
}
