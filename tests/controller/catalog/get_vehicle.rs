use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holonet::{model::catalog::VehicleDto, server::controller::catalog::get_vehicle};

use super::*;

/// Tests retrieval of an existing vehicle.
///
/// Verifies that the body matches the stored row field by field.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_for_existing_vehicle() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await?;
    let vehicle = test.catalog().insert_vehicle("Snowspeeder").await?;

    let result = get_vehicle(State(test.into_app_state()), Ok(Path(vehicle.id))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: VehicleDto = body_json(resp).await;
    assert_eq!(
        body,
        VehicleDto {
            id: vehicle.id,
            name: vehicle.name,
            model: vehicle.model,
            manufacturer: vehicle.manufacturer,
            vehicle_class: vehicle.vehicle_class,
            crew: vehicle.crew,
            passengers: vehicle.passengers,
        }
    );

    Ok(())
}
