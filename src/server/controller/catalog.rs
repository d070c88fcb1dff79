//! Read-only catalog endpoints.
//!
//! Lists are ordered by ID and are empty rather than missing when a table has no rows. Lookups
//! by ID answer 404 naming the entity when the row does not exist.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        catalog::{
            DirectorDto, FilmDto, GenderDto, PersonDto, PlanetDto, SpeciesDto, StarshipDto,
            VehicleDto,
        },
    },
    server::{
        controller::util::request::path_id,
        error::{api::ApiError, Error},
        model::app::AppState,
        service::catalog::CatalogService,
    },
};

/// OpenAPI tag for catalog endpoints
pub static CATALOG_TAG: &str = "catalog";

/// Get all people with gender, species, vehicle and films flattened to display values
#[utoipa::path(
    get,
    path = "/people",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Success when retrieving people", body = Vec<PersonDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let people = CatalogService::new(&state.db).get_people().await?;

    Ok((StatusCode::OK, Json(people)))
}

/// Get a person by ID
#[utoipa::path(
    get,
    path = "/people/{people_id}",
    tag = CATALOG_TAG,
    params(
        ("people_id" = i32, Path, description = "ID of the person")
    ),
    responses(
        (status = 200, description = "Success when retrieving the person", body = PersonDto),
        (status = 400, description = "ID is not an integer", body = ErrorDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    people_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let people_id = path_id(people_id)?;

    let Some(person) = CatalogService::new(&state.db).get_person(people_id).await? else {
        return Err(ApiError::NotFound("Person not found").into());
    };

    Ok((StatusCode::OK, Json(person)))
}

/// Get all planets
#[utoipa::path(
    get,
    path = "/planets",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Success when retrieving planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planets = CatalogService::new(&state.db).get_planets().await?;

    Ok((StatusCode::OK, Json(planets)))
}

/// Get a planet by ID
#[utoipa::path(
    get,
    path = "/planets/{planet_id}",
    tag = CATALOG_TAG,
    params(
        ("planet_id" = i32, Path, description = "ID of the planet")
    ),
    responses(
        (status = 200, description = "Success when retrieving the planet", body = PlanetDto),
        (status = 400, description = "ID is not an integer", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    planet_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let planet_id = path_id(planet_id)?;

    let Some(planet) = CatalogService::new(&state.db).get_planet(planet_id).await? else {
        return Err(ApiError::NotFound("Planet not found").into());
    };

    Ok((StatusCode::OK, Json(planet)))
}

/// Get all films with their director's name
#[utoipa::path(
    get,
    path = "/films",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Success when retrieving films", body = Vec<FilmDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_films(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let films = CatalogService::new(&state.db).get_films().await?;

    Ok((StatusCode::OK, Json(films)))
}

/// Get a film by ID
#[utoipa::path(
    get,
    path = "/films/{film_id}",
    tag = CATALOG_TAG,
    params(
        ("film_id" = i32, Path, description = "ID of the film")
    ),
    responses(
        (status = 200, description = "Success when retrieving the film", body = FilmDto),
        (status = 400, description = "ID is not an integer", body = ErrorDto),
        (status = 404, description = "Film not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_film(
    State(state): State<AppState>,
    film_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let film_id = path_id(film_id)?;

    let Some(film) = CatalogService::new(&state.db).get_film(film_id).await? else {
        return Err(ApiError::NotFound("Film not found").into());
    };

    Ok((StatusCode::OK, Json(film)))
}

/// Get all starships
#[utoipa::path(
    get,
    path = "/starships",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Success when retrieving starships", body = Vec<StarshipDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_starships(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let starships = CatalogService::new(&state.db).get_starships().await?;

    Ok((StatusCode::OK, Json(starships)))
}

/// Get a starship by ID
#[utoipa::path(
    get,
    path = "/starships/{starship_id}",
    tag = CATALOG_TAG,
    params(
        ("starship_id" = i32, Path, description = "ID of the starship")
    ),
    responses(
        (status = 200, description = "Success when retrieving the starship", body = StarshipDto),
        (status = 400, description = "ID is not an integer", body = ErrorDto),
        (status = 404, description = "Starship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_starship(
    State(state): State<AppState>,
    starship_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let starship_id = path_id(starship_id)?;

    let Some(starship) = CatalogService::new(&state.db).get_starship(starship_id).await? else {
        return Err(ApiError::NotFound("Starship not found").into());
    };

    Ok((StatusCode::OK, Json(starship)))
}

/// Get all vehicles
#[utoipa::path(
    get,
    path = "/vehicles",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Success when retrieving vehicles", body = Vec<VehicleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicles(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let vehicles = CatalogService::new(&state.db).get_vehicles().await?;

    Ok((StatusCode::OK, Json(vehicles)))
}

/// Get a vehicle by ID
#[utoipa::path(
    get,
    path = "/vehicles/{vehicle_id}",
    tag = CATALOG_TAG,
    params(
        ("vehicle_id" = i32, Path, description = "ID of the vehicle")
    ),
    responses(
        (status = 200, description = "Success when retrieving the vehicle", body = VehicleDto),
        (status = 400, description = "ID is not an integer", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    vehicle_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let vehicle_id = path_id(vehicle_id)?;

    let Some(vehicle) = CatalogService::new(&state.db).get_vehicle(vehicle_id).await? else {
        return Err(ApiError::NotFound("Vehicle not found").into());
    };

    Ok((StatusCode::OK, Json(vehicle)))
}

/// Get all genders
#[utoipa::path(
    get,
    path = "/genders",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Success when retrieving genders", body = Vec<GenderDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_genders(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let genders = CatalogService::new(&state.db).get_genders().await?;

    Ok((StatusCode::OK, Json(genders)))
}

/// Get a gender by ID
#[utoipa::path(
    get,
    path = "/genders/{gender_id}",
    tag = CATALOG_TAG,
    params(
        ("gender_id" = i32, Path, description = "ID of the gender")
    ),
    responses(
        (status = 200, description = "Success when retrieving the gender", body = GenderDto),
        (status = 400, description = "ID is not an integer", body = ErrorDto),
        (status = 404, description = "Gender not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_gender(
    State(state): State<AppState>,
    gender_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let gender_id = path_id(gender_id)?;

    let Some(gender) = CatalogService::new(&state.db).get_gender(gender_id).await? else {
        return Err(ApiError::NotFound("Gender not found").into());
    };

    Ok((StatusCode::OK, Json(gender)))
}

/// Get all species
#[utoipa::path(
    get,
    path = "/species",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Success when retrieving species", body = Vec<SpeciesDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_species_list(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let species = CatalogService::new(&state.db).get_species_list().await?;

    Ok((StatusCode::OK, Json(species)))
}

/// Get a species by ID
#[utoipa::path(
    get,
    path = "/species/{species_id}",
    tag = CATALOG_TAG,
    params(
        ("species_id" = i32, Path, description = "ID of the species")
    ),
    responses(
        (status = 200, description = "Success when retrieving the species", body = SpeciesDto),
        (status = 400, description = "ID is not an integer", body = ErrorDto),
        (status = 404, description = "Species not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_species(
    State(state): State<AppState>,
    species_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let species_id = path_id(species_id)?;

    let Some(species) = CatalogService::new(&state.db).get_species(species_id).await? else {
        return Err(ApiError::NotFound("Species not found").into());
    };

    Ok((StatusCode::OK, Json(species)))
}

/// Get all directors
#[utoipa::path(
    get,
    path = "/directors",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Success when retrieving directors", body = Vec<DirectorDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_directors(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let directors = CatalogService::new(&state.db).get_directors().await?;

    Ok((StatusCode::OK, Json(directors)))
}

/// Get a director by ID
#[utoipa::path(
    get,
    path = "/directors/{director_id}",
    tag = CATALOG_TAG,
    params(
        ("director_id" = i32, Path, description = "ID of the director")
    ),
    responses(
        (status = 200, description = "Success when retrieving the director", body = DirectorDto),
        (status = 400, description = "ID is not an integer", body = ErrorDto),
        (status = 404, description = "Director not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_director(
    State(state): State<AppState>,
    director_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let director_id = path_id(director_id)?;

    let Some(director) = CatalogService::new(&state.db).get_director(director_id).await? else {
        return Err(ApiError::NotFound("Director not found").into());
    };

    Ok((StatusCode::OK, Json(director)))
}
