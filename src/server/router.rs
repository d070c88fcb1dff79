//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications;
//! the same document feeds the route sitemap served at `/` and the Swagger UI at `/api/docs`.

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /` - Sitemap listing every route below
/// - `GET /user` - List users
/// - `GET /people`, `/planets`, `/films`, `/starships`, `/vehicles`, `/genders`, `/species`,
///   `/directors` - List a catalog entity, each with a `/{id}` lookup
/// - `GET /users/{user_id}/favorites` - List a user's favorites
/// - `POST`/`DELETE /favorite/planet/{planet_id}` - Add or remove a favorite planet
/// - `POST`/`DELETE /favorite/people/{people_id}` - Add or remove a favorite person
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready for `with_state`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holonet", description = "Star Wars catalog API"), tags(
        (name = controller::catalog::CATALOG_TAG, description = "Read-only catalog routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Per-user favorites routes"),
        (name = controller::user::USER_TAG, description = "User routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::get_users))
        .routes(routes!(controller::catalog::get_people))
        .routes(routes!(controller::catalog::get_person))
        .routes(routes!(controller::catalog::get_planets))
        .routes(routes!(controller::catalog::get_planet))
        .routes(routes!(controller::catalog::get_films))
        .routes(routes!(controller::catalog::get_film))
        .routes(routes!(controller::catalog::get_starships))
        .routes(routes!(controller::catalog::get_starship))
        .routes(routes!(controller::catalog::get_vehicles))
        .routes(routes!(controller::catalog::get_vehicle))
        .routes(routes!(controller::catalog::get_genders))
        .routes(routes!(controller::catalog::get_gender))
        .routes(routes!(controller::catalog::get_species_list))
        .routes(routes!(controller::catalog::get_species))
        .routes(routes!(controller::catalog::get_directors))
        .routes(routes!(controller::catalog::get_director))
        .routes(routes!(controller::favorite::get_user_favorites))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::delete_favorite_planet
        ))
        .routes(routes!(
            controller::favorite::add_favorite_people,
            controller::favorite::delete_favorite_people
        ))
        .split_for_parts();

    let sitemap = Arc::new(controller::sitemap::sitemap_from_openapi(&api));

    routes
        .route("/", get(controller::sitemap::get_sitemap))
        .layer(Extension(sitemap))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
