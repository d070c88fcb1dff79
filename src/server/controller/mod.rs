//! HTTP controller endpoints for the Holonet web API.
//!
//! This module contains Axum handlers for the catalog, favorites, users and the route sitemap.
//! Controllers extract path and body parameters, call a service, and select the status code of
//! the response. Every handler is annotated for utoipa so the router can publish an OpenAPI
//! document.

pub mod catalog;
pub mod favorite;
pub mod sitemap;
pub mod user;
pub mod util;
