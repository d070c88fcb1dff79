//! Route sitemap served at the API root.
//!
//! The list is derived from the OpenAPI document assembled by the router, so every documented
//! route appears without being registered twice.

use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, Extension, Json};
use utoipa::openapi::{path::Operation, OpenApi};

use crate::model::api::RouteDto;

/// Lists every route of `api` sorted by path, then by method
pub fn sitemap_from_openapi(api: &OpenApi) -> Vec<RouteDto> {
    let mut routes: Vec<RouteDto> = api
        .paths
        .paths
        .iter()
        .flat_map(|(path, item)| {
            let operations: [(&str, &Option<Operation>); 8] = [
                ("GET", &item.get),
                ("POST", &item.post),
                ("PUT", &item.put),
                ("PATCH", &item.patch),
                ("DELETE", &item.delete),
                ("HEAD", &item.head),
                ("OPTIONS", &item.options),
                ("TRACE", &item.trace),
            ];

            operations
                .into_iter()
                .filter(|(_, operation)| operation.is_some())
                .map(move |(method, _)| RouteDto {
                    method: method.to_string(),
                    path: path.clone(),
                })
        })
        .collect();

    routes.sort_by(|a, b| a.path.cmp(&b.path).then_with(|| a.method.cmp(&b.method)));

    routes
}

/// Get every registered API route
pub async fn get_sitemap(Extension(sitemap): Extension<Arc<Vec<RouteDto>>>) -> impl IntoResponse {
    (StatusCode::OK, Json(sitemap.as_ref().clone()))
}
