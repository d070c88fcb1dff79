use axum::http::StatusCode;
use holonet::model::api::RouteDto;

use super::*;

fn route(method: &str, path: &str) -> RouteDto {
    RouteDto {
        method: method.to_string(),
        path: path.to_string(),
    }
}

/// Expect `GET /` to list every API route and not itself
#[tokio::test]
async fn lists_every_route() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = test.into_router().oneshot(get("/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let routes: Vec<RouteDto> = body_json(resp).await;
    assert_eq!(routes.len(), 22);
    for expected in [
        route("GET", "/user"),
        route("GET", "/people"),
        route("GET", "/people/{people_id}"),
        route("GET", "/species/{species_id}"),
        route("GET", "/users/{user_id}/favorites"),
        route("POST", "/favorite/planet/{planet_id}"),
        route("DELETE", "/favorite/planet/{planet_id}"),
        route("POST", "/favorite/people/{people_id}"),
        route("DELETE", "/favorite/people/{people_id}"),
    ] {
        assert!(routes.contains(&expected), "missing {:?}", expected);
    }
    assert!(!routes.iter().any(|r| r.path == "/"));

    Ok(())
}

/// Expect the sitemap to be sorted by path, then by method
#[tokio::test]
async fn routes_are_sorted() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = test.into_router().oneshot(get("/")).await.unwrap();

    let routes: Vec<RouteDto> = body_json(resp).await;
    let mut sorted = routes.clone();
    sorted.sort_by(|a, b| a.path.cmp(&b.path).then_with(|| a.method.cmp(&b.method)));
    assert_eq!(routes, sorted);

    Ok(())
}
