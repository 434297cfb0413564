//! API endpoints.

mod characters;
mod favorites;
mod planets;
mod users;

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::middleware::AppState;

/// A route listed by the index endpoint.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EndpointInfo {
    /// HTTP method.
    pub method: &'static str,
    /// Path template.
    pub path: &'static str,
}

const fn endpoint(method: &'static str, path: &'static str) -> EndpointInfo {
    EndpointInfo { method, path }
}

/// Every route served by [`router`].
pub const ENDPOINTS: &[EndpointInfo] = &[
    endpoint("GET", "/"),
    endpoint("GET", "/user"),
    endpoint("GET", "/users"),
    endpoint("GET", "/{username}/favorites"),
    endpoint("GET", "/character"),
    endpoint("GET", "/planet"),
    endpoint("GET", "/planet/{planet_id}"),
    endpoint("POST", "/favorite/planet/{planet_id}"),
    endpoint("DELETE", "/favorite/planet/{planet_id}"),
    endpoint("POST", "/favorite/character/{character_id}"),
    endpoint("DELETE", "/favorite/character/{character_id}"),
];

/// List the available endpoints.
async fn index() -> Json<&'static [EndpointInfo]> {
    Json(ENDPOINTS)
}

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .merge(users::router())
        .merge(planets::router())
        .merge(characters::router())
        .nest("/favorite", favorites::router())
}
