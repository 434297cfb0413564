//! Planet endpoints.

use axum::{Router, extract::State, routing::get};
use starblog_common::AppResult;
use starblog_db::entities::planet;

use crate::{extractors::IdPath, middleware::AppState, response::ApiResponse};

/// List all planets.
async fn list(State(state): State<AppState>) -> AppResult<ApiResponse<Vec<planet::Model>>> {
    let planets = state.catalog_service.list_planets().await?;
    Ok(ApiResponse::ok(planets))
}

/// Get a single planet.
async fn show(
    State(state): State<AppState>,
    IdPath(planet_id): IdPath,
) -> AppResult<ApiResponse<planet::Model>> {
    let planet = state.catalog_service.get_planet(planet_id).await?;
    Ok(ApiResponse::ok(planet))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/planet", get(list))
        .route("/planet/{planet_id}", get(show))
}
