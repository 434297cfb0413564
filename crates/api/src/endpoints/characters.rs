//! Character endpoints.

use axum::{Router, extract::State, routing::get};
use starblog_common::AppResult;
use starblog_db::entities::character;

use crate::{middleware::AppState, response::ApiResponse};

/// List all characters.
async fn list(State(state): State<AppState>) -> AppResult<ApiResponse<Vec<character::Model>>> {
    let characters = state.catalog_service.list_characters().await?;
    Ok(ApiResponse::ok(characters))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/character", get(list))
}
