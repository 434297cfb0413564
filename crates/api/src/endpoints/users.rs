//! User endpoints.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use serde::Serialize;
use starblog_common::AppResult;
use starblog_core::UserFavorites;
use starblog_db::entities::user;

use crate::{middleware::AppState, response::ApiResponse};

/// Greeting returned by `GET /user`.
#[derive(Serialize)]
pub struct HelloResponse {
    pub msg: &'static str,
}

async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        msg: "Hello, this is your GET /user response ",
    })
}

/// List all users.
async fn list(State(state): State<AppState>) -> AppResult<ApiResponse<Vec<user::Model>>> {
    let users = state.catalog_service.list_users().await?;
    Ok(ApiResponse::ok(users))
}

/// Get a user with their favorite planets and characters.
async fn favorites(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<ApiResponse<UserFavorites>> {
    let favorites = state
        .favorite_service
        .list_favorites_for_user(&username)
        .await?;
    Ok(ApiResponse::ok(favorites))
}

/// Favorites of the user named `planet`.
///
/// `/planet/{planet_id}` would otherwise claim this path.
async fn planet_user_favorites(
    State(state): State<AppState>,
) -> AppResult<ApiResponse<UserFavorites>> {
    let favorites = state
        .favorite_service
        .list_favorites_for_user("planet")
        .await?;
    Ok(ApiResponse::ok(favorites))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user", get(hello))
        .route("/users", get(list))
        .route("/{username}/favorites", get(favorites))
        .route("/planet/favorites", get(planet_user_favorites))
}
