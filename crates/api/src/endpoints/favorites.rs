//! Favorite mutation endpoints.
//!
//! The acting user is named in the JSON body (`{"user_id": ...}`); the target
//! comes from the path.

use axum::{Router, extract::State, routing::post};
use serde::Serialize;
use starblog_common::AppResult;
use starblog_core::{CharacterFavoriteAdded, PlanetFavoriteAdded};
use starblog_db::entities::{character, planet};

use crate::{
    extractors::{FavoriteUser, IdPath},
    middleware::AppState,
    response::{ApiResponse, MessageResponse},
};

/// Removed planet payload.
#[derive(Serialize)]
pub struct RemovedPlanet {
    pub planet: planet::Model,
}

/// Removed character payload.
#[derive(Serialize)]
pub struct RemovedCharacter {
    pub character: character::Model,
}

/// Add a planet to the user's favorites.
async fn add_planet(
    State(state): State<AppState>,
    IdPath(planet_id): IdPath,
    FavoriteUser(user_id): FavoriteUser,
) -> AppResult<ApiResponse<MessageResponse<PlanetFavoriteAdded>>> {
    let added = state
        .favorite_service
        .add_favorite_planet(user_id, planet_id)
        .await?;

    Ok(ApiResponse::created(MessageResponse::new(
        "Planet added to favorites successfully",
        added,
    )))
}

/// Remove a planet from the user's favorites.
async fn remove_planet(
    State(state): State<AppState>,
    IdPath(planet_id): IdPath,
    FavoriteUser(user_id): FavoriteUser,
) -> AppResult<ApiResponse<MessageResponse<RemovedPlanet>>> {
    let planet = state
        .favorite_service
        .remove_favorite_planet(user_id, planet_id)
        .await?;

    Ok(ApiResponse::ok(MessageResponse::new(
        "Planet removed from favorites successfully",
        RemovedPlanet { planet },
    )))
}

/// Add a character to the user's favorites.
async fn add_character(
    State(state): State<AppState>,
    IdPath(character_id): IdPath,
    FavoriteUser(user_id): FavoriteUser,
) -> AppResult<ApiResponse<MessageResponse<CharacterFavoriteAdded>>> {
    let added = state
        .favorite_service
        .add_favorite_character(user_id, character_id)
        .await?;

    Ok(ApiResponse::created(MessageResponse::new(
        "Character added to favorites successfully",
        added,
    )))
}

/// Remove a character from the user's favorites.
async fn remove_character(
    State(state): State<AppState>,
    IdPath(character_id): IdPath,
    FavoriteUser(user_id): FavoriteUser,
) -> AppResult<ApiResponse<MessageResponse<RemovedCharacter>>> {
    let character = state
        .favorite_service
        .remove_favorite_character(user_id, character_id)
        .await?;

    Ok(ApiResponse::ok(MessageResponse::new(
        "Character removed from favorites successfully",
        RemovedCharacter { character },
    )))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/planet/{planet_id}", post(add_planet).delete(remove_planet))
        .route(
            "/character/{character_id}",
            post(add_character).delete(remove_character),
        )
}
