//! Favorite repository (planet and character favorite edges).

use crate::entities::{
    Character, CharacterFavorite, Planet, PlanetFavorite, character, character_favorite, planet,
    planet_favorite,
};
use crate::repositories::map_db_err;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use starblog_common::AppResult;

/// Favorite repository for database operations.
///
/// Pure persistence: existence and duplicate checks belong to the caller.
pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Create a new favorite repository.
    #[must_use]
    pub const fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Find the favorite edge between a user and a planet.
    pub async fn find_planet_favorite(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> AppResult<Option<planet_favorite::Model>> {
        PlanetFavorite::find_by_id((user_id, planet_id))
            .one(self.db)
            .await
            .map_err(map_db_err)
    }

    /// Insert a planet favorite edge.
    ///
    /// A duplicate pair fails with [`AppError::Conflict`].
    ///
    /// [`AppError::Conflict`]: starblog_common::AppError::Conflict
    pub async fn create_planet_favorite(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> AppResult<planet_favorite::Model> {
        let model = planet_favorite::ActiveModel {
            user_id: Set(user_id),
            planet_id: Set(planet_id),
        };

        PlanetFavorite::insert(model)
            .exec_without_returning(self.db)
            .await
            .map_err(map_db_err)?;

        Ok(planet_favorite::Model { user_id, planet_id })
    }

    /// Delete a planet favorite edge. Returns the number of rows removed.
    pub async fn delete_planet_favorite(
        &self,
        favorite: &planet_favorite::Model,
    ) -> AppResult<u64> {
        let result = PlanetFavorite::delete_by_id((favorite.user_id, favorite.planet_id))
            .exec(self.db)
            .await
            .map_err(map_db_err)?;
        Ok(result.rows_affected)
    }

    /// Get the planets a user has favorited, ordered by planet ID.
    pub async fn find_favorite_planets(&self, user_id: i32) -> AppResult<Vec<planet::Model>> {
        Planet::find()
            .inner_join(PlanetFavorite)
            .filter(planet_favorite::Column::UserId.eq(user_id))
            .order_by_asc(planet::Column::Id)
            .all(self.db)
            .await
            .map_err(map_db_err)
    }

    /// Find the favorite edge between a user and a character.
    pub async fn find_character_favorite(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> AppResult<Option<character_favorite::Model>> {
        CharacterFavorite::find_by_id((user_id, character_id))
            .one(self.db)
            .await
            .map_err(map_db_err)
    }

    /// Insert a character favorite edge.
    pub async fn create_character_favorite(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> AppResult<character_favorite::Model> {
        let model = character_favorite::ActiveModel {
            user_id: Set(user_id),
            character_id: Set(character_id),
        };

        CharacterFavorite::insert(model)
            .exec_without_returning(self.db)
            .await
            .map_err(map_db_err)?;

        Ok(character_favorite::Model {
            user_id,
            character_id,
        })
    }

    /// Delete a character favorite edge. Returns the number of rows removed.
    pub async fn delete_character_favorite(
        &self,
        favorite: &character_favorite::Model,
    ) -> AppResult<u64> {
        let result = CharacterFavorite::delete_by_id((favorite.user_id, favorite.character_id))
            .exec(self.db)
            .await
            .map_err(map_db_err)?;
        Ok(result.rows_affected)
    }

    /// Get the characters a user has favorited, ordered by character ID.
    pub async fn find_favorite_characters(
        &self,
        user_id: i32,
    ) -> AppResult<Vec<character::Model>> {
        Character::find()
            .inner_join(CharacterFavorite)
            .filter(character_favorite::Column::UserId.eq(user_id))
            .order_by_asc(character::Column::Id)
            .all(self.db)
            .await
            .map_err(map_db_err)
    }
}
