//! Character repository.

use crate::entities::{Character, character};
use crate::repositories::map_db_err;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder};
use starblog_common::AppResult;

/// Character repository for database operations.
pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Create a new character repository.
    #[must_use]
    pub const fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Find a character by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<character::Model>> {
        Character::find_by_id(id).one(self.db).await.map_err(map_db_err)
    }

    /// Get all characters, ordered by ID.
    pub async fn find_all(&self) -> AppResult<Vec<character::Model>> {
        Character::find()
            .order_by_asc(character::Column::Id)
            .all(self.db)
            .await
            .map_err(map_db_err)
    }

    /// Create a new character.
    pub async fn create(&self, model: character::ActiveModel) -> AppResult<character::Model> {
        model.insert(self.db).await.map_err(map_db_err)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn create_test_character(id: i32, name: &str, homeworld_id: Option<i32>) -> character::Model {
        character::Model {
            id,
            name: name.to_string(),
            age: 19,
            eye_color: "blue".to_string(),
            homeworld_id,
        }
    }

    #[tokio::test]
    async fn test_find_by_id_found() {
        let luke = create_test_character(1, "Luke Skywalker", Some(1));

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[luke.clone()]])
            .into_connection();

        let repo = CharacterRepository::new(&db);
        assert_eq!(repo.find_by_id(1).await.unwrap(), Some(luke));
    }

    #[tokio::test]
    async fn test_find_all_keeps_missing_homeworld() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[
                create_test_character(1, "Luke Skywalker", Some(1)),
                create_test_character(2, "R2-D2", None),
            ]])
            .into_connection();

        let repo = CharacterRepository::new(&db);
        let characters = repo.find_all().await.unwrap();

        assert_eq!(characters.len(), 2);
        assert_eq!(characters[1].homeworld_id, None);
    }
}
