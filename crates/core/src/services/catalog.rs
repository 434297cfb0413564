//! Catalog service (read-only queries over users, planets and characters).

use sea_orm::DatabaseConnection;
use starblog_common::{AppError, AppResult};
use starblog_db::{
    entities::{character, planet, user},
    repositories::{CharacterRepository, PlanetRepository, UserRepository},
};
use std::sync::Arc;

/// Catalog service for listing and looking up entities.
#[derive(Clone)]
pub struct CatalogService {
    db: Arc<DatabaseConnection>,
}

impl CatalogService {
    /// Create a new catalog service.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// List all users.
    pub async fn list_users(&self) -> AppResult<Vec<user::Model>> {
        UserRepository::new(self.db.as_ref()).find_all().await
    }

    /// List all planets.
    pub async fn list_planets(&self) -> AppResult<Vec<planet::Model>> {
        PlanetRepository::new(self.db.as_ref()).find_all().await
    }

    /// List all characters.
    pub async fn list_characters(&self) -> AppResult<Vec<character::Model>> {
        CharacterRepository::new(self.db.as_ref()).find_all().await
    }

    /// Get a planet by ID.
    pub async fn get_planet(&self, id: i32) -> AppResult<planet::Model> {
        PlanetRepository::new(self.db.as_ref())
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Planet with ID {id} not found")))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::json;
    use starblog_db::test_utils::TestDatabase;

    #[tokio::test]
    async fn test_get_planet_found() {
        let tatooine = planet::Model {
            id: 1,
            name: "Tatooine".to_string(),
            temperature: 50.0,
            mass: 0.1,
            population: Some(200_000),
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[tatooine.clone()]])
            .into_connection();

        let service = CatalogService::new(Arc::new(db));
        let planet = service.get_planet(1).await.unwrap();

        assert_eq!(planet, tatooine);
        assert_eq!(
            serde_json::to_value(&planet).unwrap(),
            json!({
                "id": 1,
                "name": "Tatooine",
                "temperature": 50.0,
                "mass": 0.1,
                "population": 200_000,
            })
        );
    }

    #[tokio::test]
    async fn test_get_planet_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<planet::Model>::new()])
            .into_connection();

        let service = CatalogService::new(Arc::new(db));
        let err = service.get_planet(9).await.unwrap_err();

        assert!(
            matches!(&err, AppError::NotFound(msg) if msg == "Planet with ID 9 not found"),
            "{err:?}"
        );
    }

    #[tokio::test]
    async fn test_lists_are_idempotent() {
        let db = TestDatabase::new().await.unwrap();
        let catalog = db.seed_catalog().await.unwrap();
        let service = CatalogService::new(db.shared());

        let first = service.list_users().await.unwrap();
        let second = service.list_users().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first, vec![catalog.luke, catalog.leia]);

        assert_eq!(
            service.list_planets().await.unwrap(),
            vec![catalog.tatooine, catalog.alderaan]
        );
        assert_eq!(
            service.list_characters().await.unwrap(),
            vec![catalog.skywalker, catalog.organa]
        );
    }

    #[tokio::test]
    async fn test_lists_empty_store() {
        let db = TestDatabase::new().await.unwrap();
        let service = CatalogService::new(db.shared());

        assert!(service.list_users().await.unwrap().is_empty());
        assert!(service.list_planets().await.unwrap().is_empty());
        assert!(service.list_characters().await.unwrap().is_empty());
    }
}
