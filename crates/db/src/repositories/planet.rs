//! Planet repository.

use crate::entities::{Planet, planet};
use crate::repositories::map_db_err;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder};
use starblog_common::AppResult;

/// Planet repository for database operations.
pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Create a new planet repository.
    #[must_use]
    pub const fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Find a planet by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<planet::Model>> {
        Planet::find_by_id(id).one(self.db).await.map_err(map_db_err)
    }

    /// Get all planets, ordered by ID.
    pub async fn find_all(&self) -> AppResult<Vec<planet::Model>> {
        Planet::find()
            .order_by_asc(planet::Column::Id)
            .all(self.db)
            .await
            .map_err(map_db_err)
    }

    /// Create a new planet.
    pub async fn create(&self, model: planet::ActiveModel) -> AppResult<planet::Model> {
        model.insert(self.db).await.map_err(map_db_err)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn tatooine() -> planet::Model {
        planet::Model {
            id: 1,
            name: "Tatooine".to_string(),
            temperature: 50.0,
            mass: 0.1,
            population: Some(200_000),
        }
    }

    #[tokio::test]
    async fn test_find_by_id_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[tatooine()]])
            .into_connection();

        let repo = PlanetRepository::new(&db);
        let result = repo.find_by_id(1).await.unwrap();

        assert_eq!(result, Some(tatooine()));
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<planet::Model>::new()])
            .into_connection();

        let repo = PlanetRepository::new(&db);
        assert!(repo.find_by_id(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all_is_ordered_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[tatooine()]])
            .into_connection();

        let repo = PlanetRepository::new(&db);
        let planets = repo.find_all().await.unwrap();
        assert_eq!(planets.len(), 1);

        let log = db.into_transaction_log();
        let sql = log[0].statements()[0].sql.clone();
        assert!(sql.contains("ORDER BY \"planet\".\"id\" ASC"), "{sql}");
    }
}
