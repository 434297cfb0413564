//! Favorite service.
//!
//! Maintains the directed favorite edges between users and planets or
//! characters. Every mutation resolves both endpoints, checks the edge and
//! writes inside a single transaction.

use sea_orm::{DatabaseConnection, TransactionError, TransactionTrait};
use serde::Serialize;
use starblog_common::{AppError, AppResult};
use starblog_db::{
    entities::{character, character_favorite, planet, planet_favorite, user},
    repositories::{CharacterRepository, FavoriteRepository, PlanetRepository, UserRepository},
};
use std::sync::Arc;
use tracing::{debug, info};

/// Result of adding a planet to a user's favorites.
#[derive(Debug, Clone, Serialize)]
pub struct PlanetFavoriteAdded {
    /// The new edge.
    pub favorite: planet_favorite::Model,
    /// The favorited planet.
    pub planet: planet::Model,
}

/// Result of adding a character to a user's favorites.
#[derive(Debug, Clone, Serialize)]
pub struct CharacterFavoriteAdded {
    /// The new edge.
    pub favorite: character_favorite::Model,
    /// The favorited character.
    pub character: character::Model,
}

/// A user together with everything they have favorited.
#[derive(Debug, Clone, Serialize)]
pub struct UserFavorites {
    /// The user.
    pub user: user::Model,
    /// Favorited planets, ordered by ID.
    pub favorite_planets: Vec<planet::Model>,
    /// Favorited characters, ordered by ID.
    pub favorite_characters: Vec<character::Model>,
}

/// Favorite service for managing favorite edges.
#[derive(Clone)]
pub struct FavoriteService {
    db: Arc<DatabaseConnection>,
}

impl FavoriteService {
    /// Create a new favorite service.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Add a planet to a user's favorites.
    pub async fn add_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> AppResult<PlanetFavoriteAdded> {
        let added = self
            .db
            .transaction::<_, PlanetFavoriteAdded, AppError>(|txn| {
                Box::pin(async move {
                    require_user(&UserRepository::new(txn), user_id).await?;
                    let planet = require_planet(&PlanetRepository::new(txn), planet_id).await?;

                    let favorites = FavoriteRepository::new(txn);
                    if favorites
                        .find_planet_favorite(user_id, planet_id)
                        .await?
                        .is_some()
                    {
                        return Err(planet_already_favorited());
                    }

                    // A concurrent insert of the same pair still hits the
                    // primary key; report it the same way.
                    let favorite = favorites
                        .create_planet_favorite(user_id, planet_id)
                        .await
                        .map_err(planet_conflict)?;

                    Ok(PlanetFavoriteAdded { favorite, planet })
                })
            })
            .await
            .map_err(from_transaction_error)?;

        info!(user_id, planet_id, "Planet added to favorites");
        Ok(added)
    }

    /// Remove a planet from a user's favorites.
    ///
    /// Returns the planet that was removed.
    pub async fn remove_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> AppResult<planet::Model> {
        let planet = self
            .db
            .transaction::<_, planet::Model, AppError>(|txn| {
                Box::pin(async move {
                    require_user(&UserRepository::new(txn), user_id).await?;
                    let planet = require_planet(&PlanetRepository::new(txn), planet_id).await?;

                    let favorites = FavoriteRepository::new(txn);
                    let favorite = favorites
                        .find_planet_favorite(user_id, planet_id)
                        .await?
                        .ok_or_else(|| {
                            AppError::NotFound("Planet is not in user's favorites".to_string())
                        })?;

                    favorites.delete_planet_favorite(&favorite).await?;
                    Ok(planet)
                })
            })
            .await
            .map_err(from_transaction_error)?;

        info!(user_id, planet_id, "Planet removed from favorites");
        Ok(planet)
    }

    /// Add a character to a user's favorites.
    pub async fn add_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> AppResult<CharacterFavoriteAdded> {
        let added = self
            .db
            .transaction::<_, CharacterFavoriteAdded, AppError>(|txn| {
                Box::pin(async move {
                    require_user(&UserRepository::new(txn), user_id).await?;
                    let character =
                        require_character(&CharacterRepository::new(txn), character_id).await?;

                    let favorites = FavoriteRepository::new(txn);
                    if favorites
                        .find_character_favorite(user_id, character_id)
                        .await?
                        .is_some()
                    {
                        return Err(character_already_favorited());
                    }

                    let favorite = favorites
                        .create_character_favorite(user_id, character_id)
                        .await
                        .map_err(character_conflict)?;

                    Ok(CharacterFavoriteAdded {
                        favorite,
                        character,
                    })
                })
            })
            .await
            .map_err(from_transaction_error)?;

        info!(user_id, character_id, "Character added to favorites");
        Ok(added)
    }

    /// Remove a character from a user's favorites.
    ///
    /// Returns the character that was removed.
    pub async fn remove_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> AppResult<character::Model> {
        let character = self
            .db
            .transaction::<_, character::Model, AppError>(|txn| {
                Box::pin(async move {
                    require_user(&UserRepository::new(txn), user_id).await?;
                    let character =
                        require_character(&CharacterRepository::new(txn), character_id).await?;

                    let favorites = FavoriteRepository::new(txn);
                    let favorite = favorites
                        .find_character_favorite(user_id, character_id)
                        .await?
                        .ok_or_else(|| {
                            AppError::NotFound("Character is not in user's favorites".to_string())
                        })?;

                    favorites.delete_character_favorite(&favorite).await?;
                    Ok(character)
                })
            })
            .await
            .map_err(from_transaction_error)?;

        info!(user_id, character_id, "Character removed from favorites");
        Ok(character)
    }

    /// Get a user and everything they have favorited, by username.
    pub async fn list_favorites_for_user(&self, username: &str) -> AppResult<UserFavorites> {
        let db = self.db.as_ref();

        let user = UserRepository::new(db)
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User '{username}' not found")))?;

        let favorites = FavoriteRepository::new(db);
        let favorite_planets = favorites.find_favorite_planets(user.id).await?;
        let favorite_characters = favorites.find_favorite_characters(user.id).await?;

        debug!(
            username,
            planets = favorite_planets.len(),
            characters = favorite_characters.len(),
            "Loaded user favorites"
        );

        Ok(UserFavorites {
            user,
            favorite_planets,
            favorite_characters,
        })
    }
}

async fn require_user<C: sea_orm::ConnectionTrait>(
    repo: &UserRepository<'_, C>,
    id: i32,
) -> AppResult<user::Model> {
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User with ID {id} not found")))
}

async fn require_planet<C: sea_orm::ConnectionTrait>(
    repo: &PlanetRepository<'_, C>,
    id: i32,
) -> AppResult<planet::Model> {
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Planet with ID {id} not found")))
}

async fn require_character<C: sea_orm::ConnectionTrait>(
    repo: &CharacterRepository<'_, C>,
    id: i32,
) -> AppResult<character::Model> {
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Character with ID {id} not found")))
}

fn planet_already_favorited() -> AppError {
    AppError::Conflict("Planet is already in user's favorites".to_string())
}

fn character_already_favorited() -> AppError {
    AppError::Conflict("Character is already in user's favorites".to_string())
}

/// Report a primary-key conflict on insert as the duplicate-favorite error.
fn planet_conflict(err: AppError) -> AppError {
    match err {
        AppError::Conflict(_) => planet_already_favorited(),
        other => other,
    }
}

fn character_conflict(err: AppError) -> AppError {
    match err {
        AppError::Conflict(_) => character_already_favorited(),
        other => other,
    }
}

fn from_transaction_error(err: TransactionError<AppError>) -> AppError {
    match err {
        TransactionError::Connection(e) => AppError::Database(e.to_string()),
        TransactionError::Transaction(e) => e,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::json;
    use starblog_db::test_utils::{TestDatabase, TestDbConfig};
    use tokio::task::JoinSet;

    async fn setup() -> (TestDatabase, FavoriteService) {
        let db = TestDatabase::new().await.unwrap();
        let service = FavoriteService::new(db.shared());
        (db, service)
    }

    #[tokio::test]
    async fn test_add_favorite_planet_then_repeat_is_conflict() {
        let (db, service) = setup().await;
        let catalog = db.seed_catalog().await.unwrap();

        let added = service
            .add_favorite_planet(catalog.luke.id, catalog.tatooine.id)
            .await
            .unwrap();
        assert_eq!(
            added.favorite,
            planet_favorite::Model {
                user_id: catalog.luke.id,
                planet_id: catalog.tatooine.id,
            }
        );
        assert_eq!(added.planet, catalog.tatooine);

        let err = service
            .add_favorite_planet(catalog.luke.id, catalog.tatooine.id)
            .await
            .unwrap_err();
        assert!(
            matches!(&err, AppError::Conflict(msg) if msg == "Planet is already in user's favorites"),
            "{err:?}"
        );
    }

    #[tokio::test]
    async fn test_add_favorite_planet_unknown_user() {
        let (db, service) = setup().await;
        let catalog = db.seed_catalog().await.unwrap();

        let err = service
            .add_favorite_planet(99, catalog.tatooine.id)
            .await
            .unwrap_err();
        assert!(
            matches!(&err, AppError::NotFound(msg) if msg == "User with ID 99 not found"),
            "{err:?}"
        );
    }

    #[tokio::test]
    async fn test_add_favorite_planet_unknown_planet() {
        let (db, service) = setup().await;
        let catalog = db.seed_catalog().await.unwrap();

        let err = service
            .add_favorite_planet(catalog.luke.id, 42)
            .await
            .unwrap_err();
        assert!(
            matches!(&err, AppError::NotFound(msg) if msg == "Planet with ID 42 not found"),
            "{err:?}"
        );
    }

    #[tokio::test]
    async fn test_remove_favorite_planet() {
        let (db, service) = setup().await;
        let catalog = db.seed_catalog().await.unwrap();

        service
            .add_favorite_planet(catalog.luke.id, catalog.tatooine.id)
            .await
            .unwrap();

        let removed = service
            .remove_favorite_planet(catalog.luke.id, catalog.tatooine.id)
            .await
            .unwrap();
        assert_eq!(removed, catalog.tatooine);

        let err = service
            .remove_favorite_planet(catalog.luke.id, catalog.tatooine.id)
            .await
            .unwrap_err();
        assert!(
            matches!(&err, AppError::NotFound(msg) if msg == "Planet is not in user's favorites"),
            "{err:?}"
        );
    }

    #[tokio::test]
    async fn test_character_favorites_round() {
        let (db, service) = setup().await;
        let catalog = db.seed_catalog().await.unwrap();

        let added = service
            .add_favorite_character(catalog.leia.id, catalog.organa.id)
            .await
            .unwrap();
        assert_eq!(added.character, catalog.organa);

        let err = service
            .add_favorite_character(catalog.leia.id, catalog.organa.id)
            .await
            .unwrap_err();
        assert!(
            matches!(&err, AppError::Conflict(msg) if msg == "Character is already in user's favorites"),
            "{err:?}"
        );

        let removed = service
            .remove_favorite_character(catalog.leia.id, catalog.organa.id)
            .await
            .unwrap();
        assert_eq!(removed, catalog.organa);

        let err = service
            .remove_favorite_character(catalog.leia.id, catalog.organa.id)
            .await
            .unwrap_err();
        assert!(
            matches!(&err, AppError::NotFound(msg) if msg == "Character is not in user's favorites"),
            "{err:?}"
        );
    }

    #[tokio::test]
    async fn test_remove_favorite_character_unknown_character() {
        let (db, service) = setup().await;
        let catalog = db.seed_catalog().await.unwrap();

        let err = service
            .remove_favorite_character(catalog.luke.id, 7)
            .await
            .unwrap_err();
        assert!(
            matches!(&err, AppError::NotFound(msg) if msg == "Character with ID 7 not found"),
            "{err:?}"
        );
    }

    #[tokio::test]
    async fn test_list_favorites_for_user() {
        let (db, service) = setup().await;
        let catalog = db.seed_catalog().await.unwrap();

        service
            .add_favorite_planet(catalog.luke.id, catalog.tatooine.id)
            .await
            .unwrap();
        service
            .add_favorite_character(catalog.luke.id, catalog.skywalker.id)
            .await
            .unwrap();

        let favorites = service.list_favorites_for_user("luke").await.unwrap();
        assert_eq!(favorites.user, catalog.luke);
        assert_eq!(favorites.favorite_planets, vec![catalog.tatooine]);
        assert_eq!(favorites.favorite_characters, vec![catalog.skywalker]);

        // Favorites are per user.
        let leia = service.list_favorites_for_user("leia").await.unwrap();
        assert!(leia.favorite_planets.is_empty());
        assert!(leia.favorite_characters.is_empty());
    }

    #[tokio::test]
    async fn test_list_favorites_unknown_user() {
        let (_db, service) = setup().await;

        let err = service.list_favorites_for_user("vader").await.unwrap_err();
        assert!(
            matches!(&err, AppError::NotFound(msg) if msg == "User 'vader' not found"),
            "{err:?}"
        );
    }

    #[tokio::test]
    async fn test_user_favorites_serialization() {
        let (db, service) = setup().await;
        db.seed_user("han").await.unwrap();

        let favorites = service.list_favorites_for_user("han").await.unwrap();
        let value = serde_json::to_value(&favorites).unwrap();

        assert_eq!(
            value,
            json!({
                "user": {
                    "id": 1,
                    "username": "han",
                    "firstname": null,
                    "lastname": null,
                    "email": "han@starblog.test",
                },
                "favorite_planets": [],
                "favorite_characters": [],
            })
        );
    }

    #[tokio::test]
    async fn test_missing_user_rolls_back_without_insert() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<user::Model>::new()])
                .into_connection(),
        );
        let service = FavoriteService::new(Arc::clone(&db));

        let err = service.add_favorite_planet(1, 1).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)), "{err:?}");

        drop(service);
        let log = Arc::try_unwrap(db).unwrap().into_transaction_log();
        let statements: Vec<_> = log.iter().flat_map(|t| t.statements()).collect();
        assert!(!statements.is_empty());
        assert!(
            statements.iter().all(|s| !s.sql.contains("INSERT")),
            "{statements:?}"
        );
    }

    /// A migrated SQLite file shared by a multi-connection pool.
    async fn file_backed(name: &str) -> (TestDatabase, std::path::PathBuf) {
        let path = std::env::temp_dir().join(format!(
            "starblog_{name}_{}.db",
            std::process::id()
        ));
        std::fs::remove_file(&path).ok();

        let db = TestDatabase::with_config(TestDbConfig {
            url: format!("sqlite://{}?mode=rwc", path.display()),
        })
        .await
        .unwrap();
        (db, path)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_adds_yield_one_success() {
        let (db, path) = file_backed("concurrent_adds").await;
        let catalog = db.seed_catalog().await.unwrap();
        let service = FavoriteService::new(db.shared());

        let mut planet_adds = JoinSet::new();
        let mut character_adds = JoinSet::new();
        for _ in 0..8 {
            let planet_service = service.clone();
            let (user_id, planet_id) = (catalog.luke.id, catalog.tatooine.id);
            planet_adds.spawn(async move {
                planet_service.add_favorite_planet(user_id, planet_id).await
            });

            let character_service = service.clone();
            let (user_id, character_id) = (catalog.luke.id, catalog.skywalker.id);
            character_adds.spawn(async move {
                character_service.add_favorite_character(user_id, character_id).await
            });
        }

        let mut planet_ok = 0;
        while let Some(result) = planet_adds.join_next().await {
            match result.unwrap() {
                Ok(_) => planet_ok += 1,
                Err(AppError::Conflict(msg)) => {
                    assert_eq!(msg, "Planet is already in user's favorites");
                }
                Err(other) => panic!("unexpected error: {other:?}"),
            }
        }

        let mut character_ok = 0;
        while let Some(result) = character_adds.join_next().await {
            match result.unwrap() {
                Ok(_) => character_ok += 1,
                Err(AppError::Conflict(msg)) => {
                    assert_eq!(msg, "Character is already in user's favorites");
                }
                Err(other) => panic!("unexpected error: {other:?}"),
            }
        }

        assert_eq!(planet_ok, 1);
        assert_eq!(character_ok, 1);

        let favorites = service.list_favorites_for_user("luke").await.unwrap();
        assert_eq!(favorites.favorite_planets, vec![catalog.tatooine]);
        assert_eq!(favorites.favorite_characters, vec![catalog.skywalker]);

        drop(service);
        drop(db);
        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_primary_key_conflict_maps_to_duplicate_message() {
        let db = TestDatabase::new().await.unwrap();
        let catalog = db.seed_catalog().await.unwrap();
        let favorites = FavoriteRepository::new(db.connection());

        // An edge written after the existence check, as a racing request would.
        favorites
            .create_planet_favorite(catalog.leia.id, catalog.alderaan.id)
            .await
            .unwrap();
        favorites
            .create_character_favorite(catalog.leia.id, catalog.organa.id)
            .await
            .unwrap();

        let err = favorites
            .create_planet_favorite(catalog.leia.id, catalog.alderaan.id)
            .await
            .map_err(planet_conflict)
            .unwrap_err();
        assert!(
            matches!(&err, AppError::Conflict(msg) if msg == "Planet is already in user's favorites"),
            "{err:?}"
        );

        let err = favorites
            .create_character_favorite(catalog.leia.id, catalog.organa.id)
            .await
            .map_err(character_conflict)
            .unwrap_err();
        assert!(
            matches!(&err, AppError::Conflict(msg) if msg == "Character is already in user's favorites"),
            "{err:?}"
        );

        // Other failures pass through untouched.
        assert!(matches!(
            planet_conflict(AppError::Database("locked".into())),
            AppError::Database(_)
        ));
    }
}
