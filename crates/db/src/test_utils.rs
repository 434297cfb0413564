//! Test utilities for database operations.
//!
//! Provides a migrated, disposable database plus seeding helpers for the
//! service and HTTP test suites.

use crate::entities::{character, planet, user};
use crate::migrations::Migrator;
use crate::repositories::{CharacterRepository, PlanetRepository, UserRepository};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, Set};
use sea_orm_migration::MigratorTrait;
use starblog_common::AppResult;
use std::sync::Arc;
use tracing::info;

/// Test database configuration.
#[derive(Debug, Clone)]
pub struct TestDbConfig {
    /// Connection URL.
    pub url: String,
}

impl Default for TestDbConfig {
    fn default() -> Self {
        Self {
            url: std::env::var("TEST_DATABASE_URL")
                .unwrap_or_else(|_| "sqlite::memory:".to_string()),
        }
    }
}

impl TestDbConfig {
    /// Whether the configured URL points at an in-memory SQLite database.
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.url.starts_with("sqlite::memory:")
    }
}

/// A migrated test database.
pub struct TestDatabase {
    /// Database connection.
    pub conn: Arc<DatabaseConnection>,
    /// Database configuration.
    pub config: TestDbConfig,
}

impl TestDatabase {
    /// Create a fresh, migrated database from `TEST_DATABASE_URL`
    /// (default: in-memory SQLite).
    pub async fn new() -> Result<Self, DbErr> {
        Self::with_config(TestDbConfig::default()).await
    }

    /// Create a migrated database with custom configuration.
    pub async fn with_config(config: TestDbConfig) -> Result<Self, DbErr> {
        let mut opt = ConnectOptions::new(starblog_common::config::normalize_database_url(
            &config.url,
        ));
        // Every pooled connection to `sqlite::memory:` is its own database.
        if config.is_in_memory() {
            opt.max_connections(1).min_connections(1);
        }
        opt.sqlx_logging(false);

        let conn = Database::connect(opt).await?;
        Migrator::up(&conn, None).await?;

        info!(url = %config.url, "Connected to test database");

        Ok(Self {
            conn: Arc::new(conn),
            config,
        })
    }

    /// Get the database connection.
    #[must_use]
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Get a shared handle to the connection, as services take it.
    #[must_use]
    pub fn shared(&self) -> Arc<DatabaseConnection> {
        Arc::clone(&self.conn)
    }

    /// Insert a user with a derived email address.
    pub async fn seed_user(&self, username: &str) -> AppResult<user::Model> {
        UserRepository::new(self.connection())
            .create(user::ActiveModel {
                username: Set(username.to_string()),
                firstname: Set(None),
                lastname: Set(None),
                email: Set(format!("{username}@starblog.test")),
                ..Default::default()
            })
            .await
    }

    /// Insert a planet.
    pub async fn seed_planet(
        &self,
        name: &str,
        temperature: f64,
        mass: f64,
        population: Option<i64>,
    ) -> AppResult<planet::Model> {
        PlanetRepository::new(self.connection())
            .create(planet::ActiveModel {
                name: Set(name.to_string()),
                temperature: Set(temperature),
                mass: Set(mass),
                population: Set(population),
                ..Default::default()
            })
            .await
    }

    /// Insert a character.
    pub async fn seed_character(
        &self,
        name: &str,
        age: i32,
        eye_color: &str,
        homeworld_id: Option<i32>,
    ) -> AppResult<character::Model> {
        CharacterRepository::new(self.connection())
            .create(character::ActiveModel {
                name: Set(name.to_string()),
                age: Set(age),
                eye_color: Set(eye_color.to_string()),
                homeworld_id: Set(homeworld_id),
                ..Default::default()
            })
            .await
    }

    /// Seed the small catalog most tests start from.
    ///
    /// Rows are inserted in a fixed order, so on a fresh database every
    /// first row gets ID 1.
    pub async fn seed_catalog(&self) -> AppResult<Catalog> {
        let luke = self.seed_user("luke").await?;
        let leia = self.seed_user("leia").await?;
        let tatooine = self
            .seed_planet("Tatooine", 50.0, 0.1, Some(200_000))
            .await?;
        let alderaan = self.seed_planet("Alderaan", 22.0, 1.0, None).await?;
        let skywalker = self
            .seed_character("Luke Skywalker", 19, "blue", Some(tatooine.id))
            .await?;
        let organa = self
            .seed_character("Leia Organa", 19, "brown", Some(alderaan.id))
            .await?;

        Ok(Catalog {
            luke,
            leia,
            tatooine,
            alderaan,
            skywalker,
            organa,
        })
    }
}

/// Rows created by [`TestDatabase::seed_catalog`].
#[derive(Debug, Clone)]
pub struct Catalog {
    /// User `luke`.
    pub luke: user::Model,
    /// User `leia`.
    pub leia: user::Model,
    /// Planet Tatooine.
    pub tatooine: planet::Model,
    /// Planet Alderaan (unknown population).
    pub alderaan: planet::Model,
    /// Character Luke Skywalker, from Tatooine.
    pub skywalker: character::Model,
    /// Character Leia Organa, from Alderaan.
    pub organa: character::Model,
}
