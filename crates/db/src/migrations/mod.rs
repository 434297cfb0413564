//! Database migrations.
//!
//! Schema migrations for the database.

#![allow(missing_docs)]

use sea_orm_migration::prelude::*;

mod m20240601_000001_create_user_table;
mod m20240601_000002_create_planet_table;
mod m20240601_000003_create_character_table;
mod m20240601_000004_create_planet_favorite_table;
mod m20240601_000005_create_character_favorite_table;
mod m20240601_000006_create_follower_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_user_table::Migration),
            Box::new(m20240601_000002_create_planet_table::Migration),
            Box::new(m20240601_000003_create_character_table::Migration),
            Box::new(m20240601_000004_create_planet_favorite_table::Migration),
            Box::new(m20240601_000005_create_character_favorite_table::Migration),
            Box::new(m20240601_000006_create_follower_table::Migration),
        ]
    }
}
