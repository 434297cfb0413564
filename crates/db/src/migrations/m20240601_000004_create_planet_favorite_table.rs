//! Create planet favorite table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlanetFavorite::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(PlanetFavorite::UserId).integer().not_null())
                    .col(ColumnDef::new(PlanetFavorite::PlanetId).integer().not_null())
                    // Composite key: a user favorites a planet at most once
                    .primary_key(
                        Index::create()
                            .name("pk_planet_favorite")
                            .col(PlanetFavorite::UserId)
                            .col(PlanetFavorite::PlanetId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_planet_favorite_user")
                            .from(PlanetFavorite::Table, PlanetFavorite::UserId)
                            .to(User::Table, User::Id)
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_planet_favorite_planet")
                            .from(PlanetFavorite::Table, PlanetFavorite::PlanetId)
                            .to(Planet::Table, Planet::Id)
                    )
                    .to_owned(),
            )
            .await?;

        // Index: planet_id (for reverse lookups)
        manager
            .create_index(
                Index::create()
                    .name("idx_planet_favorite_planet_id")
                    .table(PlanetFavorite::Table)
                    .col(PlanetFavorite::PlanetId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlanetFavorite::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum PlanetFavorite {
    Table,
    UserId,
    PlanetId,
}

#[derive(Iden)]
enum User {
    Table,
    Id,
}

#[derive(Iden)]
enum Planet {
    Table,
    Id,
}
