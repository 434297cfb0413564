//! Create character table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Character::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Character::Name)
                            .string_len(120)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Character::Age).integer().not_null())
                    .col(ColumnDef::new(Character::EyeColor).string_len(50).not_null())
                    .col(ColumnDef::new(Character::HomeworldId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_character_homeworld")
                            .from(Character::Table, Character::HomeworldId)
                            .to(Planet::Table, Planet::Id)
                    )
                    .to_owned(),
            )
            .await?;

        // Index: homeworld_id (for listing natives of a planet)
        manager
            .create_index(
                Index::create()
                    .name("idx_character_homeworld_id")
                    .table(Character::Table)
                    .col(Character::HomeworldId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Character {
    Table,
    Id,
    Name,
    Age,
    EyeColor,
    HomeworldId,
}

#[derive(Iden)]
enum Planet {
    Table,
    Id,
}
