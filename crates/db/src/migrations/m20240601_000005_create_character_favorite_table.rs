//! Create character favorite table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CharacterFavorite::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CharacterFavorite::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(CharacterFavorite::CharacterId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_character_favorite")
                            .col(CharacterFavorite::UserId)
                            .col(CharacterFavorite::CharacterId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_character_favorite_user")
                            .from(CharacterFavorite::Table, CharacterFavorite::UserId)
                            .to(User::Table, User::Id)
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_character_favorite_character")
                            .from(CharacterFavorite::Table, CharacterFavorite::CharacterId)
                            .to(Character::Table, Character::Id)
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_character_favorite_character_id")
                    .table(CharacterFavorite::Table)
                    .col(CharacterFavorite::CharacterId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CharacterFavorite::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum CharacterFavorite {
    Table,
    UserId,
    CharacterId,
}

#[derive(Iden)]
enum User {
    Table,
    Id,
}

#[derive(Iden)]
enum Character {
    Table,
    Id,
}
