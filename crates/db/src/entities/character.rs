//! Character entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub name: String,

    pub age: i32,

    pub eye_color: String,

    /// Optional link to the planet the character comes from
    #[sea_orm(nullable)]
    pub homeworld_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::HomeworldId",
        to = "super::planet::Column::Id"
    )]
    Homeworld,

    #[sea_orm(has_many = "super::character_favorite::Entity")]
    CharacterFavorites,
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Homeworld.def()
    }
}

impl Related<super::character_favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CharacterFavorites.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
