//! User entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub username: String,

    #[sea_orm(nullable)]
    pub firstname: Option<String>,

    #[sea_orm(nullable)]
    pub lastname: Option<String>,

    #[sea_orm(unique)]
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::planet_favorite::Entity")]
    PlanetFavorites,

    #[sea_orm(has_many = "super::character_favorite::Entity")]
    CharacterFavorites,
}

impl Related<super::planet_favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanetFavorites.def()
    }
}

impl Related<super::character_favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CharacterFavorites.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
