//! Planet entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "planet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub name: String,

    /// Surface temperature, in Celsius
    pub temperature: f64,

    /// Mass, in Earth masses
    pub mass: f64,

    #[sea_orm(nullable)]
    pub population: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::planet_favorite::Entity")]
    PlanetFavorites,

    #[sea_orm(has_many = "super::character::Entity")]
    Natives,
}

impl Related<super::planet_favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanetFavorites.def()
    }
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Natives.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
