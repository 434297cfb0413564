//! Planet favorite entity (user favorited planet).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Planet favorite entity.
///
/// Identity is the `(user_id, planet_id)` pair, so a user can favorite a
/// planet at most once.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "planet_favorite")]
pub struct Model {
    /// User who favorited the planet.
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,

    /// Planet that was favorited.
    #[sea_orm(primary_key, auto_increment = false)]
    pub planet_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::PlanetId",
        to = "super::planet::Column::Id"
    )]
    Planet,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
