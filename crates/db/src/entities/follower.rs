//! Follower entity (directed follow edge between users).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "follower")]
pub struct Model {
    /// The user who is following
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_from_id: i32,

    /// The user being followed
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_to_id: i32,
}

// Both edges point at `user`, so there is no `Related` impl; queries filter
// on the column they need.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserFromId",
        to = "super::user::Column::Id"
    )]
    Follower,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserToId",
        to = "super::user::Column::Id"
    )]
    Followed,
}

impl ActiveModelBehavior for ActiveModel {}
