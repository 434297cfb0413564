//! Follower repository.
//!
//! Follow edges have no HTTP surface; these primitives serve seeding and
//! read-side queries.

use crate::entities::{Follower, User, follower, user};
use crate::repositories::map_db_err;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Set,
};
use starblog_common::AppResult;

/// Follower repository for database operations.
pub struct FollowerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FollowerRepository<'a, C> {
    /// Create a new follower repository.
    #[must_use]
    pub const fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Find the edge `user_from_id -> user_to_id`.
    pub async fn find_by_pair(
        &self,
        user_from_id: i32,
        user_to_id: i32,
    ) -> AppResult<Option<follower::Model>> {
        Follower::find_by_id((user_from_id, user_to_id))
            .one(self.db)
            .await
            .map_err(map_db_err)
    }

    /// Insert a follow edge.
    pub async fn create(&self, user_from_id: i32, user_to_id: i32) -> AppResult<follower::Model> {
        let model = follower::ActiveModel {
            user_from_id: Set(user_from_id),
            user_to_id: Set(user_to_id),
        };

        Follower::insert(model)
            .exec_without_returning(self.db)
            .await
            .map_err(map_db_err)?;

        Ok(follower::Model {
            user_from_id,
            user_to_id,
        })
    }

    /// Users following `user_id`.
    pub async fn find_followers(&self, user_id: i32) -> AppResult<Vec<user::Model>> {
        User::find()
            .join(JoinType::InnerJoin, follower::Relation::Follower.def().rev())
            .filter(follower::Column::UserToId.eq(user_id))
            .order_by_asc(user::Column::Id)
            .all(self.db)
            .await
            .map_err(map_db_err)
    }

    /// Users that `user_id` follows.
    pub async fn find_following(&self, user_id: i32) -> AppResult<Vec<user::Model>> {
        User::find()
            .join(JoinType::InnerJoin, follower::Relation::Followed.def().rev())
            .filter(follower::Column::UserFromId.eq(user_id))
            .order_by_asc(user::Column::Id)
            .all(self.db)
            .await
            .map_err(map_db_err)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_find_by_pair_is_directed() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<follower::Model>::new()])
            .into_connection();

        let repo = FollowerRepository::new(&db);
        assert!(repo.find_by_pair(2, 1).await.unwrap().is_none());

        let log = db.into_transaction_log();
        let stmt = &log[0].statements()[0];
        assert!(stmt.sql.contains("\"follower\".\"user_from_id\" = $1"), "{}", stmt.sql);
    }

    #[tokio::test]
    async fn test_find_followers_joins_on_user_from() {
        let leia = user::Model {
            id: 2,
            username: "leia".to_string(),
            firstname: Some("Leia".to_string()),
            lastname: Some("Organa".to_string()),
            email: "leia@example.com".to_string(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[leia.clone()]])
            .into_connection();

        let repo = FollowerRepository::new(&db);
        assert_eq!(repo.find_followers(1).await.unwrap(), vec![leia]);

        let log = db.into_transaction_log();
        let sql = log[0].statements()[0].sql.clone();
        assert!(
            sql.contains("\"user\".\"id\" = \"follower\".\"user_from_id\""),
            "{sql}"
        );
    }
}
