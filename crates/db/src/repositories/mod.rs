//! Database repositories.
//!
//! Every repository borrows a [`ConnectionTrait`] implementor, so the same
//! queries run against the pool or inside a transaction.
//!
//! [`ConnectionTrait`]: sea_orm::ConnectionTrait

pub mod character;
pub mod favorite;
pub mod follower;
pub mod planet;
pub mod user;

pub use character::CharacterRepository;
pub use favorite::FavoriteRepository;
pub use follower::FollowerRepository;
pub use planet::PlanetRepository;
pub use user::UserRepository;

use sea_orm::{DbErr, SqlErr};
use starblog_common::AppError;

/// Convert a store error into an [`AppError`].
///
/// Unique and primary-key violations become [`AppError::Conflict`] so callers
/// can report them as a duplicate instead of a server failure.
pub(crate) fn map_db_err(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => AppError::Conflict(detail),
        _ => AppError::Database(err.to_string()),
    }
}
