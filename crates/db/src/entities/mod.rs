//! Database entities.
//!
//! sea-orm entity definitions. Relationship edges are plain rows; traversal
//! happens through explicit queries in the repositories.

#![allow(missing_docs)]

pub mod character;
pub mod character_favorite;
pub mod follower;
pub mod planet;
pub mod planet_favorite;
pub mod user;

pub use character::Entity as Character;
pub use character_favorite::Entity as CharacterFavorite;
pub use follower::Entity as Follower;
pub use planet::Entity as Planet;
pub use planet_favorite::Entity as PlanetFavorite;
pub use user::Entity as User;
