//! Business logic services.

pub mod catalog;
pub mod favorite;

pub use catalog::CatalogService;
pub use favorite::{CharacterFavoriteAdded, FavoriteService, PlanetFavoriteAdded, UserFavorites};
