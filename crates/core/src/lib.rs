//! Core business logic for starblog.
//!
//! The favorite graph lives here: [`FavoriteService`] owns the check-then-write
//! rules for favorite edges, [`CatalogService`] the read-only queries.

pub mod services;

pub use services::*;
