//! API middleware and shared state.

use sea_orm::DatabaseConnection;
use starblog_core::{CatalogService, FavoriteService};
use std::sync::Arc;

/// Application state.
#[derive(Clone)]
pub struct AppState {
    /// Read-only catalog queries.
    pub catalog_service: CatalogService,
    /// Favorite edge mutations and per-user favorites.
    pub favorite_service: FavoriteService,
}

impl AppState {
    /// Build the services over a shared connection pool.
    #[must_use]
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            catalog_service: CatalogService::new(Arc::clone(&db)),
            favorite_service: FavoriteService::new(db),
        }
    }
}
