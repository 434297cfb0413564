//! HTTP API layer for starblog.
//!
//! - **Endpoints**: catalog listings, planet lookup, per-user favorites and
//!   the favorite mutation routes
//! - **Extractors**: path IDs and the `user_id` request body
//! - **Middleware**: shared application state
//!
//! Built on Axum 0.8. Every failure is rendered through
//! [`starblog_common::AppError`].

pub mod endpoints;
pub mod extractors;
pub mod middleware;
pub mod response;

pub use endpoints::router;
pub use middleware::AppState;
