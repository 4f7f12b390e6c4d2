//! HTTP surface: a thin request/response mapping over the ledgers.
//!
//! - `routes/`: handlers, one file per area
//! - `error.rs`: AppError → JSON response mapping
//! - `middleware.rs`: permissive CORS for the single-page UI

pub mod error;
pub mod middleware;
pub mod routes;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use crate::db::pool::SharedDb;

/// Build the full router (public entrypoint used by `run()` and the tests).
pub fn build_app(db: SharedDb) -> Router {
    routes::router().layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn(middleware::cors))
            .layer(Extension(db)),
    )
}
