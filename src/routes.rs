//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`  - Health check: catalog, ledger, storage (public)
//! - `/api/*`        - Catalog, checkout, downloads and statistics
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket, stricter on checkout
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Rate limits key on the peer socket address, so the router must be served
/// with `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = Router::new()
        .merge(api::routes::public_routes().layer(rate_limit::layer()))
        .merge(api::routes::checkout_routes().layer(rate_limit::secure_layer()));

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
