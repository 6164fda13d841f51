//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /`        - Greeting (also the load balancer probe path)
//! - `GET /health`  - Liveness with host and visit count
//!
//! # Middleware
//!
//! - **Request logger** - Outermost; counts and logs every request, including 404s
//! - **Tracing** - HTTP spans at debug level

use crate::api::handlers::{health_handler, index_handler};
use crate::api::middleware::{RequestLoggerLayer, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    let request_logger = RequestLoggerLayer::new(state.visit_logger.clone());

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer())
        .layer(request_logger)
}
