//! API module
//!
//! HTTP API endpoints and middleware.

pub mod middleware;
pub mod resource;
pub mod routes;

use axum::http::HeaderName;
use axum::{routing::get, Router};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::footstep::FootstepService;
use crate::managers::Managers;

pub use routes::create_router;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Shared handler state
#[derive(Clone, Debug)]
pub struct AppState {
    pub pool: PgPool,
    pub managers: Managers,
    pub footsteps: FootstepService,
}

impl AppState {
    pub fn new(pool: PgPool, managers: Managers) -> Self {
        Self {
            footsteps: FootstepService::new(pool.clone()),
            pool,
            managers,
        }
    }
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    // Layers run last-added first: context is attached before logging reads it
    let api_routes = create_router()
        .layer(axum::middleware::from_fn(middleware::logging_middleware))
        .layer(axum::middleware::from_fn(middleware::context_middleware));

    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        // Health check (no context)
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
