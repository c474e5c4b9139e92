//! HTTP surface: `/api/companies`, `/api/questions/:company`, `/api/summary/:company`.

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::aggregation::Aggregator;

pub use error::ApiError;

/// State shared by every handler. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<Aggregator>,
}

impl AppState {
    pub fn new(aggregator: Aggregator) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/companies", get(handlers::get_companies))
        .route("/api/questions/:company", get(handlers::get_questions))
        .route("/api/summary/:company", get(handlers::get_summary))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
