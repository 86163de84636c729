//! HTTP boundary of the resolver.

pub mod error;
pub mod handlers;

use crate::sdk::resolver::SpatialCellResolver;
use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, Any, CorsLayer};

pub use error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<SpatialCellResolver>,
}

impl AppState {
    pub fn new(resolver: SpatialCellResolver) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }
}

/// Builds the application router.
///
/// CORS is wide open: pre-flights are answered by the layer itself and every
/// response, errors included, carries `Access-Control-Allow-Origin: *`.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request());

    Router::new()
        .route("/", post(handlers::geocode_to_h3))
        .route("/geocode-to-h3", post(handlers::geocode_to_h3))
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(cors)
}
