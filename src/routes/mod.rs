//! Router assembly.

pub mod api;
pub mod common;

pub use api::api_routes;
pub use common::common_routes;

use crate::error::AppError;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

async fn fallback() -> AppError {
    AppError::route_not_found()
}

/// Full application: all routes, request tracing, permissive CORS, JSON 404 fallback.
/// Trailing slashes are trimmed before routing, so `/planets/` reaches `/planets`.
pub fn app(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(state))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());
    NormalizePathLayer::trim_trailing_slash().layer(router)
}
