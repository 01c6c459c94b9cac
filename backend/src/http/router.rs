//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Datasets
        .route(
            "/datasets",
            get(handlers::list_datasets).post(handlers::create_dataset),
        )
        .route(
            "/datasets/predictions",
            post(handlers::create_prediction_dataset),
        )
        // Visualization endpoints
        .route("/datasets/{dataset_id}/stats", get(handlers::get_stats))
        .route("/datasets/{dataset_id}/history", get(handlers::get_history))
        .route(
            "/datasets/{dataset_id}/travels/{name}",
            get(handlers::get_travel_position),
        )
        .route("/stats", post(handlers::post_stats))
        .route("/route-date", get(handlers::get_route_date))
        .route("/thresholds", get(handlers::get_thresholds));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
