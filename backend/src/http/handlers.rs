//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    CreateDatasetRequest, CreatePredictionRequest, DatasetListResponse, HealthResponse,
    ProgressQuery, StatsRequest, ThresholdQuery,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{
    DatasetId, DatasetInfo, RouteDate, ThresholdReport, TravelHistory, TravelPosition, TravelStats,
};
use crate::db::services as db_services;
use crate::services::{stats, thresholds, timeline};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Slider position from a query, rejecting values the window can't hold.
fn resolve_progress(progress: Option<f64>) -> Result<f64, AppError> {
    let progress = progress.unwrap_or(0.0);
    if !progress.is_finite() || progress < 0.0 {
        return Err(AppError::BadRequest(format!(
            "progress must be a non-negative number, got {}",
            progress
        )));
    }
    Ok(progress)
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let datasets = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "available".to_string(),
        Ok(false) => "unavailable".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        datasets,
    }))
}

// =============================================================================
// Datasets
// =============================================================================

/// GET /v1/datasets
pub async fn list_datasets(State(state): State<AppState>) -> HandlerResult<DatasetListResponse> {
    let datasets = db_services::list_datasets(state.repository.as_ref()).await?;
    let total = datasets.len();
    Ok(Json(DatasetListResponse { datasets, total }))
}

/// POST /v1/datasets
pub async fn create_dataset(
    State(state): State<AppState>,
    Json(request): Json<CreateDatasetRequest>,
) -> Result<(StatusCode, Json<DatasetInfo>), AppError> {
    let info =
        db_services::store_travels(state.repository.as_ref(), &request.name, request.travels)
            .await?;
    Ok((StatusCode::CREATED, Json(info)))
}

/// POST /v1/datasets/predictions
///
/// Adapt a live prediction timeline into a single-travel dataset.
pub async fn create_prediction_dataset(
    State(state): State<AppState>,
    Json(request): Json<CreatePredictionRequest>,
) -> Result<(StatusCode, Json<DatasetInfo>), AppError> {
    let info = db_services::store_prediction(
        state.repository.as_ref(),
        &request.name,
        &request.route,
        &request.description,
        &request.days,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(info)))
}

// =============================================================================
// Visualization Endpoints
// =============================================================================

/// GET /v1/datasets/{dataset_id}/stats
pub async fn get_stats(
    State(state): State<AppState>,
    Path(dataset_id): Path<i64>,
    Query(query): Query<ProgressQuery>,
) -> HandlerResult<TravelStats> {
    let progress = resolve_progress(query.progress)?;
    let data = db_services::get_travel_stats(
        state.repository.as_ref(),
        DatasetId::new(dataset_id),
        progress,
    )
    .await?;
    Ok(Json(data))
}

/// GET /v1/datasets/{dataset_id}/history
pub async fn get_history(
    State(state): State<AppState>,
    Path(dataset_id): Path<i64>,
    Query(query): Query<ProgressQuery>,
) -> HandlerResult<Vec<TravelHistory>> {
    let progress = resolve_progress(query.progress)?;
    let data = db_services::get_recent_history(
        state.repository.as_ref(),
        DatasetId::new(dataset_id),
        progress,
    )
    .await?;
    Ok(Json(data))
}

/// GET /v1/datasets/{dataset_id}/travels/{name}
pub async fn get_travel_position(
    State(state): State<AppState>,
    Path((dataset_id, name)): Path<(i64, String)>,
    Query(query): Query<ProgressQuery>,
) -> HandlerResult<TravelPosition> {
    let progress = resolve_progress(query.progress)?;
    let data = db_services::get_travel_position(
        state.repository.as_ref(),
        DatasetId::new(dataset_id),
        &name,
        progress,
    )
    .await?;
    Ok(Json(data))
}

/// POST /v1/stats
///
/// Stats over a caller-supplied collection; nothing is stored.
pub async fn post_stats(Json(request): Json<StatsRequest>) -> HandlerResult<TravelStats> {
    let progress = resolve_progress(Some(request.progress))?;
    let travels = request.travels;

    let data =
        tokio::task::spawn_blocking(move || stats::compute_travel_stats(&travels, progress))
            .await
            .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    Ok(Json(data))
}

/// GET /v1/route-date
pub async fn get_route_date(
    State(state): State<AppState>,
    Query(query): Query<ProgressQuery>,
) -> HandlerResult<RouteDate> {
    let progress = resolve_progress(query.progress)?;
    let date = timeline::route_date_for(state.base_date, progress).ok_or_else(|| {
        AppError::BadRequest(format!(
            "progress {} is past the last representable route date",
            progress
        ))
    })?;
    Ok(Json(date))
}

/// GET /v1/thresholds
pub async fn get_thresholds(Query(query): Query<ThresholdQuery>) -> HandlerResult<ThresholdReport> {
    if query.demand.is_none() && query.price.is_none() {
        return Err(AppError::BadRequest(
            "supply at least one of demand, price".to_string(),
        ));
    }
    Ok(Json(thresholds::threshold_report(query.demand, query.price)))
}
