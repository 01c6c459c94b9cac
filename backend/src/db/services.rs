//! Service layer over a [`TravelRepository`].
//!
//! These functions are what the HTTP handlers call: they fetch a dataset and
//! run the pure computations from [`crate::services`] on it.

use log::{debug, info};

use crate::api::{DatasetId, DatasetInfo, PredictionDay, TravelHistory, TravelPosition, TravelStats};
use crate::db::repository::{RepositoryResult, TravelRepository};
use crate::models::TravelCollection;
use crate::services::{prediction, stats, timeline};

/// Check if the repository is healthy.
pub async fn health_check<R: TravelRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// List all stored datasets.
pub async fn list_datasets<R: TravelRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<DatasetInfo>> {
    repo.list_datasets().await
}

/// Store a travel collection as a new dataset.
pub async fn store_travels<R: TravelRepository + ?Sized>(
    repo: &R,
    name: &str,
    travels: TravelCollection,
) -> RepositoryResult<DatasetInfo> {
    let info = repo.store_dataset(name, travels).await?;
    info!(
        "Stored dataset {} '{}' with {} travels",
        info.dataset_id, info.name, info.travel_count
    );
    Ok(info)
}

/// Adapt a prediction timeline into a single-travel dataset and store it.
pub async fn store_prediction<R: TravelRepository + ?Sized>(
    repo: &R,
    name: &str,
    route: &str,
    description: &str,
    days: &[PredictionDay],
) -> RepositoryResult<DatasetInfo> {
    let travel = prediction::adapt_prediction_timeline(route, description, days)
        .map_err(|e| crate::db::repository::RepositoryError::from(e).with_operation("store_prediction"))?;
    store_travels(repo, name, vec![travel]).await
}

/// Stats-tab figures for a stored dataset.
pub async fn get_travel_stats<R: TravelRepository + ?Sized>(
    repo: &R,
    dataset_id: DatasetId,
    progress: f64,
) -> RepositoryResult<TravelStats> {
    let travels = repo.get_dataset(dataset_id).await?;
    debug!("Computing stats for dataset {} at progress {}", dataset_id, progress);
    Ok(stats::compute_travel_stats(&travels, progress))
}

/// Recent per-travel history for a stored dataset.
pub async fn get_recent_history<R: TravelRepository + ?Sized>(
    repo: &R,
    dataset_id: DatasetId,
    progress: f64,
) -> RepositoryResult<Vec<TravelHistory>> {
    let travels = repo.get_dataset(dataset_id).await?;
    Ok(timeline::recent_history(&travels, progress))
}

/// Current and previous entries of one travel in a stored dataset.
pub async fn get_travel_position<R: TravelRepository + ?Sized>(
    repo: &R,
    dataset_id: DatasetId,
    name: &str,
    progress: f64,
) -> RepositoryResult<TravelPosition> {
    let travel = repo.get_travel(dataset_id, name).await?;
    Ok(timeline::travel_position(&travel, progress))
}
