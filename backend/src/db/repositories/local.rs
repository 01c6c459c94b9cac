//! In-memory local repository implementation.
//!
//! Datasets live for the lifetime of the process. Nothing is written to disk.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::api::{DatasetId, DatasetInfo};
use crate::db::repository::{ErrorContext, RepositoryError, RepositoryResult, TravelRepository};
use crate::models::TravelCollection;

/// In-memory local repository.
///
/// # Example
/// ```
/// use ferry_stats::db::repositories::LocalRepository;
///
/// let repo = LocalRepository::new();
/// let id = repo.store_dataset_impl("fixture", vec![]);
/// assert_eq!(id.value(), 1);
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct StoredDataset {
    info: DatasetInfo,
    travels: Arc<TravelCollection>,
}

struct LocalData {
    datasets: BTreeMap<DatasetId, StoredDataset>,
    next_dataset_id: DatasetId,
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            datasets: BTreeMap::new(),
            next_dataset_id: DatasetId(1),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Store a dataset synchronously and return its id.
    ///
    /// Used to seed the repository with a fixture before serving.
    pub fn store_dataset_impl(&self, name: &str, travels: TravelCollection) -> DatasetId {
        let mut data = self.data.write();
        let dataset_id = data.next_dataset_id;
        data.next_dataset_id = DatasetId(dataset_id.0 + 1);

        let info = DatasetInfo {
            dataset_id,
            name: name.to_string(),
            travel_count: travels.len(),
        };
        data.datasets.insert(
            dataset_id,
            StoredDataset {
                info,
                travels: Arc::new(travels),
            },
        );

        dataset_id
    }

    /// Set the health status reported by `health_check`.
    pub fn set_health(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Number of stored datasets.
    pub fn dataset_count(&self) -> usize {
        self.data.read().datasets.len()
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TravelRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn store_dataset(
        &self,
        name: &str,
        travels: TravelCollection,
    ) -> RepositoryResult<DatasetInfo> {
        if name.trim().is_empty() {
            return Err(RepositoryError::validation_with_context(
                "Dataset name must not be empty",
                ErrorContext::new("store_dataset").with_entity("dataset"),
            ));
        }

        let dataset_id = self.store_dataset_impl(name, travels);
        let data = self.data.read();
        data.datasets
            .get(&dataset_id)
            .map(|d| d.info.clone())
            .ok_or_else(|| RepositoryError::internal("Stored dataset vanished"))
    }

    async fn list_datasets(&self) -> RepositoryResult<Vec<DatasetInfo>> {
        Ok(self
            .data
            .read()
            .datasets
            .values()
            .map(|d| d.info.clone())
            .collect())
    }

    async fn get_dataset(&self, dataset_id: DatasetId) -> RepositoryResult<Arc<TravelCollection>> {
        self.data
            .read()
            .datasets
            .get(&dataset_id)
            .map(|d| Arc::clone(&d.travels))
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("Dataset {} not found", dataset_id),
                    ErrorContext::new("get_dataset")
                        .with_entity("dataset")
                        .with_entity_id(dataset_id),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TimelineEntry, Travel};

    fn travels(n: usize) -> TravelCollection {
        (0..n)
            .map(|i| {
                Travel::new(
                    format!("route-{}", i),
                    "",
                    vec![TimelineEntry::observed(0, 10.0, 1.0)],
                )
            })
            .collect()
    }

    #[tokio::test]
    async fn test_store_and_get_dataset() {
        let repo = LocalRepository::new();
        let info = repo.store_dataset("fixture", travels(3)).await.unwrap();

        assert_eq!(info.dataset_id, DatasetId(1));
        assert_eq!(info.travel_count, 3);

        let loaded = repo.get_dataset(info.dataset_id).await.unwrap();
        assert_eq!(loaded.len(), 3);
    }

    #[tokio::test]
    async fn test_ids_increment_and_list_is_ordered() {
        let repo = LocalRepository::new();
        repo.store_dataset("a", travels(1)).await.unwrap();
        repo.store_dataset("b", travels(2)).await.unwrap();

        let list = repo.list_datasets().await.unwrap();
        let ids: Vec<i64> = list.iter().map(|d| d.dataset_id.value()).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(repo.dataset_count(), 2);
    }

    #[tokio::test]
    async fn test_blank_name_rejected() {
        let repo = LocalRepository::new();
        let err = repo.store_dataset("  ", travels(1)).await.unwrap_err();
        assert!(matches!(err, RepositoryError::ValidationError { .. }));
        assert_eq!(repo.dataset_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_dataset_not_found() {
        let repo = LocalRepository::new();
        let err = repo.get_dataset(DatasetId(9)).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { .. }));
        assert!(err.to_string().contains("Dataset 9 not found"));
    }

    #[tokio::test]
    async fn test_get_travel_by_name() {
        let repo = LocalRepository::new();
        let id = repo.store_dataset_impl("fixture", travels(2));

        let travel = repo.get_travel(id, "route-1").await.unwrap();
        assert_eq!(travel.name, "route-1");

        let err = repo.get_travel(id, "route-7").await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_health_toggle() {
        let repo = LocalRepository::new();
        assert!(repo.health_check().await.unwrap());
        repo.set_health(false);
        assert!(!repo.health_check().await.unwrap());
    }
}
