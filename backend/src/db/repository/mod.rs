//! Repository trait definitions for travel dataset storage.
//!
//! - [`error`]: Error types for repository operations
//!
//! Datasets are immutable once stored; replacing one means storing a new
//! dataset under a new id.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;
use std::sync::Arc;

use crate::api::{DatasetId, DatasetInfo};
use crate::models::{Travel, TravelCollection};

/// Repository trait for travel datasets.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait TravelRepository: Send + Sync {
    /// Check if the store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Store a travel collection under a new dataset id.
    ///
    /// # Returns
    /// * `Ok(DatasetInfo)` - Metadata including the assigned id
    /// * `Err(RepositoryError::ValidationError)` - If the name is blank
    async fn store_dataset(
        &self,
        name: &str,
        travels: TravelCollection,
    ) -> RepositoryResult<DatasetInfo>;

    /// List all datasets, ordered by id.
    async fn list_datasets(&self) -> RepositoryResult<Vec<DatasetInfo>>;

    /// Retrieve a dataset's travels.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If the dataset doesn't exist
    async fn get_dataset(&self, dataset_id: DatasetId) -> RepositoryResult<Arc<TravelCollection>>;

    /// Retrieve one travel of a dataset by name.
    async fn get_travel(&self, dataset_id: DatasetId, name: &str) -> RepositoryResult<Travel> {
        let travels = self.get_dataset(dataset_id).await?;
        travels
            .iter()
            .find(|t| t.name == name)
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("Travel '{}' not found", name),
                    ErrorContext::new("get_travel")
                        .with_entity("travel")
                        .with_entity_id(dataset_id),
                )
            })
    }
}
