use crate::api::DatasetId;
use serde::{Deserialize, Serialize};

/// Stored dataset with its travel count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub dataset_id: DatasetId,
    pub name: String,
    pub travel_count: usize,
}
