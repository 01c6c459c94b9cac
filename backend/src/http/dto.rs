//! Data Transfer Objects for the HTTP API.
//!
//! Response bodies for the visualization endpoints are the types in
//! [`crate::api`]; this module holds request bodies, query parameters and
//! the few responses that only exist at the HTTP layer.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    DatasetInfo, PredictionDay, RouteDate, ThresholdReport, TravelHistory, TravelPosition,
    TravelStats,
};
use crate::models::TravelCollection;

/// Request body for storing a travel collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDatasetRequest {
    /// Name for the dataset
    pub name: String,
    /// Travels in the fixture format
    pub travels: TravelCollection,
}

/// Request body for storing an adapted prediction timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePredictionRequest {
    /// Name for the dataset
    pub name: String,
    /// Route the prediction is for; becomes the travel name
    pub route: String,
    #[serde(default)]
    pub description: String,
    pub days: Vec<PredictionDay>,
}

/// Request body for stats over a caller-supplied collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsRequest {
    #[serde(default)]
    pub progress: f64,
    pub travels: TravelCollection,
}

/// Query parameters carrying a slider position.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProgressQuery {
    /// Slider position, `0` when omitted
    #[serde(default)]
    pub progress: Option<f64>,
}

/// Query parameters for threshold classification.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ThresholdQuery {
    #[serde(default)]
    pub demand: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Repository status
    pub datasets: String,
}

/// Dataset list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetListResponse {
    pub datasets: Vec<DatasetInfo>,
    pub total: usize,
}
