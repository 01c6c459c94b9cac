//! Public API surface for the backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::landing::DatasetInfo;
pub use crate::routes::prediction::PredictionDay;
pub use crate::routes::stats::AggregateSnapshot;
pub use crate::routes::stats::GaugeLevel;
pub use crate::routes::stats::GaugeRange;
pub use crate::routes::stats::TrendColor;
pub use crate::routes::stats::TrendPoint;
pub use crate::routes::stats::TrendSummary;
pub use crate::routes::stats::TrendWindow;
pub use crate::routes::stats::Trends;
pub use crate::routes::stats::TravelStats;
pub use crate::routes::thresholds::ThresholdBands;
pub use crate::routes::thresholds::ThresholdMetric;
pub use crate::routes::thresholds::ThresholdReport;
pub use crate::routes::thresholds::TrendLevel;
pub use crate::routes::timeline::RouteDate;
pub use crate::routes::timeline::TravelHistory;
pub use crate::routes::timeline::TravelPosition;

pub use crate::models::{TimelineEntry, Travel, TravelCollection};

use serde::{Deserialize, Serialize};

/// Dataset identifier in the travel store.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DatasetId(pub i64);

impl DatasetId {
    pub fn new(value: i64) -> Self {
        DatasetId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for DatasetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
