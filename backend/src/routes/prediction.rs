use serde::{Deserialize, Serialize};

// =========================================================
// Prediction timeline types
// =========================================================

/// One day of a live price/demand prediction for a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionDay {
    /// Day index within the ten-day window.
    pub day: i64,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, alias = "avg_demand")]
    pub demand: Option<f64>,
}
