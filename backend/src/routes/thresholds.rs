use serde::{Deserialize, Serialize};

// =========================================================
// Demand / price level types
// =========================================================

/// Five-step level shown as arrows on the route cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrendLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

/// Upper bounds (exclusive) of the four lower levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdBands {
    pub very_low: f64,
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

/// Metric a value is classified against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdMetric {
    Demand,
    Price,
}

/// Levels for whichever values were supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThresholdReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demand: Option<TrendLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<TrendLevel>,
}
