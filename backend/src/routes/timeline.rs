use serde::{Deserialize, Serialize};

use crate::models::TimelineEntry;

// =========================================================
// Per-travel timeline types
// =========================================================

/// Trailing slice of one travel's timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelHistory {
    pub name: String,
    pub description: String,
    pub data: Vec<TimelineEntry>,
}

/// One travel's entries around the current slider position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelPosition {
    pub name: String,
    pub progress: f64,
    pub current: Option<TimelineEntry>,
    pub previous: Option<TimelineEntry>,
}

/// Calendar date for a slider position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDate {
    pub progress: f64,
    pub day: i64,
    pub date: chrono::NaiveDate,
}
