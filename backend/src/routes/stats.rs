use serde::{Deserialize, Serialize};

// =========================================================
// Stats types
// =========================================================

/// Dashboard palette shared by the gauge and the trend badges.
pub const GREEN_HSL: &str = "hsl(142.1 76.2% 36.3%)";
pub const YELLOW_HSL: &str = "hsl(45 93% 47%)";
pub const RED_HSL: &str = "hsl(0 84% 60%)";

/// Mean metrics across all travels at one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateSnapshot {
    pub mean_profit: f64,
    pub mean_people: f64,
    /// `mean_profit / mean_people`, or `0` when there are no people.
    pub ratio: f64,
}

/// Lowest and highest positive ratio seen over ticks `0..=100`.
///
/// With no positive ratio anywhere both bounds stay at their sentinels
/// (`+inf` / `-inf`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeRange {
    pub min_ratio: f64,
    pub max_ratio: f64,
}

impl GaugeRange {
    /// Whether no tick produced a positive ratio.
    pub fn is_unbounded(&self) -> bool {
        self.min_ratio == f64::INFINITY && self.max_ratio == f64::NEG_INFINITY
    }
}

/// Gauge band for a display percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GaugeLevel {
    High,
    Medium,
    Low,
}

impl GaugeLevel {
    pub fn hsl(&self) -> &'static str {
        match self {
            GaugeLevel::High => GREEN_HSL,
            GaugeLevel::Medium => YELLOW_HSL,
            GaugeLevel::Low => RED_HSL,
        }
    }
}

/// Trend badge colour for a percent change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendColor {
    Green,
    Yellow,
    Red,
}

impl TrendColor {
    pub fn hsl(&self) -> &'static str {
        match self {
            TrendColor::Green => GREEN_HSL,
            TrendColor::Yellow => YELLOW_HSL,
            TrendColor::Red => RED_HSL,
        }
    }
}

/// Totals across all travels at one tick of the trend window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub progress: i64,
    pub profit: f64,
    pub people: f64,
    pub predicted_profit: f64,
    pub predicted_people: f64,
    /// Sum of absolute profit residuals.
    pub profit_error: f64,
    /// Sum of absolute people residuals.
    pub people_error: f64,
}

impl TrendPoint {
    pub(crate) fn empty(progress: i64) -> Self {
        Self {
            progress,
            profit: 0.0,
            people: 0.0,
            predicted_profit: 0.0,
            predicted_people: 0.0,
            profit_error: 0.0,
            people_error: 0.0,
        }
    }
}

/// Percent change between the first and last point of the window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSummary {
    pub percent_change: f64,
    pub color: TrendColor,
}

impl TrendSummary {
    pub fn flat() -> Self {
        Self {
            percent_change: 0.0,
            color: TrendColor::Green,
        }
    }
}

/// Trend badges for the three headline metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trends {
    pub profit: TrendSummary,
    pub people: TrendSummary,
    pub ratio: TrendSummary,
}

impl Default for Trends {
    fn default() -> Self {
        Self {
            profit: TrendSummary::flat(),
            people: TrendSummary::flat(),
            ratio: TrendSummary::flat(),
        }
    }
}

/// Trailing ten-tick window and its trend badges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendWindow {
    pub points: Vec<TrendPoint>,
    pub trends: Trends,
}

/// Everything the stats tab renders for one slider position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelStats {
    pub progress: f64,
    pub mean_profit: f64,
    pub mean_people: f64,
    pub ratio: f64,
    pub min_ratio: f64,
    pub max_ratio: f64,
    pub gauge_percentage: f64,
    pub gauge_color: GaugeLevel,
    pub historical_data: Vec<TrendPoint>,
    pub trends: Trends,
}
