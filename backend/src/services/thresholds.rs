//! Demand and price level classification for the route cards.

use crate::api::{ThresholdBands, ThresholdMetric, ThresholdReport, TrendLevel};

/// Average group volume bands.
pub const DEMAND_BANDS: ThresholdBands = ThresholdBands {
    very_low: 30.0,
    low: 50.0,
    medium: 70.0,
    high: 100.0,
};

/// Average product price bands.
pub const PRICE_BANDS: ThresholdBands = ThresholdBands {
    very_low: 500.0,
    low: 1000.0,
    medium: 3000.0,
    high: 4000.0,
};

pub fn bands_for(metric: ThresholdMetric) -> ThresholdBands {
    match metric {
        ThresholdMetric::Demand => DEMAND_BANDS,
        ThresholdMetric::Price => PRICE_BANDS,
    }
}

/// Place `value` in its band. Values at or above `high` are `VeryHigh`.
pub fn classify(value: f64, bands: &ThresholdBands) -> TrendLevel {
    if value < bands.very_low {
        TrendLevel::VeryLow
    } else if value < bands.low {
        TrendLevel::Low
    } else if value < bands.medium {
        TrendLevel::Medium
    } else if value < bands.high {
        TrendLevel::High
    } else {
        TrendLevel::VeryHigh
    }
}

pub fn classify_demand(value: f64) -> TrendLevel {
    classify(value, &DEMAND_BANDS)
}

pub fn classify_price(value: f64) -> TrendLevel {
    classify(value, &PRICE_BANDS)
}

/// Classify whichever of demand and price are present.
pub fn threshold_report(demand: Option<f64>, price: Option<f64>) -> ThresholdReport {
    ThresholdReport {
        demand: demand.map(classify_demand),
        price: price.map(classify_price),
    }
}
