//! Service layer: the computations behind each dashboard panel.
//!
//! Everything in here is synchronous and pure over its inputs. Fetching the
//! inputs is the job of [`crate::db::services`].

pub mod prediction;
pub mod stats;
pub mod thresholds;
pub mod timeline;


pub use prediction::{adapt_prediction_timeline, PredictionError};
pub use stats::{
    compute_gauge_range, compute_snapshot, compute_trend_window, compute_travel_stats,
    gauge_level, map_to_gauge_percentage, trend_color,
};
pub use thresholds::{classify_demand, classify_price, threshold_report};
pub use timeline::{current_entry, previous_entry, recent_history, route_date_for};
