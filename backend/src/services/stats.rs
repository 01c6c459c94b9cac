//! Stats tab aggregation: snapshot means, gauge mapping and the trailing
//! trend window.
//!
//! Every function here is a pure function of `(travels, progress)`. Numeric
//! degeneracies (empty collections, out-of-range ratios) are passed through
//! to the caller untouched.

use log::debug;

use crate::api::{
    AggregateSnapshot, GaugeLevel, GaugeRange, TrendColor, TrendPoint, TrendSummary, TrendWindow,
    Trends, TravelStats,
};
use crate::models::progress::{round_progress, trailing_window, MAX_TICK, MIN_TICK};
use crate::models::Travel;

/// Ticks in the trend window.
pub const TREND_WINDOW_LEN: i64 = 10;

/// Gauge percentage for a zero ratio (bottom of the visual band).
pub const GAUGE_FLOOR: f64 = 15.0;

/// Gauge percentage when the ratio range has collapsed.
pub const GAUGE_MIDPOINT: f64 = 52.5;

/// Width of the gauge band above the floor.
pub const GAUGE_SPAN: f64 = 75.0;

/// Percent drop at (and below) which a trend turns red.
pub const TREND_RED_DROP: f64 = -15.0;

fn snapshot_at_tick(travels: &[Travel], tick: i64) -> AggregateSnapshot {
    let mut total_profit = 0.0;
    let mut total_people = 0.0;

    for entry in travels.iter().filter_map(|t| t.entry_at(tick)) {
        total_profit += entry.profit;
        total_people += entry.people;
    }

    // Travels without this tick still count in the denominator.
    let n = travels.len() as f64;
    let mean_profit = total_profit / n;
    let mean_people = total_people / n;
    let ratio = if mean_people > 0.0 {
        mean_profit / mean_people
    } else {
        0.0
    };

    AggregateSnapshot {
        mean_profit,
        mean_people,
        ratio,
    }
}

/// Mean profit, mean people and their ratio at the tick `progress` rounds to.
pub fn compute_snapshot(travels: &[Travel], progress: f64) -> AggregateSnapshot {
    snapshot_at_tick(travels, round_progress(progress))
}

/// Scan ticks `0..=100` for the lowest and highest positive ratio.
pub fn compute_gauge_range(travels: &[Travel]) -> GaugeRange {
    let mut min_ratio = f64::INFINITY;
    let mut max_ratio = f64::NEG_INFINITY;

    for tick in MIN_TICK..=MAX_TICK {
        let ratio = snapshot_at_tick(travels, tick).ratio;
        if ratio > 0.0 {
            min_ratio = min_ratio.min(ratio);
            max_ratio = max_ratio.max(ratio);
        }
    }

    GaugeRange {
        min_ratio,
        max_ratio,
    }
}

/// Map a ratio onto the gauge's display band.
///
/// A zero ratio sits at [`GAUGE_FLOOR`]. A collapsed range (equal bounds, or
/// the unbounded range left when no tick had a positive ratio) sits at
/// [`GAUGE_MIDPOINT`]. Otherwise the ratio is interpolated linearly onto
/// `15..=90`. Ratios outside `[min_ratio, max_ratio]` are not clamped and land
/// outside that band.
pub fn map_to_gauge_percentage(ratio: f64, min_ratio: f64, max_ratio: f64) -> f64 {
    if ratio == 0.0 {
        return GAUGE_FLOOR;
    }
    let unbounded = min_ratio == f64::INFINITY && max_ratio == f64::NEG_INFINITY;
    if max_ratio == min_ratio || unbounded {
        return GAUGE_MIDPOINT;
    }
    let normalized = (ratio - min_ratio) / (max_ratio - min_ratio);
    GAUGE_FLOOR + normalized * GAUGE_SPAN
}

/// Gauge band for a display percentage.
pub fn gauge_level(percentage: f64) -> GaugeLevel {
    if percentage >= 60.0 {
        GaugeLevel::High
    } else if percentage >= 25.0 {
        GaugeLevel::Medium
    } else {
        GaugeLevel::Low
    }
}

/// Trend colour for a percent change. Zero counts as growth; exactly -15 is red.
pub fn trend_color(percent_change: f64) -> TrendColor {
    if percent_change >= 0.0 {
        TrendColor::Green
    } else if percent_change > TREND_RED_DROP {
        TrendColor::Yellow
    } else {
        TrendColor::Red
    }
}

fn percent_change(first: f64, last: f64) -> f64 {
    if first > 0.0 {
        (last - first) / first * 100.0
    } else {
        0.0
    }
}

fn point_ratio(point: &TrendPoint) -> f64 {
    if point.people > 0.0 {
        point.profit / point.people
    } else {
        0.0
    }
}

fn summarize(change: f64) -> TrendSummary {
    TrendSummary {
        percent_change: change,
        color: trend_color(change),
    }
}

fn trend_point(travels: &[Travel], tick: i64) -> TrendPoint {
    let mut point = TrendPoint::empty(tick);
    for entry in travels.iter().filter_map(|t| t.entry_at(tick)) {
        point.profit += entry.profit;
        point.people += entry.people;
        point.predicted_profit += entry.predicted_profit;
        point.predicted_people += entry.predicted_people;
        point.profit_error += entry.profit_error.abs();
        point.people_error += entry.people_error.abs();
    }
    point
}

/// Compare the first and last point of a window.
///
/// Fewer than two points yields flat, green trends.
pub fn compute_trends(points: &[TrendPoint]) -> Trends {
    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() >= 2 => (first, last),
        _ => return Trends::default(),
    };

    Trends {
        profit: summarize(percent_change(first.profit, last.profit)),
        people: summarize(percent_change(first.people, last.people)),
        ratio: summarize(percent_change(point_ratio(first), point_ratio(last))),
    }
}

/// Totals for the ten ticks ending at `progress`, plus their trend badges.
pub fn compute_trend_window(travels: &[Travel], progress: f64) -> TrendWindow {
    let (start, end) = trailing_window(progress, TREND_WINDOW_LEN);
    let points: Vec<TrendPoint> = (start..=end).map(|tick| trend_point(travels, tick)).collect();
    let trends = compute_trends(&points);
    TrendWindow { points, trends }
}

/// Compute every stats-tab figure for one slider position.
pub fn compute_travel_stats(travels: &[Travel], progress: f64) -> TravelStats {
    let snapshot = compute_snapshot(travels, progress);
    let range = compute_gauge_range(travels);
    let gauge_percentage = map_to_gauge_percentage(snapshot.ratio, range.min_ratio, range.max_ratio);
    let window = compute_trend_window(travels, progress);

    debug!(
        "stats at progress {}: ratio={} range=[{}, {}] gauge={} window={} points",
        progress,
        snapshot.ratio,
        range.min_ratio,
        range.max_ratio,
        gauge_percentage,
        window.points.len()
    );

    TravelStats {
        progress,
        mean_profit: snapshot.mean_profit,
        mean_people: snapshot.mean_people,
        ratio: snapshot.ratio,
        min_ratio: range.min_ratio,
        max_ratio: range.max_ratio,
        gauge_percentage,
        gauge_color: gauge_level(gauge_percentage),
        historical_data: window.points,
        trends: window.trends,
    }
}
