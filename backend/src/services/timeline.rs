//! Per-travel timeline lookups used by the route cards.

use chrono::NaiveDate;

use crate::api::{RouteDate, TravelHistory, TravelPosition};
use crate::models::progress::{day_index, round_progress, route_date, trailing_window};
use crate::models::{TimelineEntry, Travel};

/// Ticks of history shown on the route cards, counting back from the current one.
pub const HISTORY_TICKS: i64 = 15;

/// Entry at the current tick, or the first entry when the tick is missing.
pub fn current_entry(travel: &Travel, progress: f64) -> Option<&TimelineEntry> {
    travel
        .entry_at(round_progress(progress))
        .or_else(|| travel.timeline().first())
}

/// Entry one tick before the current one. `None` at tick 0.
pub fn previous_entry(travel: &Travel, progress: f64) -> Option<&TimelineEntry> {
    let tick = round_progress(progress);
    if tick == 0 {
        return None;
    }
    travel.entry_at(tick - 1)
}

/// Current and previous entries for one travel.
pub fn travel_position(travel: &Travel, progress: f64) -> TravelPosition {
    TravelPosition {
        name: travel.name.clone(),
        progress,
        current: current_entry(travel, progress).cloned(),
        previous: previous_entry(travel, progress).cloned(),
    }
}

/// Each travel's entries over the last [`HISTORY_TICKS`] ticks, in timeline order.
pub fn recent_history(travels: &[Travel], progress: f64) -> Vec<TravelHistory> {
    let (start, end) = trailing_window(progress, HISTORY_TICKS + 1);
    travels
        .iter()
        .map(|travel| TravelHistory {
            name: travel.name.clone(),
            description: travel.description.clone(),
            data: travel
                .timeline()
                .iter()
                .filter(|e| e.progress >= start && e.progress <= end)
                .cloned()
                .collect(),
        })
        .collect()
}

/// Calendar date shown for a slider position, if the calendar can hold it.
pub fn route_date_for(base: NaiveDate, progress: f64) -> Option<RouteDate> {
    Some(RouteDate {
        progress,
        day: day_index(progress),
        date: route_date(base, progress)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_travel() -> Travel {
        Travel::new(
            "Barcelona - Ibiza",
            "daily",
            (0..=30)
                .rev()
                .map(|tick| TimelineEntry::observed(tick, tick as f64 * 10.0, 5.0))
                .collect(),
        )
    }

    #[test]
    fn test_current_entry_exact_match() {
        let travel = sample_travel();
        assert_eq!(current_entry(&travel, 12.2).map(|e| e.progress), Some(12));
    }

    #[test]
    fn test_current_entry_falls_back_to_first() {
        let travel = sample_travel();
        // Timeline is stored in descending order, so the first entry is tick 30.
        assert_eq!(current_entry(&travel, 75.0).map(|e| e.progress), Some(30));

        let empty = Travel::new("empty", "", vec![]);
        assert!(current_entry(&empty, 0.0).is_none());
    }

    #[test]
    fn test_previous_entry() {
        let travel = sample_travel();
        assert!(previous_entry(&travel, 0.0).is_none());
        assert!(previous_entry(&travel, 0.4).is_none());
        assert_eq!(previous_entry(&travel, 8.0).map(|e| e.progress), Some(7));
        assert!(previous_entry(&travel, 45.0).is_none());
    }

    #[test]
    fn test_travel_position() {
        let position = travel_position(&sample_travel(), 1.0);
        assert_eq!(position.name, "Barcelona - Ibiza");
        assert_eq!(position.current.map(|e| e.progress), Some(1));
        assert_eq!(position.previous.map(|e| e.progress), Some(0));
    }

    #[test]
    fn test_recent_history_window() {
        let travels = vec![sample_travel()];

        let history = recent_history(&travels, 20.0);
        assert_eq!(history.len(), 1);
        let ticks: Vec<i64> = history[0].data.iter().map(|e| e.progress).collect();
        assert_eq!(ticks.len(), 16);
        assert_eq!(ticks.first(), Some(&20));
        assert_eq!(ticks.last(), Some(&5));

        let start = recent_history(&travels, 3.0);
        assert_eq!(start[0].data.len(), 4);
    }

    #[test]
    fn test_route_date_for() {
        let base = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
        let date = route_date_for(base, 37.0).unwrap();
        assert_eq!(date.day, 3);
        assert_eq!(date.date, NaiveDate::from_ymd_opt(2025, 8, 18).unwrap());
        assert!(route_date_for(base, 1e12).is_none());
    }
}
