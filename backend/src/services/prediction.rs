//! Reshape a live prediction timeline into a [`Travel`].

use crate::api::PredictionDay;
use crate::models::progress::TICKS_PER_DAY;
use crate::models::{TimelineEntry, Travel};

/// Days covered by a prediction timeline.
pub const PREDICTION_DAYS: i64 = 10;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PredictionError {
    #[error("prediction day {day} is outside 0..=9")]
    DayOutOfRange { day: i64 },
}

/// Build a travel with one entry per prediction day.
///
/// Each day lands on tick `day * 10`. Revenue (`price * demand`) stands in for
/// profit and demand for people. The prediction is the only figure available,
/// so the predicted fields mirror the observed ones and residuals are zero.
pub fn adapt_prediction_timeline(
    name: impl Into<String>,
    description: impl Into<String>,
    days: &[PredictionDay],
) -> Result<Travel, PredictionError> {
    let timeline = days
        .iter()
        .map(|d| {
            if !(0..PREDICTION_DAYS).contains(&d.day) {
                return Err(PredictionError::DayOutOfRange { day: d.day });
            }
            let price = d.price.unwrap_or(0.0);
            let demand = d.demand.unwrap_or(0.0);
            let profit = price * demand;
            Ok(TimelineEntry {
                progress: d.day * TICKS_PER_DAY,
                is_active: demand > 0.0,
                profit,
                people: demand,
                predicted_profit: profit,
                predicted_people: demand,
                profit_error: 0.0,
                people_error: 0.0,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Travel::new(name, description, timeline))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(day: i64, price: Option<f64>, demand: Option<f64>) -> PredictionDay {
        PredictionDay { day, price, demand }
    }

    #[test]
    fn test_days_map_to_ticks() {
        let days: Vec<PredictionDay> = (0..10)
            .map(|d| day(d, Some(100.0), Some(20.0 + d as f64)))
            .collect();
        let travel = adapt_prediction_timeline("VLC-IBZ", "live", &days).unwrap();

        assert_eq!(travel.timeline().len(), 10);
        let entry = travel.entry_at(30).unwrap();
        assert_eq!(entry.people, 23.0);
        assert_eq!(entry.profit, 2300.0);
        assert_eq!(entry.predicted_profit, 2300.0);
        assert_eq!(entry.predicted_people, 23.0);
        assert_eq!(entry.profit_error, 0.0);
        assert!(entry.is_active);
        assert!(travel.entry_at(35).is_none());
    }

    #[test]
    fn test_missing_values_are_zero() {
        let travel = adapt_prediction_timeline("r", "", &[day(2, None, Some(5.0)), day(3, Some(9.0), None)])
            .unwrap();
        assert_eq!(travel.entry_at(20).unwrap().profit, 0.0);
        let idle = travel.entry_at(30).unwrap();
        assert_eq!(idle.people, 0.0);
        assert!(!idle.is_active);
    }

    #[test]
    fn test_day_out_of_range() {
        let err = adapt_prediction_timeline("r", "", &[day(10, Some(1.0), Some(1.0))]).unwrap_err();
        assert_eq!(err, PredictionError::DayOutOfRange { day: 10 });
        assert!(err.to_string().contains("0..=9"));
        assert!(adapt_prediction_timeline("r", "", &[day(-1, None, None)]).is_err());
    }

    #[test]
    fn test_demand_alias() {
        let parsed: PredictionDay =
            serde_json::from_str(r#"{"day": 4, "price": 120.5, "avg_demand": 30}"#).unwrap();
        assert_eq!(parsed.demand, Some(30.0));
    }
}
