use crate::api::{DatasetId, PredictionDay, TrendColor};
use crate::db::repositories::LocalRepository;
use crate::db::repository::RepositoryError;
use crate::db::services;
use crate::models::{TimelineEntry, Travel};

fn fixture() -> Vec<Travel> {
    vec![
        Travel::new(
            "Valencia - Ibiza",
            "",
            (0..=20)
                .map(|t| TimelineEntry::observed(t, 1000.0 - 20.0 * t as f64, 10.0))
                .collect(),
        ),
        Travel::new(
            "Barcelona - Mallorca",
            "",
            (0..=20)
                .map(|t| TimelineEntry::observed(t, 1000.0, 10.0))
                .collect(),
        ),
    ]
}

#[tokio::test]
async fn test_health_check() {
    let repo = LocalRepository::new();
    assert!(services::health_check(&repo).await.unwrap());
}

#[tokio::test]
async fn test_store_and_list() {
    let repo = LocalRepository::new();
    let info = services::store_travels(&repo, "fixture", fixture()).await.unwrap();
    assert_eq!(info.travel_count, 2);

    let list = services::list_datasets(&repo).await.unwrap();
    assert_eq!(list, vec![info]);
}

#[tokio::test]
async fn test_stats_for_stored_dataset() {
    let repo = LocalRepository::new();
    let id = repo.store_dataset_impl("fixture", fixture());

    let stats = services::get_travel_stats(&repo, id, 20.0).await.unwrap();
    // Window 11..=20: profit sums 1780 -> 1600.
    assert_eq!(stats.historical_data.len(), 10);
    assert_eq!(stats.historical_data[0].profit, 1780.0);
    assert_eq!(stats.historical_data[9].profit, 1600.0);
    assert_eq!(stats.trends.profit.color, TrendColor::Yellow);
    assert_eq!(stats.trends.people.color, TrendColor::Green);
}

#[tokio::test]
async fn test_stats_for_missing_dataset() {
    let repo = LocalRepository::new();
    let err = services::get_travel_stats(&repo, DatasetId(42), 0.0)
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
}

#[tokio::test]
async fn test_history_and_position() {
    let repo = LocalRepository::new();
    let id = repo.store_dataset_impl("fixture", fixture());

    let history = services::get_recent_history(&repo, id, 20.0).await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].data.len(), 16);

    let position = services::get_travel_position(&repo, id, "Valencia - Ibiza", 5.0)
        .await
        .unwrap();
    assert_eq!(position.current.map(|e| e.profit), Some(900.0));
    assert_eq!(position.previous.map(|e| e.profit), Some(920.0));
}

#[tokio::test]
async fn test_store_prediction() {
    let repo = LocalRepository::new();
    let days: Vec<PredictionDay> = (0..10)
        .map(|d| PredictionDay {
            day: d,
            price: Some(50.0),
            demand: Some(40.0),
        })
        .collect();

    let info = services::store_prediction(&repo, "live", "VLC-IBZ", "prediction", &days)
        .await
        .unwrap();
    assert_eq!(info.travel_count, 1);

    let stats = services::get_travel_stats(&repo, info.dataset_id, 90.0)
        .await
        .unwrap();
    assert_eq!(stats.mean_profit, 2000.0);
    assert_eq!(stats.ratio, 50.0);
    assert_eq!(stats.gauge_percentage, 52.5);
}

#[tokio::test]
async fn test_store_prediction_rejects_bad_day() {
    let repo = LocalRepository::new();
    let days = [PredictionDay {
        day: 11,
        price: None,
        demand: None,
    }];

    let err = services::store_prediction(&repo, "live", "VLC-IBZ", "", &days)
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::ValidationError { .. }));
    assert_eq!(err.context().operation.as_deref(), Some("store_prediction"));
    assert_eq!(repo.dataset_count(), 0);
}
