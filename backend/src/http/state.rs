//! Application state for the HTTP server.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::db::repository::TravelRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Dataset store
    pub repository: Arc<dyn TravelRepository>,
    /// Date of tick 0, used for route dates
    pub base_date: NaiveDate,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn TravelRepository>, base_date: NaiveDate) -> Self {
        Self {
            repository,
            base_date,
        }
    }
}
