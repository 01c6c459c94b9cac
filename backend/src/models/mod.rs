pub mod progress;
pub mod travel;

pub use travel::{TimelineEntry, Travel, TravelCollection};
