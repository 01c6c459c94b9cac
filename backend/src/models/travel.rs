//! Travel routes and their per-tick timelines.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// One observation for one route at one progress tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub progress: i64,
    #[serde(default)]
    pub is_active: bool,
    pub profit: f64,
    pub people: f64,
    #[serde(default)]
    pub predicted_profit: f64,
    #[serde(default)]
    pub predicted_people: f64,
    /// Signed residual, predicted minus actual.
    #[serde(default)]
    pub profit_error: f64,
    /// Signed residual, predicted minus actual.
    #[serde(default)]
    pub people_error: f64,
}

impl TimelineEntry {
    /// Entry with only the observed metrics set.
    pub fn observed(progress: i64, profit: f64, people: f64) -> Self {
        Self {
            progress,
            is_active: true,
            profit,
            people,
            predicted_profit: 0.0,
            predicted_people: 0.0,
            profit_error: 0.0,
            people_error: 0.0,
        }
    }
}

/// A named route with its ordered timeline.
///
/// The timeline keeps its original order. Lookups by tick go through an index
/// built once when the travel is constructed or deserialized; when a tick
/// appears more than once the first occurrence wins.
#[derive(Debug, Clone)]
pub struct Travel {
    pub name: String,
    pub description: String,
    timeline: Vec<TimelineEntry>,
    by_progress: HashMap<i64, usize>,
}

impl Travel {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        timeline: Vec<TimelineEntry>,
    ) -> Self {
        let mut by_progress = HashMap::with_capacity(timeline.len());
        for (idx, entry) in timeline.iter().enumerate() {
            by_progress.entry(entry.progress).or_insert(idx);
        }
        Self {
            name: name.into(),
            description: description.into(),
            timeline,
            by_progress,
        }
    }

    pub fn timeline(&self) -> &[TimelineEntry] {
        &self.timeline
    }

    /// Entry recorded at exactly `tick`, if any.
    pub fn entry_at(&self, tick: i64) -> Option<&TimelineEntry> {
        self.by_progress.get(&tick).map(|&idx| &self.timeline[idx])
    }
}

impl PartialEq for Travel {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.description == other.description
            && self.timeline == other.timeline
    }
}

#[derive(Serialize)]
struct TravelReprRef<'a> {
    name: &'a str,
    description: &'a str,
    timeline: &'a [TimelineEntry],
}

#[derive(Deserialize)]
struct TravelRepr {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    timeline: Vec<TimelineEntry>,
}

impl Serialize for Travel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        TravelReprRef {
            name: &self.name,
            description: &self.description,
            timeline: &self.timeline,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Travel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = TravelRepr::deserialize(deserializer)?;
        Ok(Travel::new(repr.name, repr.description, repr.timeline))
    }
}

/// The set of travels every aggregation reads from.
pub type TravelCollection = Vec<Travel>;
