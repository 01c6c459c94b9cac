#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use ferry_stats::models::{TimelineEntry, Travel, TravelCollection};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Variables are restored on unwind, and access is serialized because the
/// process environment is shared between parallel tests.
///
/// `Some(v)` sets a variable, `None` removes it.
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    saved: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let saved = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect();

        for (key, value) in changes {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }

        Self { saved }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..) {
            match value {
                Some(v) => std::env::set_var(&key, v),
                None => std::env::remove_var(&key),
            }
        }
    }
}

/// Travel observed at every tick in `0..=100` with the given metric curves.
pub fn travel_from_fn(
    name: &str,
    profit: impl Fn(i64) -> f64,
    people: impl Fn(i64) -> f64,
) -> Travel {
    Travel::new(
        name,
        "",
        (0..=100)
            .map(|t| TimelineEntry::observed(t, profit(t), people(t)))
            .collect(),
    )
}

/// One route with rising profit next to a flat one, ten passengers each.
///
/// The mean ratio runs from 100 at tick 0 to 150 at tick 100.
pub fn rising_network() -> TravelCollection {
    vec![
        travel_from_fn("Valencia - Ibiza", |t| 1000.0 + 10.0 * t as f64, |_| 10.0),
        travel_from_fn("Denia - Formentera", |_| 1000.0, |_| 10.0),
    ]
}
