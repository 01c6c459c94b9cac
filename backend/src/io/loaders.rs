use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::models::TravelCollection;

/// Keys a wrapped payload may keep its travel array under.
const WRAPPER_KEYS: [&str; 4] = ["data", "travels", "results", "items"];

/// Raw JSON payload: either a bare array or an object wrapping one.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TravelsPayload {
    Bare(TravelCollection),
    Wrapped(serde_json::Map<String, serde_json::Value>),
}

/// Loads travel collections from JSON fixtures.
pub struct TravelLoader;

impl TravelLoader {
    /// Load a travel collection from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<TravelCollection> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read travels file {}", path.display()))?;
        let travels = Self::load_from_json_str(&content)
            .with_context(|| format!("Failed to parse travels file {}", path.display()))?;
        log::info!("Loaded {} travels from {}", travels.len(), path.display());
        Ok(travels)
    }

    /// Load a travel collection from a JSON string.
    pub fn load_from_json_str(json_str: &str) -> Result<TravelCollection> {
        let payload: TravelsPayload =
            serde_json::from_str(json_str).context("Invalid travels JSON")?;

        match payload {
            TravelsPayload::Bare(travels) => Ok(travels),
            TravelsPayload::Wrapped(mut object) => {
                let key = WRAPPER_KEYS
                    .iter()
                    .find(|k| object.get(**k).is_some_and(|v| v.is_array()))
                    .with_context(|| {
                        let keys: Vec<&String> = object.keys().collect();
                        format!("No travel array found in object with keys {:?}", keys)
                    })?;
                let value = object.remove(*key).unwrap_or_default();
                serde_json::from_value(value)
                    .with_context(|| format!("Invalid travel array under '{}'", key))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FIXTURE: &str = r#"[
        {"name": "Valencia - Ibiza", "description": "fast ferry",
         "timeline": [{"progress": 0, "isActive": true, "profit": 100, "people": 10}]},
        {"name": "Denia - Formentera", "description": "",
         "timeline": []}
    ]"#;

    #[test]
    fn test_load_bare_array() {
        let travels = TravelLoader::load_from_json_str(FIXTURE).unwrap();
        assert_eq!(travels.len(), 2);
        assert_eq!(travels[0].entry_at(0).map(|e| e.people), Some(10.0));
    }

    #[test]
    fn test_load_wrapped_array() {
        let wrapped = format!(r#"{{"status": "ok", "results": {}}}"#, FIXTURE);
        let travels = TravelLoader::load_from_json_str(&wrapped).unwrap();
        assert_eq!(travels.len(), 2);
        assert_eq!(travels[1].name, "Denia - Formentera");
    }

    #[test]
    fn test_object_without_array_is_error() {
        let err = TravelLoader::load_from_json_str(r#"{"status": "ok"}"#).unwrap_err();
        assert!(err.to_string().contains("No travel array"));
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(TravelLoader::load_from_json_str("not json").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FIXTURE.as_bytes()).unwrap();

        let travels = TravelLoader::load_from_file(file.path()).unwrap();
        assert_eq!(travels.len(), 2);
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = TravelLoader::load_from_file(Path::new("/nonexistent/travels.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read travels file"));
    }
}
