use std::fs;

use log::{info, warn};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::types::CelestialObject;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("decoding JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected an array of objects or an object with an `objects` array")]
    Shape,
}

/// Metadata the backend sends alongside the objects.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct Observation {
    #[serde(default)]
    pub location: Option<Value>,
    #[serde(default)]
    pub time_used: Option<String>,
    #[serde(default)]
    pub timezone_info: Option<String>,
    #[serde(default)]
    pub total_objects_found: Option<u64>,
}

impl Observation {
    pub fn summary(&self) -> String {
        let coords = self
            .location
            .as_ref()
            .and_then(|l| l.get("coordinates"))
            .and_then(Value::as_str)
            .unwrap_or("unknown location");
        let time = self.time_used.as_deref().unwrap_or("unknown time");
        let tz = self.timezone_info.as_deref().unwrap_or("--");
        match self.total_objects_found {
            Some(n) => format!("{coords} at {time} (timezone: {tz}), {n} objects found"),
            None => format!("{coords} at {time} (timezone: {tz})"),
        }
    }
}

#[derive(Debug, Default)]
pub struct LoadedObjects {
    pub observation: Option<Observation>,
    pub objects: Vec<CelestialObject>,
    pub dropped: usize,
}

fn parse_objects(text: &str) -> Result<LoadedObjects, DataError> {
    let (observation, items) = match serde_json::from_str::<Value>(text)? {
        Value::Array(items) => (None, items),
        Value::Object(mut map) => {
            let items = match map.remove("objects") {
                Some(Value::Array(items)) => items,
                // `"objects": null` is the backend's way of saying nothing is up
                Some(Value::Null) => Vec::new(),
                _ => return Err(DataError::Shape),
            };
            let observation = serde_json::from_value(Value::Object(map)).unwrap_or_default();
            (Some(observation), items)
        }
        Value::Null => (None, Vec::new()),
        _ => return Err(DataError::Shape),
    };

    let mut out = LoadedObjects {
        observation,
        ..Default::default()
    };
    for (i, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<CelestialObject>(item) {
            Ok(o) => out.objects.push(o),
            Err(e) => {
                warn!("dropping object #{i}: {e}");
                out.dropped += 1;
            }
        }
    }
    Ok(out)
}

pub fn load_objects(path: &str) -> Result<LoadedObjects, DataError> {
    let text = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_string(),
        source,
    })?;
    let loaded = parse_objects(&text)?;
    info!(
        "loaded {} objects from {path} ({} dropped)",
        loaded.objects.len(),
        loaded.dropped
    );
    if let Some(obs) = &loaded.observation {
        info!("observation: {}", obs.summary());
    }
    Ok(loaded)
}
