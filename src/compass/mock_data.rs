//! Mock Data Store
//!
//! Holds the combined mock data document: a JSON object keyed by career or
//! persona id, each record shaped like
//! `{"trends": {metric: data}, "events_template": [EventTemplate]}`.
//! The document is loaded once at startup and never written afterwards.
//!
//! Lookups treat empty values (`null`, `false`, `0`, `""`, `[]`, `{}`)
//! the same as absent keys.

use super::types::{Event, EventTemplate, TimelineResponse};
use crate::error::{ApiError, LoadError};
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::Path;
use uuid::Uuid;

/// Result of a metric trend lookup
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrendInsight {
    pub data: Value,
    pub insight: String,
}

#[derive(Debug, Clone, Default)]
pub struct MockDataStore {
    records: Map<String, Value>,
}

impl MockDataStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_value(value: Value) -> Result<Self, LoadError> {
        match value {
            Value::Object(records) => Ok(Self { records }),
            _ => Err(LoadError::NotAnObject),
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, LoadError> {
        Self::from_value(serde_json::from_str(raw)?)
    }

    /// Read the document; a missing file yields an empty store and a warning
    pub async fn load(path: &Path) -> Result<Self, LoadError> {
        match tokio::fs::read_to_string(path).await {
            Ok(raw) => {
                let store = Self::from_json_str(&raw)?;
                log::info!("Loaded {} mock records from {}", store.len(), path.display());
                Ok(store)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("{} not found. Mock data is empty.", path.display());
                Ok(Self::empty())
            }
            Err(source) => Err(LoadError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn record(&self, key: &str) -> Option<&Value> {
        self.records.get(key).filter(|v| is_truthy(v))
    }

    /// Look up `trends.<metric>` for a career
    pub fn trend(&self, career: &str, metric: &str) -> Result<TrendInsight, ApiError> {
        let career_data = self
            .record(career)
            .ok_or_else(|| ApiError::not_found("Career not found"))?;

        let career_data = career_data.as_object().ok_or_else(|| {
            ApiError::MalformedData(format!("career '{}' is not an object", career))
        })?;

        let data = career_data
            .get("trends")
            .and_then(Value::as_object)
            .and_then(|trends| trends.get(metric))
            .filter(|v| is_truthy(v))
            .ok_or_else(|| {
                ApiError::NotFound(format!("Metric {} not found for this career", metric))
            })?;

        Ok(TrendInsight {
            data: data.clone(),
            insight: mock_insight(career, metric),
        })
    }

    /// Build a timeline from a persona's event templates
    pub fn timeline(&self, person_id: &str) -> Result<TimelineResponse, ApiError> {
        let persona = self
            .record(person_id)
            .ok_or_else(|| ApiError::not_found("Persona not found"))?;

        let persona = persona.as_object().ok_or_else(|| {
            ApiError::MalformedData(format!("persona '{}' is not an object", person_id))
        })?;

        let templates: Vec<EventTemplate> = match persona.get("events_template") {
            None | Some(Value::Null) => Vec::new(),
            Some(raw) => serde_json::from_value(raw.clone()).map_err(|e| {
                ApiError::MalformedData(format!(
                    "events_template for '{}': {}",
                    person_id, e
                ))
            })?,
        };

        Ok(TimelineResponse {
            session_id: Uuid::new_v4().to_string(),
            person_id: person_id.to_string(),
            timeline: templates.into_iter().map(Event::from).collect(),
        })
    }
}

/// Placeholder insight until a real model fills it in
pub fn mock_insight(career: &str, metric: &str) -> String {
    format!(
        "This is a mock insight for {} {} trends. Gemini integration will fill missing data and provide real insights here later.",
        career, metric
    )
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
