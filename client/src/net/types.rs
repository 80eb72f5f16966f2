//! Wire payloads from the analysis service and the normalized report.
//!
//! DESIGN
//! ======
//! The service answers with loosely-typed JSON: any field may be missing,
//! `null`, or the wrong shape. Deserialization is lenient field by field so a
//! malformed-but-successful reply degrades to empty sections instead of an
//! error, and the rendering layer only ever sees a fully-populated
//! [`AnalysisReport`].

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer};

use crate::consts::{SITUATION_FALLBACK, UNKNOWN_ERROR_MESSAGE};

/// Success body as sent by the service. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AnalysisPayload {
    #[serde(default, deserialize_with = "lenient_text")]
    pub current_business_situation: Option<String>,
    #[serde(default, deserialize_with = "lenient_items")]
    pub strong_points: Vec<String>,
    #[serde(default, deserialize_with = "lenient_items")]
    pub weak_points: Vec<String>,
    #[serde(default, deserialize_with = "lenient_items")]
    pub smart_suggestions: Vec<String>,
    #[serde(default, deserialize_with = "lenient_items")]
    pub next_strategic_moves: Vec<String>,
}

/// Failure body as sent by the service.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorPayload {
    #[serde(default, deserialize_with = "lenient_text")]
    pub error: Option<String>,
}

impl ErrorPayload {
    /// Parse a failure body; anything that is not an object has no message.
    #[must_use]
    pub fn from_value(value: &serde_json::Value) -> Self {
        if value.is_object() {
            serde_json::from_value(value.clone()).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Banner text: the service message, or the generic fallback.
    #[must_use]
    pub fn message(&self) -> String {
        self.error
            .clone()
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_owned())
    }
}

/// Normalized analysis report handed to the dashboard.
///
/// Built once per successful submission and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisReport {
    pub situation: String,
    pub strong_points: Vec<String>,
    pub weak_points: Vec<String>,
    pub suggestions: Vec<String>,
    pub next_moves: Vec<String>,
}

impl Default for AnalysisReport {
    fn default() -> Self {
        Self::from(AnalysisPayload::default())
    }
}

impl From<AnalysisPayload> for AnalysisReport {
    fn from(payload: AnalysisPayload) -> Self {
        let situation = payload
            .current_business_situation
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| SITUATION_FALLBACK.to_owned());
        Self {
            situation,
            strong_points: payload.strong_points,
            weak_points: payload.weak_points,
            suggestions: payload.smart_suggestions,
            next_moves: payload.next_strategic_moves,
        }
    }
}

impl AnalysisReport {
    /// Normalize any JSON value into a report.
    ///
    /// Non-object bodies yield the all-empty report with the fallback summary.
    #[must_use]
    pub fn from_value(value: &serde_json::Value) -> Self {
        let payload = if value.is_object() {
            serde_json::from_value::<AnalysisPayload>(value.clone()).unwrap_or_default()
        } else {
            AnalysisPayload::default()
        };
        Self::from(payload)
    }

    /// Section lengths in dashboard order: strong, weak, suggestions, moves.
    #[must_use]
    pub fn counts(&self) -> [usize; 4] {
        [
            self.strong_points.len(),
            self.weak_points.len(),
            self.suggestions.len(),
            self.next_moves.len(),
        ]
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_items<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items.into_iter().filter_map(item_text).collect())
}

fn item_text(item: serde_json::Value) -> Option<String> {
    match item {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        serde_json::Value::Null | serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
    }
}
