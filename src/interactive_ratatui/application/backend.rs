use crate::interactive_ratatui::domain::models::Resource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("{0}")]
    Rejected(String),

    #[error("Unexpected response: {0}")]
    Malformed(String),
}

pub type BackendResult<T> = std::result::Result<T, BackendError>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCounts {
    #[serde(default)]
    pub critical: u32,
    #[serde(default)]
    pub warnings: u32,
}

impl IssueCounts {
    pub fn total(&self) -> u32 {
        self.critical.saturating_add(self.warnings)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuickWin {
    pub title: String,
    #[serde(default)]
    pub impact: Option<String>,
}

/// Result of analyzing one URL.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteAnalysis {
    /// Scoring dimension -> score. Ordered by dimension name.
    #[serde(default)]
    pub scores: BTreeMap<String, f64>,
    #[serde(default)]
    pub issues: IssueCounts,
    #[serde(default)]
    pub quick_wins: Vec<QuickWin>,
    #[serde(alias = "siteId")]
    pub resource_id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Idea {
    pub title: String,
    #[serde(default)]
    pub keyword: Option<String>,
}

/// The ideas endpoint answers either `{ "ideas": [...] }` or a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum IdeasPayload {
    Wrapped { ideas: Vec<Idea> },
    Bare(Vec<Idea>),
}

impl IdeasPayload {
    pub fn into_ideas(self) -> Vec<Idea> {
        match self {
            IdeasPayload::Wrapped { ideas } => ideas,
            IdeasPayload::Bare(ideas) => ideas,
        }
    }
}

/// Remote operations the palette drives. Implementations block; the runner calls them
/// from its worker thread.
pub trait PaletteBackend: Send + Sync {
    fn analyze_resource(&self, identifier: &str) -> BackendResult<SiteAnalysis>;

    fn generate_ideas(&self, topic: &str, count: usize) -> BackendResult<Vec<Idea>>;

    fn list_resources(&self) -> BackendResult<Vec<Resource>>;
}

/// Parse an ideas body in either accepted shape.
pub fn parse_ideas(body: &serde_json::Value) -> BackendResult<Vec<Idea>> {
    serde_json::from_value::<IdeasPayload>(body.clone())
        .map(IdeasPayload::into_ideas)
        .map_err(|e| BackendError::Malformed(format!("ideas: {e}")))
}

/// Fail on an explicit `success: false` envelope, using its error text when present.
pub fn check_envelope(body: &serde_json::Value, fallback: &str) -> BackendResult<()> {
    if body.get("success").and_then(serde_json::Value::as_bool) == Some(false) {
        let message = body
            .get("error")
            .or_else(|| body.get("message"))
            .and_then(serde_json::Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or(fallback);
        return Err(BackendError::Rejected(message.to_string()));
    }
    Ok(())
}

/// Unwrap `{ "data": ... }` envelopes; other bodies pass through.
pub fn envelope_data(body: serde_json::Value) -> serde_json::Value {
    match body {
        serde_json::Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(serde_json::Value::Null)
        }
        other => other,
    }
}
