use crate::interactive_ratatui::application::backend::{
    BackendError, BackendResult, Idea, PaletteBackend, SiteAnalysis, check_envelope,
    envelope_data, parse_ideas,
};
use crate::interactive_ratatui::domain::models::Resource;
use reqwest::blocking::{Client, RequestBuilder};
use serde_json::{Value, json};
use std::time::Duration;

/// JSON-over-HTTP backend.
///
/// Endpoints, relative to the base URL:
/// - `POST /analyze` with `{ "url": ... }`
/// - `POST /ideas` with `{ "topic": ..., "count": ... }`
/// - `GET /sites`
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration) -> BackendResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn send(&self, request: RequestBuilder, fallback: &str) -> BackendResult<Value> {
        let response = request
            .send()
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|body| {
                    body.get("error")
                        .or_else(|| body.get("message"))
                        .and_then(Value::as_str)
                        .map(str::to_string)
                })
                .unwrap_or_else(|| fallback.to_string());
            return Err(BackendError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body: Value =
            serde_json::from_str(&text).map_err(|e| BackendError::Malformed(e.to_string()))?;
        check_envelope(&body, fallback)?;
        Ok(envelope_data(body))
    }
}

impl PaletteBackend for HttpBackend {
    fn analyze_resource(&self, identifier: &str) -> BackendResult<SiteAnalysis> {
        tracing::debug!(url = identifier, "POST /analyze");
        let body = self.send(
            self.client
                .post(self.endpoint("analyze"))
                .json(&json!({ "url": identifier })),
            "Analysis failed",
        )?;
        serde_json::from_value(body).map_err(|e| BackendError::Malformed(format!("analysis: {e}")))
    }

    fn generate_ideas(&self, topic: &str, count: usize) -> BackendResult<Vec<Idea>> {
        tracing::debug!(topic, count, "POST /ideas");
        let body = self.send(
            self.client
                .post(self.endpoint("ideas"))
                .json(&json!({ "topic": topic, "count": count })),
            "Failed to generate ideas",
        )?;
        parse_ideas(&body)
    }

    fn list_resources(&self) -> BackendResult<Vec<Resource>> {
        let body = self.send(self.client.get(self.endpoint("sites")), "Failed to load sites")?;
        let body = match body {
            Value::Object(mut map) if map.contains_key("sites") => {
                map.remove("sites").unwrap_or(Value::Null)
            }
            other => other,
        };
        serde_json::from_value(body).map_err(|e| BackendError::Malformed(format!("sites: {e}")))
    }
}
