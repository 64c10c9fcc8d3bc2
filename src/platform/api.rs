// VCScout - platform/api.rs
//
// HTTP client for the assistant backend.
//
// Endpoints (all JSON):
//   POST {base}/api/chat    {"message"}  -> {"text"}
//   POST {base}/api/qa      {"question"} -> {"results": [...]}
//   GET  {base}/api/health               -> {"status", "qa_count", "vc_count"}
//
// Uses reqwest's blocking client. Every call here may block for up to the
// configured timeout, so callers run them on background threads
// (see app::search, app::chat, app::health). Nothing is retried.

use crate::core::chat::ChatClient;
use crate::core::model::{BackendHealth, FirmProfile};
use crate::core::search::ProfileSearch;
use crate::platform::config::endpoint;
use crate::util::constants;
use crate::util::error::{ChatError, ConfigError, HealthError, SearchError};
use crate::util::logging::preview;
use reqwest::blocking::Client;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    text: String,
}

#[derive(Debug, Serialize)]
struct QaRequest<'a> {
    question: &'a str,
}

#[derive(Debug, Deserialize)]
struct QaReply {
    #[serde(default)]
    results: Option<Vec<serde_json::Value>>,
}

/// Connection to one backend instance.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    /// Build a client for `base_url` with a per-request `timeout`.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(format!("{}/{}", constants::APP_NAME, constants::APP_VERSION))
            .build()
            .map_err(|e| ConfigError::HttpClient { source: e })?;

        tracing::info!(base_url = %base_url, timeout_secs = timeout.as_secs(), "HTTP backend ready");
        Ok(Self { client, base_url })
    }

    /// Ask the backend whether it is up and how much data it has indexed.
    pub fn health(&self) -> Result<BackendHealth, HealthError> {
        let url = endpoint(&self.base_url, constants::HEALTH_ENDPOINT);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| HealthError::Request {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(HealthError::Status { url, status });
        }

        response
            .json::<BackendHealth>()
            .map_err(|e| HealthError::Decode { url, source: e })
    }
}

impl ChatClient for HttpBackend {
    fn send(&self, message: &str) -> Result<String, ChatError> {
        let url = endpoint(&self.base_url, constants::CHAT_ENDPOINT);
        tracing::debug!(url = %url, message = %preview(message), "Sending chat message");

        let response = self
            .client
            .post(&url)
            .json(&ChatRequest { message })
            .send()
            .map_err(|e| ChatError::Request {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "Chat endpoint returned an error status");
            return Err(ChatError::Status { url, status });
        }

        let reply: ChatReply = response.json().map_err(|e| ChatError::Decode {
            url: url.clone(),
            source: e,
        })?;

        tracing::debug!(reply = %preview(&reply.text), "Chat reply received");
        Ok(reply.text)
    }
}

impl ProfileSearch for HttpBackend {
    fn search(&self, query: &str) -> Result<Vec<FirmProfile>, SearchError> {
        let url = endpoint(&self.base_url, constants::QA_ENDPOINT);
        let question = query.trim();
        tracing::debug!(url = %url, question = %preview(question), "Sending remote search");

        let response = self
            .client
            .post(&url)
            .json(&QaRequest { question })
            .send()
            .map_err(|e| SearchError::Request {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "Search endpoint returned an error status");
            return Err(SearchError::Status { url, status });
        }

        let reply: QaReply = response.json().map_err(|e| SearchError::Decode {
            url: url.clone(),
            source: e,
        })?;

        let results = profiles_from_results(reply.results.unwrap_or_default());
        tracing::debug!(results = results.len(), "Remote search complete");
        Ok(results)
    }

    fn is_remote(&self) -> bool {
        true
    }
}

/// Keep the result elements that decode as firm profiles, in response order.
fn profiles_from_results(values: Vec<serde_json::Value>) -> Vec<FirmProfile> {
    let total = values.len();
    let profiles: Vec<FirmProfile> = values
        .into_iter()
        .filter_map(|v| match serde_json::from_value::<FirmProfile>(v) {
            Ok(p) => Some(p),
            Err(e) => {
                tracing::debug!(error = %e, "Skipping search result that is not a firm profile");
                None
            }
        })
        .collect();

    if profiles.len() < total {
        tracing::debug!(
            kept = profiles.len(),
            skipped = total - profiles.len(),
            "Remote search returned non-profile elements"
        );
    }
    profiles
}
