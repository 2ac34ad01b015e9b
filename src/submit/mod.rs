// ABOUTME: Form submission client posting itinerary picks to a configured endpoint.
// ABOUTME: Every failure path is normalized into a typed result; it never errors out.

use serde::Serialize;
use std::time::Duration;

/// Returned when no endpoint is configured. Fixed text so callers can show it
/// verbatim in the form UI.
pub const UNCONFIGURED_MESSAGE: &str = "Form submission is not configured. \
    Set a submission endpoint in waypost.yml or WAYPOST_SUBMISSION_ENDPOINT.";

/// Fallback for non-2xx responses with no usable reason at all.
const STATUS_FALLBACK: &str = "request failed";

/// Fallback for network-level failures that carry no message.
const NETWORK_FALLBACK: &str = "an unexpected error occurred";

/// The JSON body POSTed to the endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionData<'a> {
    pub name: &'a str,
    pub destinations: &'a [String],
}

/// Normalized outcome of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub success: bool,
    pub error: Option<String>,
}

impl SubmissionResult {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}

/// Posts form submissions to the configured endpoint.
///
/// The endpoint is injected at construction time; this type never reads
/// ambient configuration, which keeps it substitutable in tests.
pub struct SubmissionClient {
    endpoint: Option<String>,
    client: reqwest::Client,
}

impl SubmissionClient {
    pub fn new(endpoint: Option<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");
        Self { endpoint, client }
    }

    /// Submit a name and destination picks.
    ///
    /// Unconfigured endpoint: fixed failure message, no network call.
    /// Non-2xx: the error body's nested message, falling back to status text.
    /// Network failure: the underlying error's message.
    pub async fn submit(&self, name: &str, destinations: &[String]) -> SubmissionResult {
        let Some(endpoint) = self.endpoint.as_deref() else {
            tracing::error!("submission endpoint is not configured, form submissions are disabled");
            return SubmissionResult::failed(UNCONFIGURED_MESSAGE);
        };

        let data = SubmissionData { name, destinations };

        let response = match self.client.post(endpoint).json(&data).send().await {
            Ok(response) => response,
            Err(e) => {
                let message = e.to_string();
                let message = if message.is_empty() {
                    NETWORK_FALLBACK.to_string()
                } else {
                    message
                };
                tracing::warn!("submission request failed: {message}");
                return SubmissionResult::failed(message);
            }
        };

        let status = response.status();
        if !status.is_success() {
            return SubmissionResult::failed(error_message(status, response).await);
        }

        SubmissionResult::ok()
    }
}

/// Extract `error.message` from a JSON error body, falling back to the HTTP
/// status text when the body is unparseable or the field is absent.
async fn error_message(status: reqwest::StatusCode, response: reqwest::Response) -> String {
    let status_text = status
        .canonical_reason()
        .unwrap_or(STATUS_FALLBACK)
        .to_string();

    let Ok(body) = response.json::<serde_json::Value>().await else {
        return status_text;
    };

    body.get("error")
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
        .map(str::to_string)
        .unwrap_or(status_text)
}
