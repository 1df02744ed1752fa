//! Black-box test harness for resort-service.
//!
//! Talks to a running instance over plain HTTP/JSON; nothing here links
//! against the service crate.
//!
//! ## Usage
//!
//! ```bash
//! # Point at a running service (defaults to http://localhost:8080)
//! export RESORT_API_URL=http://localhost:8080
//!
//! # Scripted check with a pass/fail tally
//! cargo run -p workflow-tests --bin resort-api-check
//!
//! # Integration tests
//! cargo test -p workflow-tests -- --ignored
//! ```

use anyhow::{anyhow, Result};
use chrono::Local;
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};
use std::sync::Once;
use std::time::Duration;
use thiserror::Error;

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,workflow_tests=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Base URL of the service under test, from `RESORT_API_URL`.
pub fn base_url_from_env() -> String {
    std::env::var("RESORT_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("expected status {expected}, got {actual}: {body}")]
    UnexpectedStatus {
        expected: StatusCode,
        actual: StatusCode,
        body: String,
    },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("response body is not JSON: {0}")]
    InvalidJson(String),
}

/// Thin JSON client for the resort API.
#[derive(Clone)]
pub struct ResortApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ResortApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(base_url_from_env())
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Send a request and return the status with the parsed JSON body
    /// (`Value::Null` for an empty body).
    pub async fn send(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<(StatusCode, Value), CheckError> {
        let mut request = self.http.request(method, self.url(endpoint));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        if text.is_empty() {
            return Ok((status, Value::Null));
        }
        let value = serde_json::from_str(&text).map_err(|_| CheckError::InvalidJson(text))?;
        Ok((status, value))
    }

    /// Like [`send`](Self::send) but fails unless the status matches.
    pub async fn expect(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
        expected: StatusCode,
    ) -> Result<Value, CheckError> {
        let (actual, value) = self.send(method, endpoint, body).await?;
        if actual != expected {
            return Err(CheckError::UnexpectedStatus {
                expected,
                actual,
                body: truncate(&value.to_string(), 200),
            });
        }
        Ok(value)
    }

    pub async fn get(&self, endpoint: &str) -> Result<Value, CheckError> {
        self.expect(Method::GET, endpoint, None, StatusCode::OK).await
    }

    pub async fn post(&self, endpoint: &str, body: &Value) -> Result<Value, CheckError> {
        self.expect(Method::POST, endpoint, Some(body), StatusCode::OK)
            .await
    }
}

pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// Poll `/health` until the service answers 200 or `timeout` elapses.
pub async fn wait_for_service(client: &ResortApiClient, timeout: Duration) -> Result<()> {
    let start = std::time::Instant::now();

    loop {
        match client.send(Method::GET, "health", None).await {
            Ok((status, _)) if status.is_success() => {
                tracing::info!("resort-service is healthy");
                return Ok(());
            }
            Ok((status, _)) => {
                tracing::debug!("resort-service not ready (status: {})", status);
            }
            Err(e) => {
                tracing::debug!("resort-service not reachable: {}", e);
            }
        }

        if start.elapsed() > timeout {
            return Err(anyhow!(
                "Timeout waiting for resort-service at {}",
                client.base_url
            ));
        }

        tokio::time::sleep(Duration::from_millis(500)).await;
    }
}

// Payloads used by both the integration tests and the scripted check.

pub fn status_check_payload() -> Value {
    json!({ "client_name": format!("test_client_{}", Local::now().format("%H%M%S")) })
}

pub fn wedding_enquiry_payload() -> Value {
    json!({
        "name": "Test Bride & Groom",
        "phone": "+91 9999999999",
        "email": "test@example.com",
        "event_type": "Wedding",
        "event_date": "2025-12-25",
        "guest_count": "200-300",
        "message": "Looking for a grand wedding venue"
    })
}

pub fn corporate_enquiry_payload() -> Value {
    json!({
        "name": "Corporate Manager",
        "phone": "+91 8888888888",
        "email": "corporate@company.com",
        "event_type": "Corporate Offsite",
        "event_date": "2025-06-15",
        "guest_count": "50-100",
        "message": "Need conference facilities for team offsite"
    })
}

pub fn contact_enquiry_payload() -> Value {
    json!({
        "name": "John Doe",
        "email": "john@example.com",
        "phone": "+91 7777777777",
        "subject": "General Inquiry",
        "message": "Interested in booking a room for vacation"
    })
}

/// Outcome of one scripted check.
#[derive(Debug)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub result: Result<Value, CheckError>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// Run the scripted sequence against the API: root, status checks, wedding
/// and corporate enquiries, contact enquiries.
pub async fn run_api_checks(client: &ResortApiClient) -> Vec<CheckOutcome> {
    let mut outcomes = Vec::new();

    macro_rules! check {
        ($name:expr, $call:expr) => {{
            let result = $call.await;
            match &result {
                Ok(_) => tracing::info!(check = $name, "passed"),
                Err(e) => tracing::warn!(check = $name, error = %e, "failed"),
            }
            outcomes.push(CheckOutcome {
                name: $name,
                result,
            });
        }};
    }

    check!("Root API", client.get("api/"));
    check!(
        "Create Status Check",
        client.post("api/status", &status_check_payload())
    );
    check!("Get Status Checks", client.get("api/status"));
    check!(
        "Wedding Enquiry",
        client.post("api/enquiries/event", &wedding_enquiry_payload())
    );
    check!("Get Event Enquiries", client.get("api/enquiries/event"));
    check!(
        "Corporate Enquiry",
        client.post("api/enquiries/event", &corporate_enquiry_payload())
    );
    check!(
        "Contact Enquiry",
        client.post("api/enquiries/contact", &contact_enquiry_payload())
    );
    check!("Get Contact Enquiries", client.get("api/enquiries/contact"));

    outcomes
}
