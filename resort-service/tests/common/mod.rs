#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use resort_service::config::{CorsConfig, MongoConfig, ResortConfig};
use resort_service::services::{InMemoryStore, RecordStore};
use resort_service::{build_router, AppState};
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use tower::util::ServiceExt;

pub fn test_config(allowed_origins: Vec<String>) -> ResortConfig {
    ResortConfig {
        common: CoreConfig { port: 0 },
        mongodb: MongoConfig {
            uri: std::env::var("TEST_MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database: format!("resort_test_{}", uuid::Uuid::new_v4()),
        },
        cors: CorsConfig { allowed_origins },
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryStore>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_origins(vec!["*".to_string()])
    }

    pub fn with_origins(allowed_origins: Vec<String>) -> Self {
        let store = Arc::new(InMemoryStore::new());
        let state = AppState {
            config: test_config(allowed_origins),
            store: store.clone() as Arc<dyn RecordStore>,
        };

        TestApp {
            router: build_router(state),
            store,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Response body is not JSON")
        };
        (status, body)
    }

    pub async fn get(&self, path: &str) -> (StatusCode, serde_json::Value) {
        self.send(
            Request::builder()
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        self.post_raw(path, body.to_string()).await
    }

    pub async fn post_raw(&self, path: &str, body: String) -> (StatusCode, serde_json::Value) {
        self.send(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
    }
}

pub fn contact_payload() -> serde_json::Value {
    serde_json::json!({
        "name": "John Doe",
        "email": "john@example.com",
        "phone": "+91 7777777777",
        "subject": "General Inquiry",
        "message": "Interested in booking a room for vacation"
    })
}

pub fn wedding_payload() -> serde_json::Value {
    serde_json::json!({
        "name": "Test Bride & Groom",
        "phone": "+91 9999999999",
        "email": "test@example.com",
        "event_type": "Wedding",
        "event_date": "2025-12-25",
        "guest_count": "200-300",
        "message": "Looking for a grand wedding venue"
    })
}

/// Compare two serialized records, treating the timestamp field as an instant
/// rather than as text.
pub fn assert_same_record(
    left: &serde_json::Value,
    right: &serde_json::Value,
    timestamp_field: &str,
) {
    let parse = |v: &serde_json::Value| {
        v[timestamp_field]
            .as_str()
            .expect("timestamp is not a string")
            .parse::<chrono::DateTime<chrono::Utc>>()
            .expect("timestamp is not RFC 3339")
    };
    assert_eq!(parse(left), parse(right));

    let strip = |v: &serde_json::Value| {
        let mut v = v.clone();
        v.as_object_mut()
            .expect("record is not an object")
            .remove(timestamp_field);
        v
    };
    assert_eq!(strip(left), strip(right));
}
