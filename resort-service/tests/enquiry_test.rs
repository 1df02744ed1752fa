mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use common::{assert_same_record, contact_payload, wedding_payload, TestApp};
use resort_service::models::RecordKind;
use serde_json::json;

#[tokio::test]
async fn contact_enquiry_round_trip() {
    let app = TestApp::new();
    let payload = contact_payload();

    let (status, created) = app.post_json("/api/enquiries/contact", &payload).await;

    assert_eq!(status, StatusCode::OK);
    for field in ["name", "email", "phone", "subject", "message"] {
        assert_eq!(created[field], payload[field], "field {} changed", field);
    }
    assert!(created["id"].is_string());
    assert!(created["created_at"]
        .as_str()
        .unwrap()
        .parse::<DateTime<Utc>>()
        .is_ok());

    let (status, listed) = app.get("/api/enquiries/contact").await;
    assert_eq!(status, StatusCode::OK);
    let matching: Vec<_> = listed
        .as_array()
        .unwrap()
        .iter()
        .filter(|e| e["id"] == created["id"])
        .collect();
    assert_eq!(matching.len(), 1);
    assert_same_record(matching[0], &created, "created_at");
}

#[tokio::test]
async fn contact_enquiry_phone_is_optional() {
    let app = TestApp::new();
    let mut payload = contact_payload();
    payload.as_object_mut().unwrap().remove("phone");

    let (status, created) = app.post_json("/api/enquiries/contact", &payload).await;

    assert_eq!(status, StatusCode::OK);
    assert!(created["phone"].is_null());
}

#[tokio::test]
async fn contact_enquiry_with_invalid_email_is_rejected() {
    let app = TestApp::new();
    let mut payload = contact_payload();
    payload["email"] = json!("john-at-example.com");

    let (status, body) = app.post_json("/api/enquiries/contact", &payload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Validation error");
    assert!(body["details"].as_str().unwrap().contains("email"));
    assert!(app.store.is_empty(RecordKind::ContactEnquiry));
}

#[tokio::test]
async fn contact_enquiry_with_undotted_or_local_domain_is_rejected() {
    let app = TestApp::new();

    for email in ["john@example", "john@localhost"] {
        let mut payload = contact_payload();
        payload["email"] = json!(email);

        let (status, body) = app.post_json("/api/enquiries/contact", &payload).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{} accepted", email);
        assert!(body["details"].as_str().unwrap().contains("email"));
    }
    assert!(app.store.is_empty(RecordKind::ContactEnquiry));
}

#[tokio::test]
async fn event_enquiry_with_undotted_domain_is_rejected() {
    let app = TestApp::new();
    let mut payload = wedding_payload();
    payload["email"] = json!("john@example");

    let (status, _) = app.post_json("/api/enquiries/event", &payload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(app.store.is_empty(RecordKind::EventEnquiry));
}

#[tokio::test]
async fn contact_enquiry_missing_name_is_rejected() {
    let app = TestApp::new();
    let mut payload = contact_payload();
    payload.as_object_mut().unwrap().remove("name");

    let (status, _) = app.post_json("/api/enquiries/contact", &payload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(app.store.is_empty(RecordKind::ContactEnquiry));
}

#[tokio::test]
async fn event_enquiry_round_trip() {
    let app = TestApp::new();
    let payload = wedding_payload();

    let (status, created) = app.post_json("/api/enquiries/event", &payload).await;

    assert_eq!(status, StatusCode::OK);
    for field in [
        "name",
        "phone",
        "email",
        "event_type",
        "event_date",
        "guest_count",
        "message",
    ] {
        assert_eq!(created[field], payload[field], "field {} changed", field);
    }

    let (_, listed) = app.get("/api/enquiries/event").await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_same_record(&listed[0], &created, "created_at");
}

#[tokio::test]
async fn event_enquiry_without_optionals_stores_nulls() {
    let app = TestApp::new();
    let payload = json!({
        "name": "Corporate Manager",
        "phone": "+91 8888888888",
        "event_type": "Corporate Offsite",
        "event_date": "2025-06-15"
    });

    let (status, created) = app.post_json("/api/enquiries/event", &payload).await;

    assert_eq!(status, StatusCode::OK);
    assert!(created["guest_count"].is_null());
    assert!(created["message"].is_null());
    assert!(created["email"].is_null());

    let (_, listed) = app.get("/api/enquiries/event").await;
    assert!(listed[0]["guest_count"].is_null());
    assert!(listed[0]["message"].is_null());
}

#[tokio::test]
async fn event_enquiry_with_invalid_email_is_rejected() {
    let app = TestApp::new();
    let mut payload = wedding_payload();
    payload["email"] = json!("not an email");

    let (status, _) = app.post_json("/api/enquiries/event", &payload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(app.store.is_empty(RecordKind::EventEnquiry));
}

#[tokio::test]
async fn event_enquiry_missing_event_date_is_rejected() {
    let app = TestApp::new();
    let mut payload = wedding_payload();
    payload.as_object_mut().unwrap().remove("event_date");

    let (status, body) = app.post_json("/api/enquiries/event", &payload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("event_date"));
    assert!(app.store.is_empty(RecordKind::EventEnquiry));
}

#[tokio::test]
async fn duplicate_enquiries_are_all_kept() {
    let app = TestApp::new();

    app.post_json("/api/enquiries/contact", &contact_payload()).await;
    app.post_json("/api/enquiries/contact", &contact_payload()).await;

    let (_, listed) = app.get("/api/enquiries/contact").await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert_ne!(listed[0]["id"], listed[1]["id"]);
}

#[tokio::test]
async fn enquiry_collections_do_not_mix() {
    let app = TestApp::new();

    app.post_json("/api/enquiries/event", &wedding_payload()).await;

    let (_, contacts) = app.get("/api/enquiries/contact").await;
    assert_eq!(contacts, json!([]));
    assert_eq!(app.store.len(RecordKind::EventEnquiry), 1);
}

#[tokio::test]
async fn store_failure_surfaces_as_server_error() {
    use resort_service::services::RecordStore;

    let app = TestApp::new();
    app.store.shutdown().await;

    let (status, _) = app.post_json("/api/enquiries/contact", &contact_payload()).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, _) = app.get("/api/enquiries/contact").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}
