//! Creation payloads for enquiries.
//!
//! Unknown fields (including any caller-supplied `id` or timestamp) are
//! ignored by deserialisation; required fields missing from the body are
//! rejected before validation runs.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::contact_enquiry::NewContactEnquiry;
use crate::models::event_enquiry::NewEventEnquiry;
use crate::models::{ContactEnquiry, EventEnquiry};

/// Rejects addresses the syntax rule lets through but that cannot be
/// delivered publicly: single-label domains and `localhost`.
fn validate_email_domain(email: &str) -> Result<(), ValidationError> {
    let domain = email
        .rsplit_once('@')
        .map(|(_, domain)| domain.trim_end_matches('.').to_ascii_lowercase())
        .unwrap_or_default();

    let dotted = domain.contains('.') && domain.split('.').all(|label| !label.is_empty());
    let local = domain == "localhost" || domain.ends_with(".localhost");

    if !dotted || local {
        let mut err = ValidationError::new("email_domain");
        err.message = Some("Email domain must be a public, dotted name".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateEventEnquiryRequest {
    pub name: String,
    pub phone: String,
    #[validate(
        email(message = "Invalid email address"),
        custom(function = "validate_email_domain")
    )]
    pub email: Option<String>,
    pub event_type: String,
    pub event_date: String,
    pub guest_count: Option<String>,
    pub message: Option<String>,
}

impl From<CreateEventEnquiryRequest> for EventEnquiry {
    fn from(request: CreateEventEnquiryRequest) -> Self {
        EventEnquiry::new(NewEventEnquiry {
            name: request.name,
            phone: request.phone,
            email: request.email,
            event_type: request.event_type,
            event_date: request.event_date,
            guest_count: request.guest_count,
            message: request.message,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateContactEnquiryRequest {
    pub name: String,
    #[validate(
        email(message = "Invalid email address"),
        custom(function = "validate_email_domain")
    )]
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl From<CreateContactEnquiryRequest> for ContactEnquiry {
    fn from(request: CreateContactEnquiryRequest) -> Self {
        ContactEnquiry::new(NewContactEnquiry {
            name: request.name,
            email: request.email,
            phone: request.phone,
            subject: request.subject,
            message: request.message,
        })
    }
}
