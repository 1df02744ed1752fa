use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{new_record_id, Record, RecordKind};

/// Wedding, corporate offsite or other event booking enquiry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventEnquiry {
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    pub event_type: String,
    pub event_date: String,
    #[serde(default)]
    pub guest_count: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub struct NewEventEnquiry {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub event_type: String,
    pub event_date: String,
    pub guest_count: Option<String>,
    pub message: Option<String>,
}

impl EventEnquiry {
    pub fn new(input: NewEventEnquiry) -> Self {
        Self {
            id: new_record_id(),
            name: input.name,
            phone: input.phone,
            email: input.email,
            event_type: input.event_type,
            event_date: input.event_date,
            guest_count: input.guest_count,
            message: input.message,
            created_at: Utc::now(),
        }
    }
}

impl Record for EventEnquiry {
    const KIND: RecordKind = RecordKind::EventEnquiry;
    const TIMESTAMP_FIELD: &'static str = "created_at";

    fn id(&self) -> &str {
        &self.id
    }
}
