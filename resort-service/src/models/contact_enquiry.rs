use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{new_record_id, Record, RecordKind};

/// General contact-form enquiry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactEnquiry {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewContactEnquiry {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl ContactEnquiry {
    pub fn new(input: NewContactEnquiry) -> Self {
        Self {
            id: new_record_id(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            subject: input.subject,
            message: input.message,
            created_at: Utc::now(),
        }
    }
}

impl Record for ContactEnquiry {
    const KIND: RecordKind = RecordKind::ContactEnquiry;
    const TIMESTAMP_FIELD: &'static str = "created_at";

    fn id(&self) -> &str {
        &self.id
    }
}
