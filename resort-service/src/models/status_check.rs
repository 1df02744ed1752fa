use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{new_record_id, Record, RecordKind};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    pub fn new(client_name: String) -> Self {
        Self {
            id: new_record_id(),
            client_name,
            timestamp: Utc::now(),
        }
    }
}

impl Record for StatusCheck {
    const KIND: RecordKind = RecordKind::StatusCheck;
    const TIMESTAMP_FIELD: &'static str = "timestamp";

    fn id(&self) -> &str {
        &self.id
    }
}
