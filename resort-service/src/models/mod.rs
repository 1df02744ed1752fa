//! Stored record shapes and the collection each one lives in.

pub mod contact_enquiry;
pub mod event_enquiry;
pub mod status_check;
pub mod timestamp;

pub use contact_enquiry::ContactEnquiry;
pub use event_enquiry::EventEnquiry;
pub use status_check::StatusCheck;
pub use timestamp::{normalize_timestamp, TimestampError};

use serde::{de::DeserializeOwned, Serialize};

/// Kind of record persisted by the service. Each kind maps to exactly one
/// collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    StatusCheck,
    EventEnquiry,
    ContactEnquiry,
}

impl RecordKind {
    pub const ALL: [RecordKind; 3] = [
        RecordKind::StatusCheck,
        RecordKind::EventEnquiry,
        RecordKind::ContactEnquiry,
    ];

    pub fn collection_name(&self) -> &'static str {
        match self {
            RecordKind::StatusCheck => "status_checks",
            RecordKind::EventEnquiry => "event_enquiries",
            RecordKind::ContactEnquiry => "contact_enquiries",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.collection_name())
    }
}

/// A stored record: the caller's fields plus a server-generated id and
/// creation timestamp.
pub trait Record: Serialize + DeserializeOwned + Send + Sync + 'static {
    const KIND: RecordKind;

    /// Name of the server-generated creation timestamp field.
    const TIMESTAMP_FIELD: &'static str;

    fn id(&self) -> &str;
}

pub(crate) fn new_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
