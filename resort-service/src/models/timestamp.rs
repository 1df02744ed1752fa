//! Read-path normalisation of stored creation timestamps.
//!
//! Records are written with their timestamp as an ISO-8601 string, but older
//! documents may hold a native BSON datetime. Both are accepted on read and
//! rewritten to canonical RFC 3339 so the record deserialises uniformly.
//! Anything else is a data-integrity fault.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use mongodb::bson::{Bson, Document};
use service_core::error::AppError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TimestampError {
    #[error("stored document has no `{0}` field")]
    Missing(String),

    #[error("stored `{field}` has unsupported type {element_type}")]
    UnsupportedType { field: String, element_type: String },

    #[error("stored `{field}` is not an ISO-8601 datetime: {value:?}")]
    Unparsable { field: String, value: String },
}

impl From<TimestampError> for AppError {
    fn from(err: TimestampError) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

pub fn parse_iso8601(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    // Naive values carry no offset and are taken as UTC.
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

pub fn format_iso8601(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Rewrite `field` of a stored document as a canonical RFC 3339 string.
pub fn normalize_timestamp(document: &mut Document, field: &str) -> Result<(), TimestampError> {
    let instant = match document.get(field) {
        None => return Err(TimestampError::Missing(field.to_string())),
        Some(Bson::String(value)) => {
            parse_iso8601(value).ok_or_else(|| TimestampError::Unparsable {
                field: field.to_string(),
                value: value.clone(),
            })?
        }
        Some(Bson::DateTime(value)) => value.to_chrono(),
        Some(other) => {
            return Err(TimestampError::UnsupportedType {
                field: field.to_string(),
                element_type: format!("{:?}", other.element_type()),
            })
        }
    };

    document.insert(field, format_iso8601(&instant));
    Ok(())
}
