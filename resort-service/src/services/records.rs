//! Create and list operations shared by every record kind.

use crate::models::{normalize_timestamp, Record};
use crate::services::{metrics, RecordStore};
use mongodb::bson::{self, doc};
use service_core::error::AppError;

/// Upper bound on the number of records returned by a listing.
pub const LIST_LIMIT: i64 = 1000;

/// Persist a freshly built record and hand it back unchanged.
///
/// The timestamp is stored as an ISO-8601 string (chrono's serde form).
pub async fn create_record<R: Record>(store: &dyn RecordStore, record: R) -> Result<R, AppError> {
    let document = bson::to_document(&record).map_err(|e| {
        tracing::error!(collection = %R::KIND, "Failed to encode record: {}", e);
        AppError::InternalError(anyhow::Error::new(e))
    })?;

    store.insert(R::KIND, document).await?;
    metrics::record_created(R::KIND);

    tracing::info!(collection = %R::KIND, id = %record.id(), "Record created");
    Ok(record)
}

/// All stored records of one kind, in store order, capped at [`LIST_LIMIT`].
pub async fn list_records<R: Record>(store: &dyn RecordStore) -> Result<Vec<R>, AppError> {
    let documents = store
        .find(R::KIND, doc! {}, Some(doc! { "_id": 0 }), LIST_LIMIT)
        .await?;

    documents
        .into_iter()
        .map(|mut document| {
            normalize_timestamp(&mut document, R::TIMESTAMP_FIELD).map_err(|e| {
                tracing::error!(collection = %R::KIND, "Malformed stored timestamp: {}", e);
                AppError::from(e)
            })?;
            bson::from_document::<R>(document).map_err(|e| {
                tracing::error!(collection = %R::KIND, "Failed to decode stored record: {}", e);
                AppError::InternalError(anyhow::Error::new(e))
            })
        })
        .collect()
}
