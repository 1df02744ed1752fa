use crate::models::RecordKind;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson, Document},
    options::FindOptions,
    Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Document store used by the handlers. One collection per [`RecordKind`].
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn insert(&self, kind: RecordKind, document: Document) -> Result<(), AppError>;

    async fn find(
        &self,
        kind: RecordKind,
        filter: Document,
        projection: Option<Document>,
        limit: i64,
    ) -> Result<Vec<Document>, AppError>;

    async fn health_check(&self) -> Result<(), AppError>;

    /// Close the underlying connection. Only the first call has any effect;
    /// every operation after it fails with `ServiceUnavailable`.
    async fn shutdown(&self);
}

#[derive(Clone)]
pub struct MongoStore {
    client: MongoClient,
    db: Database,
    closed: Arc<AtomicBool>,
}

impl MongoStore {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self {
            client,
            db,
            closed: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn collection(&self, kind: RecordKind) -> Collection<Document> {
        self.db.collection(kind.collection_name())
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    fn ensure_open(&self) -> Result<(), AppError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(AppError::ServiceUnavailable);
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for MongoStore {
    async fn insert(&self, kind: RecordKind, document: Document) -> Result<(), AppError> {
        self.ensure_open()?;
        self.collection(kind)
            .insert_one(document, None)
            .await
            .map_err(|e| {
                tracing::error!(collection = %kind, "Failed to insert document: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    async fn find(
        &self,
        kind: RecordKind,
        filter: Document,
        projection: Option<Document>,
        limit: i64,
    ) -> Result<Vec<Document>, AppError> {
        self.ensure_open()?;

        let mut find_options = FindOptions::builder().limit(limit).build();
        find_options.projection = projection;

        let cursor = self
            .collection(kind)
            .find(filter, find_options)
            .await
            .map_err(|e| {
                tracing::error!(collection = %kind, "Failed to query documents: {}", e);
                AppError::from(e)
            })?;

        cursor.try_collect().await.map_err(|e| {
            tracing::error!(collection = %kind, "Failed to collect documents: {}", e);
            AppError::from(e)
        })
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.ensure_open()?;
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    async fn shutdown(&self) {
        if self.closed.swap(true, Ordering::AcqRel) {
            return;
        }
        tracing::info!("Closing MongoDB connection");
        self.client.clone().shutdown().await;
    }
}

/// Process-local store with the same observable behaviour as [`MongoStore`]
/// for the operations the service uses. Used by tests.
#[derive(Default)]
pub struct InMemoryStore {
    collections: Mutex<HashMap<RecordKind, Vec<Document>>>,
    closed: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents held for `kind`.
    pub fn len(&self, kind: RecordKind) -> usize {
        self.collections
            .lock()
            .map(|c| c.get(&kind).map_or(0, Vec::len))
            .unwrap_or(0)
    }

    pub fn is_empty(&self, kind: RecordKind) -> bool {
        self.len(kind) == 0
    }

    fn ensure_open(&self) -> Result<(), AppError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(AppError::ServiceUnavailable);
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn insert(&self, kind: RecordKind, mut document: Document) -> Result<(), AppError> {
        self.ensure_open()?;
        if !document.contains_key("_id") {
            document.insert("_id", ObjectId::new());
        }
        self.collections
            .lock()
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("store mutex poisoned: {}", e)))?
            .entry(kind)
            .or_default()
            .push(document);
        Ok(())
    }

    async fn find(
        &self,
        kind: RecordKind,
        filter: Document,
        projection: Option<Document>,
        limit: i64,
    ) -> Result<Vec<Document>, AppError> {
        self.ensure_open()?;
        let collections = self
            .collections
            .lock()
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("store mutex poisoned: {}", e)))?;

        let Some(documents) = collections.get(&kind) else {
            return Ok(Vec::new());
        };

        // Mongo treats a limit of 0 as "no limit"; negative values cap a single batch.
        let cap = match limit {
            0 => usize::MAX,
            n => n.unsigned_abs() as usize,
        };

        Ok(documents
            .iter()
            .filter(|d| matches_filter(d, &filter))
            .take(cap)
            .map(|d| apply_projection(d, projection.as_ref()))
            .collect())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.ensure_open()
    }

    async fn shutdown(&self) {
        self.closed.store(true, Ordering::Release);
    }
}

fn matches_filter(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

fn is_truthy(value: &Bson) -> bool {
    match value {
        Bson::Boolean(b) => *b,
        Bson::Int32(n) => *n != 0,
        Bson::Int64(n) => *n != 0,
        Bson::Double(n) => *n != 0.0,
        _ => true,
    }
}

fn apply_projection(document: &Document, projection: Option<&Document>) -> Document {
    let Some(projection) = projection.filter(|p| !p.is_empty()) else {
        return document.clone();
    };

    let inclusive = projection
        .iter()
        .any(|(key, value)| key != "_id" && is_truthy(value));

    if inclusive {
        let keep_id = projection.get("_id").map_or(true, is_truthy);
        document
            .iter()
            .filter(|(key, _)| {
                (key.as_str() == "_id" && keep_id)
                    || projection.get(key.as_str()).is_some_and(is_truthy)
            })
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    } else {
        document
            .iter()
            .filter(|(key, _)| !projection.contains_key(key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}
