pub mod metrics;
pub mod records;
pub mod store;

pub use metrics::{get_metrics, init_metrics, record_created};
pub use records::{create_record, list_records, LIST_LIMIT};
pub use store::{InMemoryStore, MongoStore, RecordStore};
