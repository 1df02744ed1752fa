pub mod enquiries;
pub mod health;
pub mod root;
pub mod status;

pub use enquiries::{
    create_contact_enquiry, create_event_enquiry, list_contact_enquiries, list_event_enquiries,
};
pub use health::{health_check, metrics_endpoint, readiness_check};
pub use root::{fallback, root};
pub use status::{create_status_check, list_status_checks};
