pub mod enquiries;
pub mod status;

pub use enquiries::{CreateContactEnquiryRequest, CreateEventEnquiryRequest};
pub use status::CreateStatusCheckRequest;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
}
