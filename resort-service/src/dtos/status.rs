use serde::Deserialize;
use validator::Validate;

use crate::models::StatusCheck;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateStatusCheckRequest {
    pub client_name: String,
}

impl From<CreateStatusCheckRequest> for StatusCheck {
    fn from(request: CreateStatusCheckRequest) -> Self {
        StatusCheck::new(request.client_name)
    }
}
