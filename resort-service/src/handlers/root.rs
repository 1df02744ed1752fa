use axum::{http::Uri, Json};
use service_core::error::AppError;

use crate::dtos::RootResponse;

pub const ROOT_MESSAGE: &str = "Silver Stone Park Resort API";

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: ROOT_MESSAGE.to_string(),
    })
}

pub async fn fallback(uri: Uri) -> AppError {
    AppError::NotFound(anyhow::anyhow!("No route for {}", uri.path()))
}
