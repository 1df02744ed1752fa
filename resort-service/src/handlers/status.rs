use axum::{extract::State, Json};
use service_core::error::AppError;

use crate::dtos::CreateStatusCheckRequest;
use crate::models::StatusCheck;
use crate::services::{create_record, list_records};
use crate::startup::AppState;
use crate::utils::ValidatedJson;

#[tracing::instrument(skip(state, request))]
pub async fn create_status_check(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateStatusCheckRequest>,
) -> Result<Json<StatusCheck>, AppError> {
    let check = create_record(state.store.as_ref(), StatusCheck::from(request)).await?;
    Ok(Json(check))
}

#[tracing::instrument(skip(state))]
pub async fn list_status_checks(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusCheck>>, AppError> {
    let checks = list_records(state.store.as_ref()).await?;
    Ok(Json(checks))
}
