use axum::{extract::State, Json};
use service_core::error::AppError;

use crate::dtos::{CreateContactEnquiryRequest, CreateEventEnquiryRequest};
use crate::models::{ContactEnquiry, EventEnquiry};
use crate::services::{create_record, list_records};
use crate::startup::AppState;
use crate::utils::ValidatedJson;

#[tracing::instrument(skip(state, request))]
pub async fn create_event_enquiry(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateEventEnquiryRequest>,
) -> Result<Json<EventEnquiry>, AppError> {
    let enquiry = create_record(state.store.as_ref(), EventEnquiry::from(request)).await?;
    Ok(Json(enquiry))
}

#[tracing::instrument(skip(state))]
pub async fn list_event_enquiries(
    State(state): State<AppState>,
) -> Result<Json<Vec<EventEnquiry>>, AppError> {
    let enquiries = list_records(state.store.as_ref()).await?;
    Ok(Json(enquiries))
}

#[tracing::instrument(skip(state, request))]
pub async fn create_contact_enquiry(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateContactEnquiryRequest>,
) -> Result<Json<ContactEnquiry>, AppError> {
    let enquiry = create_record(state.store.as_ref(), ContactEnquiry::from(request)).await?;
    Ok(Json(enquiry))
}

#[tracing::instrument(skip(state))]
pub async fn list_contact_enquiries(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactEnquiry>>, AppError> {
    let enquiries = list_records(state.store.as_ref()).await?;
    Ok(Json(enquiries))
}
