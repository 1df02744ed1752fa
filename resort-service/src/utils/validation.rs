use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use service_core::error::AppError;
use validator::Validate;

/// JSON body extractor that runs the payload's `validator` rules before the
/// handler sees it. Every rejection is an `AppError`, so failures render as
/// JSON error bodies.
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    let message = rejection.body_text();
    match rejection {
        JsonRejection::JsonDataError(_) => {
            AppError::UnprocessableEntity(anyhow::anyhow!(message))
        }
        JsonRejection::MissingJsonContentType(_) => {
            AppError::UnsupportedMediaType(anyhow::anyhow!(message))
        }
        _ => AppError::BadRequest(anyhow::anyhow!(message)),
    }
}
