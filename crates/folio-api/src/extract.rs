use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use tracing::warn;
use validator::Validate;

use crate::error::ApiError;

/// JSON body that has been deserialized and then checked against its
/// `validator` rules. Handlers never see a payload that failed either step.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let uri = req.uri().clone();
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            warn!(%uri, "Rejected JSON body: {}", rejection.body_text());
            ApiError::Malformed(rejection.body_text())
        })?;

        value.validate()?;
        Ok(Self(value))
    }
}
