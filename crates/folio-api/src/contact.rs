use axum::{Json, extract::State, response::IntoResponse};
use tracing::info;

use folio_types::api::{ContactCreatedResponse, InsertContactMessage};

use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::extract::ValidatedJson;

pub async fn create_message(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<InsertContactMessage>,
) -> ApiResult<impl IntoResponse> {
    let message = state
        .store
        .create_contact_message(req)
        .map_err(ApiError::internal("Failed to send message. Please try again."))?;

    let total = state
        .store
        .contact_message_count()
        .map_err(ApiError::internal("Failed to send message. Please try again."))?;
    info!(id = message.id, total, "Contact message received");

    Ok(Json(ContactCreatedResponse {
        success: true,
        message: "Message sent successfully!".to_string(),
        id: message.id,
    }))
}

/// Every message, newest first. Unauthenticated; the site has no admin login.
pub async fn list_messages(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let messages = state
        .store
        .get_contact_messages()
        .map_err(ApiError::internal("Failed to fetch messages"))?;

    Ok(Json(messages))
}
