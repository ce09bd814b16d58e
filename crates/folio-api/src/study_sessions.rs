use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::IntoResponse,
};
use tracing::{debug, info};

use folio_types::api::{InsertStudySession, StudySessionPatch, StudySessionResponse};

use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::extract::ValidatedJson;

pub async fn create_session(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<InsertStudySession>,
) -> ApiResult<impl IntoResponse> {
    let session = state
        .store
        .create_study_session(req)
        .map_err(ApiError::internal("Failed to create study session"))?;

    let total = state
        .store
        .study_session_count()
        .map_err(ApiError::internal("Failed to create study session"))?;
    info!(id = session.id, timer = ?session.timer_type, total, "Study session started");

    Ok(Json(StudySessionResponse { success: true, session }))
}

pub async fn list_sessions(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let sessions = state
        .store
        .get_study_sessions()
        .map_err(ApiError::internal("Failed to fetch study sessions"))?;

    Ok(Json(sessions))
}

pub async fn update_session(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
    ValidatedJson(patch): ValidatedJson<StudySessionPatch>,
) -> ApiResult<impl IntoResponse> {
    let Path(id) = id.map_err(|e| ApiError::InvalidId(e.body_text()))?;

    let session = state
        .store
        .update_study_session(id, patch)
        .map_err(ApiError::internal("Failed to update study session"))?
        .ok_or(ApiError::NotFound("Study session not found"))?;

    debug!(id, completed = session.completed, "Study session updated");

    Ok(Json(StudySessionResponse { success: true, session }))
}
