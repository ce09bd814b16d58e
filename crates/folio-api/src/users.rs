use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::info;

use folio_store::StoreError;
use folio_types::api::{RegisterRequest, UserCreatedResponse, UserResponse};
use folio_types::models::NewUser;

use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::extract::ValidatedJson;

const REGISTER_FAILED: &str = "Failed to register user";

pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> ApiResult<impl IntoResponse> {
    // Cheap check first so a taken name doesn't cost a hash
    if state
        .store
        .get_user_by_username(&req.username)
        .map_err(ApiError::internal(REGISTER_FAILED))?
        .is_some()
    {
        return Err(ApiError::Conflict("Username already taken"));
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(req.password.as_bytes(), &salt)
        .map_err(|e| ApiError::Hashing(e.to_string()))?
        .to_string();

    let user = state
        .store
        .create_user(NewUser {
            username: req.username,
            password: password_hash,
        })
        .map_err(|e| match e {
            StoreError::UsernameTaken(_) => ApiError::Conflict("Username already taken"),
            other => ApiError::internal(REGISTER_FAILED)(other),
        })?;

    info!(id = user.id, username = %user.username, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(UserCreatedResponse {
            success: true,
            user: UserResponse::from(&user),
        }),
    ))
}

pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path(id) = id.map_err(|e| ApiError::InvalidId(e.body_text()))?;

    let user = state
        .store
        .get_user(id)
        .map_err(ApiError::internal("Failed to fetch user"))?
        .ok_or(ApiError::NotFound("User not found"))?;

    Ok(Json(UserResponse::from(&user)))
}
