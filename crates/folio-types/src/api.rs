use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{StudySession, Theme, TimerType, User};

// -- Contact --

/// Unknown keys are dropped rather than rejected.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InsertContactMessage {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(max = 200))]
    pub subject: Option<String>,
    #[validate(length(min = 1, max = 5000, message = "Message is required"))]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ContactCreatedResponse {
    pub success: bool,
    pub message: String,
    pub id: u32,
}

// -- Study sessions --

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InsertStudySession {
    pub timer_type: TimerType,
    #[validate(range(min = 1, message = "Duration must be positive"))]
    pub duration: u32,
    pub theme: Theme,
    pub completed: Option<bool>,
}

/// Fields of a study session a client may change. `id` and `createdAt` are
/// deliberately absent, so a body naming them fails to deserialize.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StudySessionPatch {
    pub timer_type: Option<TimerType>,
    #[validate(range(min = 1, message = "Duration must be positive"))]
    pub duration: Option<u32>,
    pub theme: Option<Theme>,
    pub completed: Option<bool>,
}

impl StudySessionPatch {
    /// Overwrite the provided fields on `session`, leaving the rest as they were.
    pub fn apply(self, session: &mut StudySession) {
        if let Some(timer_type) = self.timer_type {
            session.timer_type = timer_type;
        }
        if let Some(duration) = self.duration {
            session.duration = duration;
        }
        if let Some(theme) = self.theme {
            session.theme = theme;
        }
        if let Some(completed) = self.completed {
            session.completed = completed;
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StudySessionResponse {
    pub success: bool,
    pub session: StudySession,
}

// -- Users --

#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 32))]
    pub username: String,
    #[validate(length(min = 8))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: u32,
    pub username: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserCreatedResponse {
    pub success: bool,
    pub user: UserResponse,
}

// -- Errors --

/// Body of every non-2xx response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: None,
        }
    }
}
