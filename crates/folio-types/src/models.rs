use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored user. `password` holds whatever the caller put there; the API layer
/// only ever stores an Argon2 hash. Not serializable so it can't leak into a
/// response by accident.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub username: String,
    pub password: String,
}

/// Input to `Store::create_user`.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: u32,
    pub name: String,
    pub email: String,
    /// `None` when the sender left the subject out (or sent it blank).
    pub subject: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerType {
    Pomodoro,
    Regular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Meadow,
    Forest,
    Rainy,
    City,
    Library,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    pub id: u32,
    pub timer_type: TimerType,
    pub duration: u32,
    pub theme: Theme,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}
