use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::{AppState, contact, study_sessions, users};

/// All JSON endpoints, mounted under `/api`.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/contact", post(contact::create_message).get(contact::list_messages))
        .route(
            "/study-sessions",
            post(study_sessions::create_session).get(study_sessions::list_sessions),
        )
        .route("/study-sessions/{id}", patch(study_sessions::update_session))
        .route("/users", post(users::register))
        .route("/users/{id}", get(users::get_user))
        .with_state(state);

    Router::new().nest("/api", api)
}
