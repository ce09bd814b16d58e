use chrono::Utc;
use folio_types::api::{InsertContactMessage, InsertStudySession, StudySessionPatch};
use folio_types::models::{ContactMessage, NewUser, StudySession, User};
use tracing::debug;

use crate::{Store, StoreError, StoreResult, claim_id};

impl Store {
    // -- Users --

    pub fn get_user(&self, id: u32) -> StoreResult<Option<User>> {
        self.with_collections(|c| Ok(c.users.get(&id).cloned()))
    }

    pub fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        self.with_collections(|c| {
            Ok(c.users.values().find(|u| u.username == username).cloned())
        })
    }

    /// Insert a user. Fails with `UsernameTaken` if the name is already in
    /// use; the id counter is left untouched in that case.
    pub fn create_user(&self, new: NewUser) -> StoreResult<User> {
        self.with_collections(|c| {
            if c.users.values().any(|u| u.username == new.username) {
                return Err(StoreError::UsernameTaken(new.username));
            }

            let id = claim_id(&mut c.next_user_id, "users")?;

            let user = User {
                id,
                username: new.username,
                password: new.password,
            };
            c.users.insert(id, user.clone());
            debug!(user_id = id, "user created");
            Ok(user)
        })
    }

    // -- Contact messages --

    pub fn create_contact_message(&self, new: InsertContactMessage) -> StoreResult<ContactMessage> {
        self.with_collections(|c| {
            let id = claim_id(&mut c.next_message_id, "contact messages")?;

            let message = ContactMessage {
                id,
                name: new.name,
                email: new.email,
                // Blank and missing both mean "no subject"
                subject: new.subject.filter(|s| !s.is_empty()),
                message: new.message,
                created_at: Utc::now(),
            };
            c.contact_messages.insert(id, message.clone());
            debug!(message_id = id, "contact message stored");
            Ok(message)
        })
    }

    /// All messages, newest first.
    pub fn get_contact_messages(&self) -> StoreResult<Vec<ContactMessage>> {
        self.with_collections(|c| {
            let mut messages: Vec<ContactMessage> = c.contact_messages.values().cloned().collect();
            messages.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
            Ok(messages)
        })
    }

    pub fn contact_message_count(&self) -> StoreResult<usize> {
        self.with_collections(|c| Ok(c.contact_messages.len()))
    }

    // -- Study sessions --

    pub fn create_study_session(&self, new: InsertStudySession) -> StoreResult<StudySession> {
        self.with_collections(|c| {
            let id = claim_id(&mut c.next_session_id, "study sessions")?;

            let session = StudySession {
                id,
                timer_type: new.timer_type,
                duration: new.duration,
                theme: new.theme,
                completed: new.completed.unwrap_or(false),
                created_at: Utc::now(),
            };
            c.study_sessions.insert(id, session.clone());
            debug!(session_id = id, "study session stored");
            Ok(session)
        })
    }

    /// All sessions, newest first.
    pub fn get_study_sessions(&self) -> StoreResult<Vec<StudySession>> {
        self.with_collections(|c| {
            let mut sessions: Vec<StudySession> = c.study_sessions.values().cloned().collect();
            sessions.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
            Ok(sessions)
        })
    }

    /// Apply `patch` to the session with `id`. Returns `Ok(None)` and changes
    /// nothing when there is no such session.
    pub fn update_study_session(
        &self,
        id: u32,
        patch: StudySessionPatch,
    ) -> StoreResult<Option<StudySession>> {
        self.with_collections(|c| {
            let Some(session) = c.study_sessions.get_mut(&id) else {
                return Ok(None);
            };
            patch.apply(session);
            Ok(Some(session.clone()))
        })
    }

    pub fn study_session_count(&self) -> StoreResult<usize> {
        self.with_collections(|c| Ok(c.study_sessions.len()))
    }
}
