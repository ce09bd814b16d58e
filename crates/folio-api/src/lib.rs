pub mod contact;
pub mod error;
pub mod extract;
pub mod routes;
pub mod study_sessions;
pub mod users;

use std::sync::Arc;

use folio_store::Store;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: Store,
}

impl AppStateInner {
    pub fn new(store: Store) -> AppState {
        Arc::new(Self { store })
    }
}
