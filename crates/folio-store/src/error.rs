use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A thread panicked while holding the store lock.
    #[error("store lock poisoned")]
    Poisoned,

    /// An id counter has reached `u32::MAX`.
    #[error("no ids left for {0}")]
    IdsExhausted(&'static str),

    #[error("username already taken: {0}")]
    UsernameTaken(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
