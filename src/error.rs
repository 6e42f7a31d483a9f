use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("No enemy at position {index} (roster holds {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RosterError>;
