use thiserror::Error;

/// Errors surfaced by the storage layer.
///
/// Mutating an unknown id is deliberately NOT an error: stores treat it as a
/// silent no-op, so the only failures worth representing come from the
/// backend itself.
#[derive(Error, Debug)]
pub enum TickzError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, TickzError>;
