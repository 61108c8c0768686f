use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// A unique key rejected the insert; carries the conflicting field name.
    #[error("conflict on {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}
