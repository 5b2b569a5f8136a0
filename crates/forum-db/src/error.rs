use thiserror::Error;

pub type Result<T> = std::result::Result<T, DbError>;

#[derive(Debug, Error)]
pub enum DbError {
    /// `create` called on an entity that already has an id.
    #[error("{0} already in database")]
    AlreadyPersisted(String),

    /// `update` called on an entity that was never saved.
    #[error("{0} not in database")]
    NotPersisted(String),

    /// Anything the store reports, including rows that fail to decode.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
