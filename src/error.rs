use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("email already registered")]
    DuplicateEmail,

    #[error("invalid credentials")]
    AuthRejected,

    #[error("password hash error: {0}")]
    PasswordHash(String),

    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
