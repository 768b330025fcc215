use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum UserStoreError {
    #[error("user already exists")]
    UserAlreadyExists,

    #[error("user not found")]
    UserNotFound,

    #[error("invalid data in store: {0}")]
    InvalidData(String),

    #[error("database error: {0}")]
    DatabaseError(String),

    #[error("unexpected error")]
    UnexpectedError,
}
