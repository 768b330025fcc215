use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegisterError {
    #[error("malformed multipart form")]
    MalformedForm,

    #[error("missing required field {0}")]
    MissingField(&'static str),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("password must be at least 8 characters long, contain at least one uppercase letter and one special character.")]
    InvalidPassword,

    #[error("Login id {0} is already taken.")]
    LoginIdTaken(String),

    #[error("Email {0} is already in use.")]
    EmailTaken(String),

    #[error("Nickname {0} is already in use.")]
    NicknameTaken(String),

    #[error("Failed to store profile image.")]
    ImageStoreError,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for RegisterError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            RegisterError::MalformedForm => StatusCode::BAD_REQUEST,
            RegisterError::MissingField(_) => StatusCode::BAD_REQUEST,
            RegisterError::InvalidEmail => StatusCode::UNPROCESSABLE_ENTITY,
            RegisterError::InvalidPassword => StatusCode::UNPROCESSABLE_ENTITY,
            RegisterError::LoginIdTaken(_) => StatusCode::CONFLICT,
            RegisterError::EmailTaken(_) => StatusCode::CONFLICT,
            RegisterError::NicknameTaken(_) => StatusCode::CONFLICT,
            RegisterError::ImageStoreError => StatusCode::INTERNAL_SERVER_ERROR,
            RegisterError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
