use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("malformed multipart form")]
    MalformedForm,

    #[error("You are not allowed to perform this action.")]
    Forbidden,

    #[error("invalid email address")]
    InvalidEmail,

    #[error("Email {0} is already in use.")]
    EmailTaken(String),

    #[error("Nickname {0} is already in use.")]
    NicknameTaken(String),

    #[error("No account found for this identity.")]
    UserNotFound,

    #[error("Failed to store profile image.")]
    ImageStoreError,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for UpdateError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            UpdateError::MalformedForm => StatusCode::BAD_REQUEST,
            UpdateError::Forbidden => StatusCode::FORBIDDEN,
            UpdateError::InvalidEmail => StatusCode::UNPROCESSABLE_ENTITY,
            UpdateError::EmailTaken(_) => StatusCode::CONFLICT,
            UpdateError::NicknameTaken(_) => StatusCode::CONFLICT,
            UpdateError::UserNotFound => StatusCode::NOT_FOUND,
            UpdateError::ImageStoreError => StatusCode::INTERNAL_SERVER_ERROR,
            UpdateError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
