use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PasswordChangeError {
    #[error("Old password does not match.")]
    WrongOldPassword,

    #[error("new password must be at least 8 characters long, contain at least one uppercase letter and one special character.")]
    InvalidNewPassword,

    #[error("No account found for this identity.")]
    UserNotFound,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for PasswordChangeError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            PasswordChangeError::WrongOldPassword => StatusCode::UNAUTHORIZED,
            PasswordChangeError::InvalidNewPassword => StatusCode::UNPROCESSABLE_ENTITY,
            PasswordChangeError::UserNotFound => StatusCode::NOT_FOUND,
            PasswordChangeError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
