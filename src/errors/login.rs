use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoginError {
    #[error("No account found for login id {0}.")]
    UserNotFound(String),

    #[error("Password does not match.")]
    InvalidCredentials,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for LoginError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            LoginError::UserNotFound(_) => StatusCode::UNAUTHORIZED,
            LoginError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            LoginError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
