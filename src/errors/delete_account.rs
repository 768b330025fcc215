use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeleteAccountError {
    #[error("Password does not match.")]
    InvalidCredentials,

    #[error("No account found for this identity.")]
    UserNotFound,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for DeleteAccountError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            DeleteAccountError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            DeleteAccountError::UserNotFound => StatusCode::NOT_FOUND,
            DeleteAccountError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
