use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogoutError {
    #[error("Token not provided")]
    MissingToken,

    // Revocation failed, so the logout did NOT happen; the token is still
    // usable and the client must not be told otherwise.
    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for LogoutError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            LogoutError::MissingToken => StatusCode::BAD_REQUEST,
            LogoutError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
