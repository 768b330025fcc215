use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AuthError {
    // Distinct wording from invalid-credentials failures so clients know
    // to log in again rather than question their credentials.
    #[error("Session ended, please log in again.")]
    SessionEnded,

    #[error("Could not confirm session status, please try again later.")]
    RevocationStoreUnavailable,

    #[error("Authentication required.")]
    AuthenticationRequired,

    #[error("You are not allowed to perform this action.")]
    Forbidden,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            AuthError::SessionEnded => StatusCode::UNAUTHORIZED,
            AuthError::RevocationStoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AuthError::AuthenticationRequired => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden => StatusCode::FORBIDDEN,
        };

        (status, self.to_string()).into_response()
    }
}
