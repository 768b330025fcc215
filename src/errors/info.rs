use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InfoError {
    #[error("No user found for {0}.")]
    UserNotFound(String),

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for InfoError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            InfoError::UserNotFound(_) => StatusCode::NOT_FOUND,
            InfoError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
