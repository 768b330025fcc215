use axum::extract::State;
use axum::http::HeaderMap;
use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app_state::AppState;
use crate::domain::MessageResponse;
use crate::errors::LogoutError;
use crate::services::token_service::extract_bearer;
use crate::services::CurrentUser;

// Requiring `CurrentUser` means the gate already verified the token and
// confirmed it is not yet revoked; all that is left is the store write.
pub async fn logout(
    State(state): State<AppState>,
    _current: CurrentUser,
    headers: HeaderMap,
) -> Result<impl IntoResponse, LogoutError> {
    let token = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(extract_bearer)
        .ok_or(LogoutError::MissingToken)?;

    state.token_service.revoke(token).await.map_err(|e| {
        log::error!("logout failed to revoke token: {}", e);
        LogoutError::InternalServerError
    })?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "Logged out successfully".to_string(),
        }),
    ))
}
