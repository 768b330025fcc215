use axum::extract::State;
use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app_state::AppState;
use crate::domain::{MessageResponse, PasswordChangeRequestBody};
use crate::errors::PasswordChangeError;
use crate::services::{CurrentUser, UserService};

pub async fn change_password(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(request): Json<PasswordChangeRequestBody>,
) -> Result<impl IntoResponse, PasswordChangeError> {
    UserService::change_password(
        state,
        &current.login_id,
        &request.old_password,
        request.new_password,
    )
    .await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "Password changed successfully.".to_string(),
        }),
    ))
}
