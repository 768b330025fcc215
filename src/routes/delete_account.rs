use axum::extract::State;
use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app_state::AppState;
use crate::domain::{DeleteAccountRequestBody, MessageResponse};
use crate::errors::DeleteAccountError;
use crate::services::{CurrentUser, UserService};

// Deletion is scoped to the authenticated account; there is no way to name
// somebody else's login id here.
pub async fn delete_account(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(request): Json<DeleteAccountRequestBody>,
) -> Result<impl IntoResponse, DeleteAccountError> {
    UserService::delete_account(state, &current, &request.password).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "Account deleted.".to_string(),
        }),
    ))
}
