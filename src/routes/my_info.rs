use axum::extract::State;
use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app_state::AppState;
use crate::domain::UserResponse;
use crate::errors::InfoError;
use crate::services::{CurrentUser, UserService};

// The profile comes from the store, not from the token claims; this is the
// one place a client can observe edits made after their token was issued.
pub async fn my_info(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<impl IntoResponse, InfoError> {
    let user = UserService::profile_by_login_id(state, &current.login_id).await?;
    Ok((StatusCode::OK, Json(UserResponse::from(&user))))
}
