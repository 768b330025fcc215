use axum::extract::{Path, State};
use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app_state::AppState;
use crate::domain::UserResponse;
use crate::errors::InfoError;
use crate::services::UserService;

pub async fn other_info(
    State(state): State<AppState>,
    Path(nickname): Path<String>,
) -> Result<impl IntoResponse, InfoError> {
    let user = UserService::profile_by_nickname(state, &nickname).await?;
    Ok((StatusCode::OK, Json(UserResponse::from(&user))))
}
