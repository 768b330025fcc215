use axum::extract::State;
use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app_state::AppState;
use crate::domain::{LoginRequestBody, LoginResponse};
use crate::errors::LoginError;
use crate::services::UserService;

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequestBody>,
) -> Result<impl IntoResponse, LoginError> {
    let user = UserService::login(state.clone(), &request.login_id, &request.password).await?;

    let token = state
        .token_service
        .issue(&user)
        .map_err(|_| LoginError::InternalServerError)?;

    Ok((
        StatusCode::OK,
        Json(LoginResponse {
            token,
            login_id: user.login_id,
        }),
    ))
}
