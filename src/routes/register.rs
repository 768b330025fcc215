use axum::extract::{Multipart, State};
use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app_state::AppState;
use crate::domain::UserResponse;
use crate::errors::RegisterError;
use crate::services::{RegisterData, UserService};

pub async fn register(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, RegisterError> {
    let mut login_id = None;
    let mut password = None;
    let mut email = None;
    let mut nickname = None;
    let mut profile_img = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| RegisterError::MalformedForm)?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "loginId" => login_id = Some(field.text().await.map_err(|_| RegisterError::MalformedForm)?),
            "password" => password = Some(field.text().await.map_err(|_| RegisterError::MalformedForm)?),
            "email" => email = Some(field.text().await.map_err(|_| RegisterError::MalformedForm)?),
            "nickname" => nickname = Some(field.text().await.map_err(|_| RegisterError::MalformedForm)?),
            "profileImg" => {
                let file_name = field
                    .file_name()
                    .map(str::to_owned)
                    .unwrap_or_else(|| "profile.jpg".to_string());
                let bytes = field.bytes().await.map_err(|_| RegisterError::MalformedForm)?;
                if !bytes.is_empty() {
                    profile_img = Some((file_name, bytes.to_vec()));
                }
            }
            _ => {}
        }
    }

    let data = RegisterData {
        login_id: login_id.ok_or(RegisterError::MissingField("loginId"))?,
        password: password.ok_or(RegisterError::MissingField("password"))?,
        email: email.ok_or(RegisterError::MissingField("email"))?,
        nickname,
        profile_img,
    };

    let user = UserService::register(state, data).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}
