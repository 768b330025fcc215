use axum::extract::{Multipart, State};
use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app_state::AppState;
use crate::domain::{Role, UserResponse};
use crate::errors::UpdateError;
use crate::services::{CurrentUser, UpdateData, UserService};

pub async fn update(
    State(state): State<AppState>,
    current: CurrentUser,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, UpdateError> {
    current
        .require_role(Role::User)
        .map_err(|_| UpdateError::Forbidden)?;

    let mut data = UpdateData::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| UpdateError::MalformedForm)?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "email" => data.email = Some(field.text().await.map_err(|_| UpdateError::MalformedForm)?),
            "nickname" => {
                data.nickname = Some(field.text().await.map_err(|_| UpdateError::MalformedForm)?)
            }
            "profileImg" => {
                let file_name = field
                    .file_name()
                    .map(str::to_owned)
                    .unwrap_or_else(|| "profile.jpg".to_string());
                let bytes = field.bytes().await.map_err(|_| UpdateError::MalformedForm)?;
                if !bytes.is_empty() {
                    data.profile_img = Some((file_name, bytes.to_vec()));
                }
            }
            _ => {}
        }
    }

    log::info!(
        "profile update requested: login_id={}, nickname={:?}, email={:?}",
        current.login_id,
        data.nickname,
        data.email
    );

    let user = UserService::update(state, &current, data).await?;

    Ok((StatusCode::OK, Json(UserResponse::from(&user))))
}
