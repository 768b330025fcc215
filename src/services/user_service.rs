use crate::app_state::AppState;
use crate::domain::{Email, NewUser, Password, Role, User, UserStoreError};
use crate::errors::{
    DeleteAccountError, InfoError, LoginError, PasswordChangeError, RegisterError, UpdateError,
};
use crate::services::auth::CurrentUser;
use crate::services::password_hasher::{hash_password, verify_password};
use crate::utils::consts::DEFAULT_PROFILE_IMAGE;

/// Raw bytes of an uploaded image, with the filename the client sent.
pub type UploadedImage = (String, Vec<u8>);

#[derive(Debug)]
pub struct RegisterData {
    pub login_id: String,
    pub password: String,
    pub email: String,
    pub nickname: Option<String>,
    pub profile_img: Option<UploadedImage>,
}

#[derive(Debug, Default)]
pub struct UpdateData {
    pub email: Option<String>,
    pub nickname: Option<String>,
    pub profile_img: Option<UploadedImage>,
}

pub struct UserService {}

impl UserService {
    pub async fn register(state: AppState, data: RegisterData) -> Result<User, RegisterError> {
        let email = Email::parse(data.email).or(Err(RegisterError::InvalidEmail))?;
        let password = Password::parse(data.password).or(Err(RegisterError::InvalidPassword))?;
        if data.login_id.is_empty() {
            return Err(RegisterError::MissingField("loginId"));
        }
        // Nickname is optional on the wire but unique in the store; an
        // account that never picks one is addressable by its login id.
        let nickname = data
            .nickname
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| data.login_id.clone());

        {
            let store = state.user_store.read().await;
            if store
                .find_by_login_id(&data.login_id)
                .await
                .map_err(|_| RegisterError::InternalServerError)?
                .is_some()
            {
                return Err(RegisterError::LoginIdTaken(data.login_id));
            }
            if store
                .find_by_email(email.as_ref())
                .await
                .map_err(|_| RegisterError::InternalServerError)?
                .is_some()
            {
                return Err(RegisterError::EmailTaken(email.as_ref().to_string()));
            }
            if store
                .find_by_nickname(&nickname)
                .await
                .map_err(|_| RegisterError::InternalServerError)?
                .is_some()
            {
                return Err(RegisterError::NicknameTaken(nickname));
            }
        }

        let password_hash = hash_password(password.as_ref())
            .await
            .map_err(|_| RegisterError::InternalServerError)?;

        let profile_img = match data.profile_img {
            Some((name, bytes)) => state
                .image_store
                .save(&name, &bytes)
                .await
                .map_err(|_| RegisterError::ImageStoreError)?,
            None => DEFAULT_PROFILE_IMAGE.to_string(),
        };

        let new_user = NewUser {
            login_id: data.login_id.clone(),
            password_hash,
            email,
            nickname,
            profile_img,
            role: Role::User,
        };

        state
            .user_store
            .write()
            .await
            .add_user(new_user)
            .await
            .map_err(|e| match e {
                UserStoreError::UserAlreadyExists => RegisterError::LoginIdTaken(data.login_id),
                _ => RegisterError::InternalServerError,
            })
    }

    pub async fn login(
        state: AppState,
        login_id: &str,
        password: &str,
    ) -> Result<User, LoginError> {
        let user = state
            .user_store
            .read()
            .await
            .find_by_login_id(login_id)
            .await
            .map_err(|_| LoginError::InternalServerError)?
            .ok_or_else(|| LoginError::UserNotFound(login_id.to_string()))?;

        let matches = verify_password(password, &user.password_hash)
            .await
            .map_err(|_| LoginError::InternalServerError)?;
        if !matches {
            return Err(LoginError::InvalidCredentials);
        }

        Ok(user)
    }

    pub async fn update(
        state: AppState,
        current: &CurrentUser,
        data: UpdateData,
    ) -> Result<User, UpdateError> {
        let mut user = state
            .user_store
            .read()
            .await
            .find_by_login_id(&current.login_id)
            .await
            .map_err(|_| UpdateError::InternalServerError)?
            .ok_or(UpdateError::UserNotFound)?;

        if let Some(email_raw) = data.email.filter(|e| !e.is_empty()) {
            let email = Email::parse(email_raw).or(Err(UpdateError::InvalidEmail))?;
            if email != user.email {
                let taken = state
                    .user_store
                    .read()
                    .await
                    .find_by_email(email.as_ref())
                    .await
                    .map_err(|_| UpdateError::InternalServerError)?
                    .is_some();
                if taken {
                    return Err(UpdateError::EmailTaken(email.as_ref().to_string()));
                }
                user.email = email;
            }
        }

        if let Some(nickname) = data.nickname.filter(|n| !n.is_empty()) {
            if nickname != user.nickname {
                let taken = state
                    .user_store
                    .read()
                    .await
                    .find_by_nickname(&nickname)
                    .await
                    .map_err(|_| UpdateError::InternalServerError)?
                    .is_some();
                if taken {
                    return Err(UpdateError::NicknameTaken(nickname));
                }
                user.nickname = nickname;
            }
        }

        if let Some((name, bytes)) = data.profile_img {
            // Store the replacement before dropping the old file so a
            // failed write leaves the account with a working image.
            let new_path = state
                .image_store
                .save(&name, &bytes)
                .await
                .map_err(|_| UpdateError::ImageStoreError)?;
            if let Err(e) = state.image_store.delete(&user.profile_img).await {
                log::warn!("failed to remove replaced profile image: {}", e);
            }
            user.profile_img = new_path;
        }

        state
            .user_store
            .write()
            .await
            .update_user(user)
            .await
            .map_err(|_| UpdateError::InternalServerError)
    }

    pub async fn change_password(
        state: AppState,
        login_id: &str,
        old_password: &str,
        new_password: String,
    ) -> Result<(), PasswordChangeError> {
        let new_password =
            Password::parse(new_password).or(Err(PasswordChangeError::InvalidNewPassword))?;

        let mut user = state
            .user_store
            .read()
            .await
            .find_by_login_id(login_id)
            .await
            .map_err(|_| PasswordChangeError::InternalServerError)?
            .ok_or(PasswordChangeError::UserNotFound)?;

        let matches = verify_password(old_password, &user.password_hash)
            .await
            .map_err(|_| PasswordChangeError::InternalServerError)?;
        if !matches {
            return Err(PasswordChangeError::WrongOldPassword);
        }

        user.password_hash = hash_password(new_password.as_ref())
            .await
            .map_err(|_| PasswordChangeError::InternalServerError)?;

        state
            .user_store
            .write()
            .await
            .update_user(user)
            .await
            .map_err(|_| PasswordChangeError::InternalServerError)?;
        Ok(())
    }

    pub async fn delete_account(
        state: AppState,
        current: &CurrentUser,
        password: &str,
    ) -> Result<(), DeleteAccountError> {
        let user = state
            .user_store
            .read()
            .await
            .find_by_login_id(&current.login_id)
            .await
            .map_err(|_| DeleteAccountError::InternalServerError)?
            .ok_or(DeleteAccountError::UserNotFound)?;

        let matches = verify_password(password, &user.password_hash)
            .await
            .map_err(|_| DeleteAccountError::InternalServerError)?;
        if !matches {
            return Err(DeleteAccountError::InvalidCredentials);
        }

        if let Err(e) = state.image_store.delete(&user.profile_img).await {
            log::warn!("failed to remove profile image of deleted account: {}", e);
        }

        state
            .user_store
            .write()
            .await
            .delete_user(user.id)
            .await
            .map_err(|e| match e {
                UserStoreError::UserNotFound => DeleteAccountError::UserNotFound,
                _ => DeleteAccountError::InternalServerError,
            })
    }

    pub async fn profile_by_login_id(state: AppState, login_id: &str) -> Result<User, InfoError> {
        state
            .user_store
            .read()
            .await
            .find_by_login_id(login_id)
            .await
            .map_err(|_| InfoError::InternalServerError)?
            .ok_or_else(|| InfoError::UserNotFound(login_id.to_string()))
    }

    pub async fn profile_by_nickname(state: AppState, nickname: &str) -> Result<User, InfoError> {
        state
            .user_store
            .read()
            .await
            .find_by_nickname(nickname)
            .await
            .map_err(|_| InfoError::InternalServerError)?
            .ok_or_else(|| InfoError::UserNotFound(nickname.to_string()))
    }
}
