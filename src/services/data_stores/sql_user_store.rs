use welds::connections::any::AnyClient;
use welds::prelude::*;

use crate::domain::data_stores::{UserStore, UserStoreError};
use crate::domain::{Email, NewUser, Role, User, UserModel};

pub struct SqlUserStore {
    client: AnyClient,
}

impl SqlUserStore {
    pub fn new(client: AnyClient) -> Self {
        Self { client }
    }
}

fn db_err(e: impl ToString) -> UserStoreError {
    UserStoreError::DatabaseError(e.to_string())
}

fn from_user_model(model: &UserModel) -> Result<User, UserStoreError> {
    let email = Email::parse(model.email.clone())
        .map_err(|_| UserStoreError::InvalidData("invalid email in database".to_string()))?;
    let role = Role::parse(&model.role).map_err(UserStoreError::InvalidData)?;

    Ok(User {
        id: model.id,
        login_id: model.login_id.clone(),
        password_hash: model.password_hash.clone(),
        email,
        nickname: model.nickname.clone(),
        profile_img: model.profile_img.clone(),
        role,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

fn first_row(rows: Vec<DbState<UserModel>>) -> Result<Option<User>, UserStoreError> {
    match rows.into_iter().next() {
        Some(model) => Ok(Some(from_user_model(&model)?)),
        None => Ok(None),
    }
}

#[async_trait::async_trait]
impl UserStore for SqlUserStore {
    async fn add_user(&mut self, user: NewUser) -> Result<User, UserStoreError> {
        let now = chrono::Utc::now().timestamp();
        let mut model = UserModel::new();
        model.login_id = user.login_id;
        model.password_hash = user.password_hash;
        model.email = user.email.as_ref().to_string();
        model.nickname = user.nickname;
        model.profile_img = user.profile_img;
        model.role = user.role.as_str().to_string();
        model.created_at = now;
        model.updated_at = now;

        model.save(&self.client).await.map_err(|e| {
            let message = e.to_string();
            // Unique index violations on login_id/email/nickname.
            if message.to_lowercase().contains("unique") {
                UserStoreError::UserAlreadyExists
            } else {
                UserStoreError::DatabaseError(message)
            }
        })?;

        from_user_model(&model)
    }

    async fn find_by_login_id(&self, login_id: &str) -> Result<Option<User>, UserStoreError> {
        let rows = UserModel::where_col(|u| u.login_id.equal(login_id))
            .limit(1)
            .run(&self.client)
            .await
            .map_err(db_err)?;
        first_row(rows)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserStoreError> {
        let rows = UserModel::where_col(|u| u.email.equal(email))
            .limit(1)
            .run(&self.client)
            .await
            .map_err(db_err)?;
        first_row(rows)
    }

    async fn find_by_nickname(&self, nickname: &str) -> Result<Option<User>, UserStoreError> {
        let rows = UserModel::where_col(|u| u.nickname.equal(nickname))
            .limit(1)
            .run(&self.client)
            .await
            .map_err(db_err)?;
        first_row(rows)
    }

    async fn update_user(&mut self, user: User) -> Result<User, UserStoreError> {
        let mut model = UserModel::find_by_id(&self.client, user.id)
            .await
            .map_err(db_err)?
            .ok_or(UserStoreError::UserNotFound)?;

        model.login_id = user.login_id;
        model.password_hash = user.password_hash;
        model.email = user.email.as_ref().to_string();
        model.nickname = user.nickname;
        model.profile_img = user.profile_img;
        model.role = user.role.as_str().to_string();
        model.updated_at = chrono::Utc::now().timestamp();

        model.save(&self.client).await.map_err(db_err)?;

        from_user_model(&model)
    }

    async fn delete_user(&mut self, id: i64) -> Result<(), UserStoreError> {
        let mut model = UserModel::find_by_id(&self.client, id)
            .await
            .map_err(db_err)?
            .ok_or(UserStoreError::UserNotFound)?;

        model.delete(&self.client).await.map_err(db_err)
    }
}
