use std::collections::HashMap;

use crate::domain::data_stores::{UserStore, UserStoreError};
use crate::domain::{NewUser, User};

/// In-memory user store keyed by id, used by tests and local development.
pub struct HashmapUserStore {
    users: HashMap<i64, User>,
    next_id: i64,
}

impl HashmapUserStore {
    pub fn new() -> Self {
        HashmapUserStore {
            users: HashMap::new(),
            next_id: 1,
        }
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

impl Default for HashmapUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl UserStore for HashmapUserStore {
    async fn add_user(&mut self, user: NewUser) -> Result<User, UserStoreError> {
        if self
            .users
            .values()
            .any(|u| u.login_id == user.login_id || u.email == user.email || u.nickname == user.nickname)
        {
            return Err(UserStoreError::UserAlreadyExists);
        }

        let id = self.next_id;
        self.next_id += 1;
        let now = chrono::Utc::now().timestamp();
        let user = User {
            id,
            login_id: user.login_id,
            password_hash: user.password_hash,
            email: user.email,
            nickname: user.nickname,
            profile_img: user.profile_img,
            role: user.role,
            created_at: now,
            updated_at: now,
        };
        self.users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_login_id(&self, login_id: &str) -> Result<Option<User>, UserStoreError> {
        Ok(self.users.values().find(|u| u.login_id == login_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserStoreError> {
        Ok(self
            .users
            .values()
            .find(|u| u.email.as_ref() == email)
            .cloned())
    }

    async fn find_by_nickname(&self, nickname: &str) -> Result<Option<User>, UserStoreError> {
        Ok(self.users.values().find(|u| u.nickname == nickname).cloned())
    }

    async fn update_user(&mut self, mut user: User) -> Result<User, UserStoreError> {
        if !self.users.contains_key(&user.id) {
            return Err(UserStoreError::UserNotFound);
        }
        user.updated_at = chrono::Utc::now().timestamp();
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete_user(&mut self, id: i64) -> Result<(), UserStoreError> {
        self.users
            .remove(&id)
            .map(|_| ())
            .ok_or(UserStoreError::UserNotFound)
    }
}
