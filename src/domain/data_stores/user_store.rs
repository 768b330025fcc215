use crate::domain::{NewUser, User};

use super::UserStoreError;

#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    async fn add_user(&mut self, user: NewUser) -> Result<User, UserStoreError>;
    async fn find_by_login_id(&self, login_id: &str) -> Result<Option<User>, UserStoreError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserStoreError>;
    async fn find_by_nickname(&self, nickname: &str) -> Result<Option<User>, UserStoreError>;
    async fn update_user(&mut self, user: User) -> Result<User, UserStoreError>;
    async fn delete_user(&mut self, id: i64) -> Result<(), UserStoreError>;
}
