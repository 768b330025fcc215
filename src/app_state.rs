use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{BannedTokenStore, UserStore};
use crate::services::{ImageStore, TokenService};
use crate::utils::Config;

// Using type aliases to improve readability!
pub type UserStoreType = Arc<RwLock<dyn UserStore>>;
pub type BannedTokenStoreType = Arc<RwLock<dyn BannedTokenStore>>;
pub type TokenServiceType = Arc<TokenService>;

#[derive(Clone)]
pub struct AppState {
    pub user_store: UserStoreType,
    pub token_service: TokenServiceType,
    pub image_store: Arc<ImageStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(
        user_store: UserStoreType,
        token_service: TokenServiceType,
        image_store: Arc<ImageStore>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            user_store,
            token_service,
            image_store,
            config,
        }
    }
}
