pub mod auth;
pub mod data_stores;
pub mod image_store;
pub mod password_hasher;
pub mod token_service;
pub mod user_service;

pub use auth::*;
pub use data_stores::*;
pub use image_store::*;
pub use token_service::*;
pub use user_service::*;
