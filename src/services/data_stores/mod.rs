pub mod hashmap_user_store;
pub mod hashset_banned_token_store;
pub mod redis_banned_token_store;
pub mod redis_service;
pub mod sql_user_store;

pub use hashmap_user_store::*;
pub use hashset_banned_token_store::*;
pub use redis_banned_token_store::*;
pub use redis_service::*;
pub use sql_user_store::*;
