pub mod banned_token_store;
pub mod banned_token_store_err;
pub mod user_store;
pub mod user_store_err;

pub use banned_token_store::*;
pub use banned_token_store_err::*;
pub use user_store::UserStore;
pub use user_store_err::UserStoreError;
