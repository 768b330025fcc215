pub mod claims;
pub mod data_stores;
pub mod delete_request;
pub mod email;
pub mod login_request;
pub mod login_response;
pub mod message_response;
pub mod models;
pub mod password;
pub mod password_change_request;
pub mod user;
pub mod user_response;

pub use claims::*;
pub use data_stores::*;
pub use delete_request::*;
pub use email::*;
pub use login_request::*;
pub use login_response::*;
pub use message_response::*;
pub use models::*;
pub use password::*;
pub use password_change_request::*;
pub use user::*;
pub use user_response::*;
