mod auth;
mod delete_account;
mod info;
mod login;
mod logout;
mod password_change;
mod register;
mod update;

pub use auth::*;
pub use delete_account::*;
pub use info::*;
pub use login::*;
pub use logout::*;
pub use password_change::*;
pub use register::*;
pub use update::*;
