pub(crate) mod delete_account;
pub(crate) mod login;
pub(crate) mod logout;
pub(crate) mod my_info;
pub(crate) mod other_info;
pub(crate) mod password_change;
pub(crate) mod register;
pub(crate) mod update;

// re-export items from sub-modules
pub use delete_account::*;
pub use login::*;
pub use logout::*;
pub use my_info::*;
pub use other_info::*;
pub use password_change::*;
pub use register::*;
pub use update::*;
