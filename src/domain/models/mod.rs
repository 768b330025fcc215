mod user;

pub use user::UserModel;
