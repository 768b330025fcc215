use welds::prelude::*;

#[derive(Debug, WeldsModel)]
#[welds(table = "users")]
pub struct UserModel {
    #[welds(primary_key)]
    pub id: i64,
    pub login_id: String,
    pub password_hash: String,
    pub email: String,
    pub nickname: String,
    pub profile_img: String,
    pub role: String,
    pub created_at: i64,
    pub updated_at: i64,
}
