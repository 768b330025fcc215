use serde::{Deserialize, Serialize};

use super::user::User;

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct UserResponse {
    #[serde(rename = "loginId")]
    pub login_id: String,
    pub email: String,
    pub nickname: String,
    #[serde(rename = "profileImg")]
    pub profile_img: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        UserResponse {
            login_id: user.login_id.clone(),
            email: user.email.as_ref().to_string(),
            nickname: user.nickname.clone(),
            profile_img: user.profile_img.clone(),
        }
    }
}
