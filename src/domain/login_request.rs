use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequestBody {
    #[serde(rename = "loginId")]
    pub login_id: String,
    pub password: String,
}
