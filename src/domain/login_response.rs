use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "loginId")]
    pub login_id: String,
}
