use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct DeleteAccountRequestBody {
    pub password: String,
}
