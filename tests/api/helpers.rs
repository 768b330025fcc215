use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use tokio::net::TcpListener;
use tokio::spawn;
use tokio::sync::RwLock;
use uuid::Uuid;

use user_service::app_state::AppState;
use user_service::app_router;
use user_service::services::{HashmapUserStore, HashsetBannedTokenStore, ImageStore, TokenService};
use user_service::utils::Config;

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
}

impl TestApp {
    pub async fn new() -> Self {
        let upload_dir = std::env::temp_dir().join(format!("user-service-test-{}", Uuid::new_v4()));
        let config = Arc::new(
            Config::new(
                "integration-test-secret".to_string(),
                600,
                "sqlite::memory:".to_string(),
                "127.0.0.1:6379".to_string(),
                upload_dir.to_str().unwrap().to_string(),
            )
            .expect("failed to build test config"),
        );

        let banned_tokens = Arc::new(RwLock::new(HashsetBannedTokenStore::new()));
        let token_service = Arc::new(TokenService::new(&config, banned_tokens));
        let user_store = Arc::new(RwLock::new(HashmapUserStore::new()));
        let image_store = Arc::new(
            ImageStore::new(config.upload_dir()).expect("failed to create upload directory"),
        );

        let app_state = AppState::new(user_store, token_service, image_store, config);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed binding to an ephemeral port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let server = axum::serve(listener, app_router(app_state));
        spawn(async move {
            if let Err(e) = server.await {
                eprintln!("Test server error: {}", e);
            }
        });

        TestApp {
            address,
            http_client: Client::new(),
        }
    }

    pub async fn register(
        &self,
        login_id: &str,
        password: &str,
        email: &str,
        nickname: Option<&str>,
        profile_img: Option<(&str, Vec<u8>)>,
    ) -> Response {
        let mut form = Form::new()
            .text("loginId", login_id.to_string())
            .text("password", password.to_string())
            .text("email", email.to_string());
        if let Some(nickname) = nickname {
            form = form.text("nickname", nickname.to_string());
        }
        if let Some((file_name, bytes)) = profile_img {
            form = form.part(
                "profileImg",
                Part::bytes(bytes).file_name(file_name.to_string()),
            );
        }

        self.http_client
            .post(format!("{}/api/users/register", &self.address))
            .multipart(form)
            .send()
            .await
            .expect("Failed to execute register request.")
    }

    pub async fn login(&self, login_id: &str, password: &str) -> Response {
        self.http_client
            .post(format!("{}/api/users/login", &self.address))
            .json(&serde_json::json!({ "loginId": login_id, "password": password }))
            .send()
            .await
            .expect("Failed to execute login request.")
    }

    /// Register and log in a fresh random account, returning its login id
    /// and bearer token.
    pub async fn signed_in_user(&self) -> (String, String) {
        let login_id = random_login_id();
        let email = random_email();
        let response = self
            .register(&login_id, "GoodPass1!", &email, None, None)
            .await;
        assert_eq!(response.status().as_u16(), 201);

        let response = self.login(&login_id, "GoodPass1!").await;
        assert_eq!(response.status().as_u16(), 200);
        let body: serde_json::Value = response.json().await.unwrap();
        let token = body["token"].as_str().unwrap().to_string();
        (login_id, token)
    }

    pub async fn my_info(&self, token: Option<&str>) -> Response {
        let mut request = self
            .http_client
            .get(format!("{}/api/users/my_info", &self.address));
        if let Some(token) = token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }
        request
            .send()
            .await
            .expect("Failed to execute my_info request.")
    }

    pub async fn my_info_raw_header(&self, header: &str) -> Response {
        self.http_client
            .get(format!("{}/api/users/my_info", &self.address))
            .header("Authorization", header)
            .send()
            .await
            .expect("Failed to execute my_info request.")
    }

    pub async fn other_info(&self, nickname: &str) -> Response {
        self.http_client
            .get(format!("{}/api/users/other_info/{}", &self.address, nickname))
            .send()
            .await
            .expect("Failed to execute other_info request.")
    }

    pub async fn update(
        &self,
        token: &str,
        email: Option<&str>,
        nickname: Option<&str>,
        profile_img: Option<(&str, Vec<u8>)>,
    ) -> Response {
        let mut form = Form::new();
        if let Some(email) = email {
            form = form.text("email", email.to_string());
        }
        if let Some(nickname) = nickname {
            form = form.text("nickname", nickname.to_string());
        }
        if let Some((file_name, bytes)) = profile_img {
            form = form.part(
                "profileImg",
                Part::bytes(bytes).file_name(file_name.to_string()),
            );
        }

        self.http_client
            .patch(format!("{}/api/users/update", &self.address))
            .header("Authorization", format!("Bearer {}", token))
            .multipart(form)
            .send()
            .await
            .expect("Failed to execute update request.")
    }

    pub async fn change_password(
        &self,
        token: &str,
        old_password: &str,
        new_password: &str,
    ) -> Response {
        self.http_client
            .patch(format!("{}/api/users/pw_change", &self.address))
            .header("Authorization", format!("Bearer {}", token))
            .json(&serde_json::json!({
                "oldPassword": old_password,
                "newPassword": new_password,
            }))
            .send()
            .await
            .expect("Failed to execute password change request.")
    }

    pub async fn delete_account(&self, token: &str, password: &str) -> Response {
        self.http_client
            .delete(format!("{}/api/users/delete", &self.address))
            .header("Authorization", format!("Bearer {}", token))
            .json(&serde_json::json!({ "password": password }))
            .send()
            .await
            .expect("Failed to execute delete request.")
    }

    pub async fn logout(&self, token: &str) -> Response {
        self.http_client
            .post(format!("{}/api/users/logout", &self.address))
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await
            .expect("Failed to execute logout request.")
    }
}

pub fn random_login_id() -> String {
    format!("user-{}", Uuid::new_v4())
}

pub fn random_email() -> String {
    format!("{}@example.com", Uuid::new_v4())
}
