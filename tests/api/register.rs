use crate::helpers::{random_email, random_login_id, TestApp};

#[tokio::test]
async fn register_returns_201_and_the_new_profile() {
    let app = TestApp::new().await;
    let login_id = random_login_id();
    let email = random_email();

    let response = app
        .register(&login_id, "GoodPass1!", &email, Some("hoonie"), None)
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["loginId"], login_id.as_str());
    assert_eq!(body["email"], email.as_str());
    assert_eq!(body["nickname"], "hoonie");
    assert_eq!(body["profileImg"], "/images/default-profile.jpg");
}

#[tokio::test]
async fn register_without_nickname_defaults_to_login_id() {
    let app = TestApp::new().await;
    let login_id = random_login_id();

    let response = app
        .register(&login_id, "GoodPass1!", &random_email(), None, None)
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["nickname"], login_id.as_str());
}

#[tokio::test]
async fn register_with_uploaded_image_stores_it() {
    let app = TestApp::new().await;

    let response = app
        .register(
            &random_login_id(),
            "GoodPass1!",
            &random_email(),
            None,
            Some(("me.png", b"pretend png bytes".to_vec())),
        )
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let body: serde_json::Value = response.json().await.unwrap();
    let profile_img = body["profileImg"].as_str().unwrap();
    assert!(profile_img.starts_with("/images/"));
    assert!(profile_img.ends_with(".png"));
    assert_ne!(profile_img, "/images/default-profile.jpg");
}

#[tokio::test]
async fn register_rejects_duplicate_login_id() {
    let app = TestApp::new().await;
    let login_id = random_login_id();

    let first = app
        .register(&login_id, "GoodPass1!", &random_email(), None, None)
        .await;
    assert_eq!(first.status().as_u16(), 201);

    let second = app
        .register(&login_id, "GoodPass1!", &random_email(), Some("other"), None)
        .await;
    assert_eq!(second.status().as_u16(), 409);
}

#[tokio::test]
async fn register_rejects_duplicate_email() {
    let app = TestApp::new().await;
    let email = random_email();

    let first = app
        .register(&random_login_id(), "GoodPass1!", &email, None, None)
        .await;
    assert_eq!(first.status().as_u16(), 201);

    let second = app
        .register(&random_login_id(), "GoodPass1!", &email, None, None)
        .await;
    assert_eq!(second.status().as_u16(), 409);
}

#[tokio::test]
async fn register_rejects_invalid_email_and_weak_password() {
    let app = TestApp::new().await;

    let bad_email = app
        .register(&random_login_id(), "GoodPass1!", "not-an-email", None, None)
        .await;
    assert_eq!(bad_email.status().as_u16(), 422);

    let weak_password = app
        .register(&random_login_id(), "weak", &random_email(), None, None)
        .await;
    assert_eq!(weak_password.status().as_u16(), 422);
}

#[tokio::test]
async fn register_rejects_missing_fields() {
    let app = TestApp::new().await;

    // Missing password: send only loginId and email.
    let form = reqwest::multipart::Form::new()
        .text("loginId", random_login_id())
        .text("email", random_email());
    let response = app
        .http_client
        .post(format!("{}/api/users/register", &app.address))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
}
