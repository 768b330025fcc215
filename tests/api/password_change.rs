use crate::helpers::TestApp;

#[tokio::test]
async fn password_change_takes_effect_on_next_login() {
    let app = TestApp::new().await;
    let (login_id, token) = app.signed_in_user().await;

    let response = app
        .change_password(&token, "GoodPass1!", "EvenBetter2@")
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let old = app.login(&login_id, "GoodPass1!").await;
    assert_eq!(old.status().as_u16(), 401);

    let new = app.login(&login_id, "EvenBetter2@").await;
    assert_eq!(new.status().as_u16(), 200);
}

#[tokio::test]
async fn password_change_rejects_wrong_old_password() {
    let app = TestApp::new().await;
    let (_, token) = app.signed_in_user().await;

    let response = app
        .change_password(&token, "NotMyPass1!", "EvenBetter2@")
        .await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn password_change_rejects_weak_new_password() {
    let app = TestApp::new().await;
    let (_, token) = app.signed_in_user().await;

    let response = app.change_password(&token, "GoodPass1!", "weak").await;
    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn password_change_requires_authentication() {
    let app = TestApp::new().await;
    let response = app
        .http_client
        .patch(format!("{}/api/users/pw_change", &app.address))
        .json(&serde_json::json!({
            "oldPassword": "GoodPass1!",
            "newPassword": "EvenBetter2@",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 401);
}
