use crate::helpers::TestApp;

#[tokio::test]
async fn delete_removes_the_account() {
    let app = TestApp::new().await;
    let (login_id, token) = app.signed_in_user().await;

    let response = app.delete_account(&token, "GoodPass1!").await;
    assert_eq!(response.status().as_u16(), 200);

    let login = app.login(&login_id, "GoodPass1!").await;
    assert_eq!(login.status().as_u16(), 401);
}

#[tokio::test]
async fn delete_rejects_wrong_password() {
    let app = TestApp::new().await;
    let (login_id, token) = app.signed_in_user().await;

    let response = app.delete_account(&token, "NotMyPass1!").await;
    assert_eq!(response.status().as_u16(), 401);

    // Account is still there.
    let login = app.login(&login_id, "GoodPass1!").await;
    assert_eq!(login.status().as_u16(), 200);
}

#[tokio::test]
async fn delete_requires_authentication() {
    let app = TestApp::new().await;
    let response = app
        .http_client
        .delete(format!("{}/api/users/delete", &app.address))
        .json(&serde_json::json!({ "password": "GoodPass1!" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 401);
}
