use crate::helpers::TestApp;

#[tokio::test]
async fn logout_revokes_the_token() {
    let app = TestApp::new().await;
    let (_, token) = app.signed_in_user().await;

    // Token works before logout.
    let before = app.my_info(Some(&token)).await;
    assert_eq!(before.status().as_u16(), 200);

    let response = app.logout(&token).await;
    assert_eq!(response.status().as_u16(), 200);

    // Still cryptographically valid, but the gate now rejects it with a
    // session-ended reason, distinct from a bad-credentials message.
    let after = app.my_info(Some(&token)).await;
    assert_eq!(after.status().as_u16(), 401);
    let body = after.text().await.unwrap();
    assert!(body.contains("Session ended"), "unexpected body: {}", body);
}

#[tokio::test]
async fn logout_with_revoked_token_is_rejected_at_the_gate() {
    let app = TestApp::new().await;
    let (_, token) = app.signed_in_user().await;

    app.logout(&token).await;
    let second = app.logout(&token).await;
    assert_eq!(second.status().as_u16(), 401);
}

#[tokio::test]
async fn logout_without_identity_is_rejected() {
    let app = TestApp::new().await;
    let response = app
        .http_client
        .post(format!("{}/api/users/logout", &app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn fresh_login_works_after_logout() {
    let app = TestApp::new().await;
    let (login_id, token) = app.signed_in_user().await;
    app.logout(&token).await;

    let response = app.login(&login_id, "GoodPass1!").await;
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    let new_token = body["token"].as_str().unwrap();

    let info = app.my_info(Some(new_token)).await;
    assert_eq!(info.status().as_u16(), 200);
}
