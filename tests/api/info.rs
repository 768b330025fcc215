use crate::helpers::{random_email, random_login_id, TestApp};

#[tokio::test]
async fn my_info_returns_the_stored_profile() {
    let app = TestApp::new().await;
    let (login_id, token) = app.signed_in_user().await;

    let response = app.my_info(Some(&token)).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["loginId"], login_id.as_str());
}

#[tokio::test]
async fn other_info_finds_users_by_nickname() {
    let app = TestApp::new().await;
    let login_id = random_login_id();
    app.register(&login_id, "GoodPass1!", &random_email(), Some("findable"), None)
        .await;

    let response = app.other_info("findable").await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["loginId"], login_id.as_str());
    assert_eq!(body["nickname"], "findable");
}

#[tokio::test]
async fn other_info_unknown_nickname_is_404() {
    let app = TestApp::new().await;
    let response = app.other_info("who-is-this").await;
    assert_eq!(response.status().as_u16(), 404);
}
