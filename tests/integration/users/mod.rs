//! User listing integration tests

use axum::http::StatusCode;

use crate::common::{assert_unauthorized, TestApp};

#[tokio::test]
async fn test_list_users_requires_token() {
    let app = TestApp::new();
    assert_unauthorized(&app.get("/users", None).await);
}

#[tokio::test]
async fn test_list_users_oldest_first() {
    let app = TestApp::new();
    let (first, token) = app.user_with_token("first@x.com").await;
    let (second, _) = app.user_with_token("second@x.com").await;

    let response = app.get("/users", Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);

    let body = response.json();
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["id"], first.id.to_string());
    assert_eq!(users[0]["email"], "first@x.com");
    assert_eq!(users[0]["is_super_admin"], false);
    assert_eq!(users[1]["id"], second.id.to_string());
}
