//! Login flow and session verification integration tests

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use devlead_identity::IdentityClaim;
use devlead_users::UserDirectory;
use serde_json::json;

use crate::common::{assert_unauthorized, token_from_redirect, TestApp, FRONTEND_URL};

fn ada_claim() -> IdentityClaim {
    IdentityClaim::new("a@x.com")
        .with_names(Some("A"), Some("B"))
        .with_picture("http://p/x.png")
}

mod test_login_flow {
    use super::*;

    #[tokio::test]
    async fn test_login_redirects_to_provider() {
        let app = TestApp::new();

        let response = app.get("/auth/google", None).await;

        assert_eq!(response.status, StatusCode::FOUND);
        assert!(!response.location().is_empty());
    }

    #[tokio::test]
    async fn test_end_to_end_login_then_profile() {
        let app = TestApp::new();
        app.register_identity("e2e-code", ada_claim());

        // Callback: exchange, upsert, sign, redirect to the frontend
        let callback = app.get("/auth/google/callback?code=e2e-code", None).await;
        assert_eq!(callback.status, StatusCode::FOUND);
        let location = callback.location().to_string();
        assert!(location.starts_with(&format!("{}?token=", FRONTEND_URL)));

        let user = app
            .directory
            .find_by_email("a@x.com")
            .await
            .unwrap()
            .expect("login created the user");
        assert_eq!(user.name.as_deref(), Some("A B"));
        assert_eq!(user.avatar_url.as_deref(), Some("http://p/x.png"));
        assert!(!user.is_super_admin);

        // The token's subject is the user id
        let token = token_from_redirect(&location);
        let principal = app.auth.verify_session(&token).unwrap();
        assert_eq!(principal.id, user.id);

        // The frontend presents the token back
        let profile = app.get("/auth/profile", Some(&token)).await;
        assert_eq!(profile.status, StatusCode::OK);
        assert_eq!(
            profile.json(),
            json!({ "id": user.id, "email": "a@x.com" })
        );
    }

    #[tokio::test]
    async fn test_second_login_reuses_user() {
        let app = TestApp::new();
        app.register_identity("first", ada_claim());
        app.register_identity(
            "second",
            IdentityClaim::new("a@x.com").with_names(None, None),
        );

        let first = app.get("/auth/google/callback?code=first", None).await;
        let second = app.get("/auth/google/callback?code=second", None).await;

        let first_id = app
            .auth
            .verify_session(&token_from_redirect(first.location()))
            .unwrap()
            .id;
        let second_id = app
            .auth
            .verify_session(&token_from_redirect(second.location()))
            .unwrap()
            .id;
        assert_eq!(first_id, second_id);

        // A login without a name does not blank the stored one
        let user = app.directory.find_by_id(first_id).await.unwrap().unwrap();
        assert_eq!(user.name.as_deref(), Some("A B"));
        assert_eq!(app.directory.len().await, 1);
    }

    #[tokio::test]
    async fn test_concurrent_callbacks_create_one_user() {
        let app = TestApp::new();
        app.register_identity("race", ada_claim());

        let responses = run_concurrent_callbacks(&app, 8).await;
        for status in responses {
            assert_eq!(status, StatusCode::FOUND);
        }
        assert_eq!(app.directory.len().await, 1);
    }

    async fn run_concurrent_callbacks(app: &TestApp, n: usize) -> Vec<StatusCode> {
        let handles: Vec<_> = (0..n)
            .map(|_| {
                let router = app.router.clone();
                tokio::spawn(async move {
                    use tower::ServiceExt;
                    router
                        .oneshot(crate::common::request(
                            "GET",
                            "/auth/google/callback?code=race",
                            None,
                            None,
                        ))
                        .await
                        .unwrap()
                        .status()
                })
            })
            .collect();

        let mut statuses = Vec::new();
        for handle in handles {
            statuses.push(handle.await.unwrap());
        }
        statuses
    }
}

mod test_login_failures {
    use super::*;

    #[tokio::test]
    async fn test_provider_error_is_login_failure() {
        let app = TestApp::new();

        let response = app
            .get("/auth/google/callback?error=access_denied", None)
            .await;

        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.json()["error"]["code"], "LOGIN_FAILED");
        assert!(app.directory.is_empty().await);
    }

    #[tokio::test]
    async fn test_missing_code_is_login_failure() {
        let app = TestApp::new();

        let response = app.get("/auth/google/callback", None).await;

        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert!(app.directory.is_empty().await);
    }

    #[tokio::test]
    async fn test_rejected_code_is_login_failure() {
        let app = TestApp::new();

        let response = app.get("/auth/google/callback?code=forged", None).await;

        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert!(response.headers.get("location").is_none());
        assert!(app.directory.is_empty().await);
    }

    #[tokio::test]
    async fn test_identity_without_email_is_login_failure() {
        let app = TestApp::new();
        app.register_identity("no-email", IdentityClaim::new(""));

        let response = app.get("/auth/google/callback?code=no-email", None).await;

        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert!(app.directory.is_empty().await);
    }
}

mod test_session_verification {
    use super::*;

    #[tokio::test]
    async fn test_profile_without_token() {
        let app = TestApp::new();
        assert_unauthorized(&app.get("/auth/profile", None).await);
    }

    #[tokio::test]
    async fn test_profile_with_garbage_token() {
        let app = TestApp::new();
        assert_unauthorized(&app.get("/auth/profile", Some("not.a.token")).await);
    }

    #[tokio::test]
    async fn test_profile_with_expired_token() {
        let app = TestApp::new();
        let (user, _) = app.user_with_token("old@x.com").await;

        let expired = app
            .auth
            .issue_session_at(user.id, &user.email, Utc::now() - Duration::days(8))
            .unwrap();

        assert_unauthorized(&app.get("/auth/profile", Some(&expired)).await);
    }

    #[tokio::test]
    async fn test_profile_with_token_from_other_secret() {
        let app = TestApp::new();
        let other = devlead_auth::AuthBackend::new(
            devlead_auth::AuthConfig::new("a-different-secret"),
            std::sync::Arc::new(devlead_users::DirectoryLookup(app.directory.clone())),
        );
        let token = other
            .issue_session(uuid::Uuid::new_v4(), "intruder@x.com")
            .unwrap();

        assert_unauthorized(&app.get("/auth/profile", Some(&token)).await);
    }

    #[tokio::test]
    async fn test_profile_with_wrong_scheme() {
        let app = TestApp::new();
        let (_, token) = app.user_with_token("a@x.com").await;

        let request = axum::http::Request::builder()
            .uri("/auth/profile")
            .header("authorization", format!("Token {}", token))
            .body(axum::body::Body::empty())
            .unwrap();

        assert_unauthorized(&app.send(request).await);
    }

    #[tokio::test]
    async fn test_profile_with_lowercase_scheme() {
        let app = TestApp::new();
        let (user, token) = app.user_with_token("a@x.com").await;

        let request = axum::http::Request::builder()
            .uri("/auth/profile")
            .header("authorization", format!("bearer {}", token))
            .body(axum::body::Body::empty())
            .unwrap();

        let response = app.send(request).await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.json()["id"], json!(user.id));
    }
}
