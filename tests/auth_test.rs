//! Integration tests for account signup and authentication.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_signup_returns_token_and_user() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(json!({
                "name": "Alice",
                "email": "alice@test.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert!(response.body["token"].is_string());
    assert_eq!(response.body["user"]["name"], json!("Alice"));
    assert_eq!(response.body["user"]["email"], json!("alice@test.com"));
}

#[tokio::test]
async fn test_signup_duplicate_email_conflicts() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    app.create_test_user("Bob", "bob@test.com", "password123")
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(json!({
                "name": "Bobby",
                "email": "bob@test.com",
                "password": "password456",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_signup_rejects_short_password() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(json!({
                "name": "Carol",
                "email": "carol@test.com",
                "password": "abc",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_succeeds_with_valid_credentials() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    app.create_test_user("Dave", "dave@test.com", "password123")
        .await;

    let token = app.login("dave@test.com", "password123").await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    app.create_test_user("Erin", "erin@test.com", "password123")
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({"email": "erin@test.com", "password": "wrongpassword"})),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({"email": "nobody@test.com", "password": "password123"})),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_requires_valid_token() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    app.create_test_user("Frank", "frank@test.com", "password123")
        .await;
    let token = app.login("frank@test.com", "password123").await;

    let response = app
        .request("GET", "/api/auth/me", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], json!("Frank"));

    let response = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("GET", "/api/auth/me", None, Some("not-a-real-token"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_purges_expired_sessions() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let user_id = app
        .create_test_user("Heidi", "heidi@test.com", "password123")
        .await;

    let stale_token = "stale-session-identifier";
    sqlx::query(
        "INSERT INTO auth_sessions (token, user_id, expires_at) \
         VALUES ($1, $2, NOW() - INTERVAL '1 day')",
    )
    .bind(stale_token)
    .bind(user_id)
    .execute(&app.db_pool)
    .await
    .expect("Failed to insert expired session");

    app.login("heidi@test.com", "password123").await;

    let remaining: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM auth_sessions WHERE token = $1")
            .bind(stale_token)
            .fetch_one(&app.db_pool)
            .await
            .expect("Failed to count sessions");
    assert_eq!(remaining, 0);

    let response = app
        .request("GET", "/api/auth/me", None, Some(stale_token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_invalidates_token() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    app.create_test_user("Grace", "grace@test.com", "password123")
        .await;
    let token = app.login("grace@test.com", "password123").await;

    let response = app
        .request("POST", "/api/auth/logout", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/auth/me", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
