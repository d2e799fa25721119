//! Shared test helpers for integration tests.
//!
//! The suite needs a live PostgreSQL instance; set
//! `GEODASH_TEST_DATABASE_URL` to run it. Tests skip silently when the
//! variable is absent.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use geodash_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application, or `None` when no test database is
    /// configured.
    pub async fn try_new() -> Option<Self> {
        Self::try_new_with(|_| {}).await
    }

    /// Like [`try_new`], with a hook to adjust the configuration before the
    /// app is built.
    ///
    /// [`try_new`]: TestApp::try_new
    pub async fn try_new_with(configure: impl FnOnce(&mut AppConfig)) -> Option<Self> {
        let database_url = std::env::var("GEODASH_TEST_DATABASE_URL").ok()?;

        let mut config = AppConfig::load_file("tests/fixtures/test_config.toml")
            .expect("Failed to load test config");
        config.database.url = database_url;
        configure(&mut config);

        let db = geodash_database::connection::DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");

        geodash_database::migration::run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        Self::clean_database(db.pool()).await;

        let db_pool = db.pool().clone();
        let state = geodash_api::app::build_state(config.clone(), db);
        let router = geodash_api::app::build_app(state);

        Some(Self {
            router,
            db_pool,
            config,
        })
    }

    /// Clean all test data from the database
    async fn clean_database(pool: &PgPool) {
        let tables = ["session_records", "session_states", "auth_sessions", "users"];

        for table in &tables {
            let query = format!("DELETE FROM {table}");
            let _ = sqlx::query(&query).execute(pool).await;
        }
    }

    /// Create a test user and return their ID
    pub async fn create_test_user(&self, name: &str, email: &str, password: &str) -> Uuid {
        let hasher = geodash_auth::password::hasher::PasswordHasher::new();
        let hash = hasher.hash_password(password).expect("Failed to hash password");
        let id = Uuid::new_v4();

        sqlx::query("INSERT INTO users (id, name, email, password_hash) VALUES ($1, $2, $3, $4)")
            .bind(id)
            .bind(name)
            .bind(email)
            .bind(&hash)
            .execute(&self.db_pool)
            .await
            .expect("Failed to create test user");

        id
    }

    /// Login and return the bearer identifier
    pub async fn login(&self, email: &str, password: &str) -> String {
        let body = serde_json::json!({
            "email": email,
            "password": password,
        });

        let response = self
            .request("POST", "/api/auth/login", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("token")
            .and_then(|v| v.as_str())
            .expect("No token in login response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
