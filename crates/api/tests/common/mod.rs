//! Common test utilities for integration tests.
//!
//! These helpers run the full router against a real PostgreSQL database.
//! When `TEST_DATABASE_URL` is not set every integration test returns early.

// Not every test binary uses every helper.
#![allow(dead_code)]

use academy_api::{
    app::create_app,
    config::{
        AdminBootstrapConfig, Config, DatabaseConfig, JwtAuthConfig, LoggingConfig,
        SecurityConfig, ServerConfig,
    },
};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use domain::models::{Account, Role};
use fake::{faker::name::en::Name, Fake};
use persistence::repositories::AccountRepository;
use serde_json::Value;
use shared::jwt::JwtConfig;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &str = "integration-test-secret-0123456789";
pub const TEST_PASSWORD: &str = "Str0ngPassw0rd!";

/// Database URL for integration tests, if configured.
pub fn test_database_url() -> Option<String> {
    std::env::var("TEST_DATABASE_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
}

/// Create a test database pool.
pub async fn create_test_pool(database_url: &str) -> PgPool {
    PgPoolOptions::new()
        .max_connections(20)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(30))
        .connect(database_url)
        .await
        .expect("Failed to connect to test database")
}

/// Apply the schema. The migrator takes an advisory lock, so parallel
/// tests can call this safely.
pub async fn run_migrations(pool: &PgPool) {
    sqlx::migrate!("../persistence/src/migrations")
        .run(pool)
        .await
        .expect("Failed to run migrations");
}

pub fn test_config(database_url: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8001,
            request_timeout_secs: 30,
        },
        database: DatabaseConfig {
            url: database_url.to_string(),
            max_connections: 20,
            min_connections: 1,
            connect_timeout_secs: 10,
            idle_timeout_secs: 600,
        },
        logging: LoggingConfig {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        },
        jwt: JwtAuthConfig {
            secret: TEST_JWT_SECRET.to_string(),
            expiry_secs: 3600,
            leeway_secs: 0,
        },
        admin: AdminBootstrapConfig {
            bootstrap_email: unique_test_email(),
            bootstrap_password: TEST_PASSWORD.to_string(),
            bootstrap_name: "Bootstrap Owner".to_string(),
        },
        security: SecurityConfig { hsts_enabled: true },
    }
}

/// Generate a unique email for testing.
pub fn unique_test_email() -> String {
    format!("test_{}@example.com", uuid::Uuid::new_v4().simple())
}

/// A connected pool plus a router built on it.
pub struct TestContext {
    pub pool: PgPool,
    pub config: Config,
    pub app: Router,
}

impl TestContext {
    /// Returns `None` when no test database is configured.
    pub async fn setup() -> Option<Self> {
        let database_url = test_database_url()?;
        let pool = create_test_pool(&database_url).await;
        run_migrations(&pool).await;

        let config = test_config(&database_url);
        let app = create_app(config.clone(), pool.clone()).expect("Failed to build app");

        Some(Self { pool, config, app })
    }

    /// Send one request through a clone of the router.
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");
        let status = response.status();
        (status, parse_response_body(response).await)
    }

    /// Insert an account directly and mint a session token for it.
    pub async fn create_account(&self, role: Role) -> TestAccount {
        let email = unique_test_email();
        let name: String = Name().fake();
        let hash = shared::password::hash_password(TEST_PASSWORD).expect("hash");
        let account = AccountRepository::new(self.pool.clone())
            .create(&email, &hash, &name, role)
            .await
            .expect("Failed to insert account");

        let jwt = JwtConfig::new(&self.config.jwt.secret, self.config.jwt.expiry_secs)
            .expect("jwt config");
        let (token, _) = jwt
            .generate_token(account.id, &account.email, role.as_str())
            .expect("token");

        TestAccount { account, token }
    }

    pub async fn owner(&self) -> TestAccount {
        self.create_account(Role::Owner).await
    }

    pub async fn staff(&self) -> TestAccount {
        self.create_account(Role::Staff).await
    }

    /// Flip `is_active` without going through the API.
    pub async fn deactivate(&self, account: &TestAccount) {
        sqlx::query("UPDATE accounts SET is_active = FALSE WHERE id = $1")
            .bind(account.account.id)
            .execute(&self.pool)
            .await
            .expect("Failed to deactivate account");
    }
}

pub struct TestAccount {
    pub account: Account,
    pub token: String,
}

impl TestAccount {
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// Build a JSON request, optionally authenticated.
pub fn json_request(method: Method, uri: &str, token: Option<&TestAccount>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(account) = token {
        builder = builder.header(header::AUTHORIZATION, account.bearer());
    }
    builder
        .body(Body::from(serde_json::to_vec(&body).expect("serialize body")))
        .expect("request")
}

/// Build a body-less request, optionally authenticated.
pub fn empty_request(method: Method, uri: &str, token: Option<&TestAccount>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(account) = token {
        builder = builder.header(header::AUTHORIZATION, account.bearer());
    }
    builder.body(Body::empty()).expect("request")
}

pub fn get(uri: &str, token: Option<&TestAccount>) -> Request<Body> {
    empty_request(Method::GET, uri, token)
}

/// Parse a JSON response body, or `Null` for an empty one.
pub async fn parse_response_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).unwrap_or(Value::Null)
}
