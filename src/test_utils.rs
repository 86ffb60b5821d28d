//! Test utilities with lazy testcontainers support
//!
//! The PostgreSQL container is started on first use and shared by every test
//! in the binary. Tests isolate themselves with unique usernames and names
//! rather than truncating tables.

use crate::config::{Config, DatabaseConfig, JwtConfig, ModerationConfig, ServerConfig};
use crate::constants::{environments, DEFAULT_JWT_EXPIRY_HOURS};

/// Configuration for tests that never touch the environment
pub fn test_config(database_url: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
            json_logs: false,
            environment: environments::TEST.to_string(),
            cors_allowed_origins: vec!["http://localhost:5173".to_string()],
        },
        database: DatabaseConfig {
            url: database_url.to_string(),
            max_connections: 5,
        },
        jwt: JwtConfig {
            secret: "test_secret_key_for_testing_only".to_string(),
            expiry_hours: DEFAULT_JWT_EXPIRY_HOURS,
        },
        moderation: ModerationConfig::default(),
    }
}

pub mod containers {
    use testcontainers::{runners::AsyncRunner, ContainerAsync};
    use testcontainers_modules::postgres::Postgres;
    use tokio::sync::OnceCell;

    /// Running container plus its URL, resolved once so later tests
    /// don't need to talk to Docker again
    static POSTGRES: OnceCell<(ContainerAsync<Postgres>, String)> = OnceCell::const_new();

    /// Get PostgreSQL connection URL, starting the container on first use
    pub async fn postgres_url() -> String {
        let (_, url) = POSTGRES
            .get_or_init(|| async {
                let container = Postgres::default()
                    .with_user("blogsphere")
                    .with_password("blogsphere_test")
                    .with_db_name("blogsphere_test")
                    .start()
                    .await
                    .expect("Failed to start PostgreSQL container");

                let host = container.get_host().await.unwrap();
                let port = container.get_host_port_ipv4(5432).await.unwrap();
                let url = format!(
                    "postgres://blogsphere:blogsphere_test@{}:{}/blogsphere_test",
                    host, port
                );

                (container, url)
            })
            .await;

        url.clone()
    }
}

pub mod test_app {
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::{containers, test_config};
    use crate::{config::Config, db::repositories::UserRepository, models::Role, state::AppState};

    pub const TEST_PASSWORD: &str = "Password123";

    /// Create a test application backed by the shared database container
    pub async fn create_test_app() -> (Router, AppState) {
        create_test_app_with(|_| {}).await
    }

    /// Like [`create_test_app`], with the config adjusted before the state is built
    pub async fn create_test_app_with(configure: impl FnOnce(&mut Config)) -> (Router, AppState) {
        let database_url = containers::postgres_url().await;

        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        crate::db::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let mut config = test_config(&database_url);
        configure(&mut config);

        let state = AppState::new(db_pool, config);
        let app = crate::create_router(state.clone());

        (app, state)
    }

    /// A username that no other test uses
    pub fn unique_username() -> String {
        format!("u{}", &Uuid::new_v4().simple().to_string()[..12])
    }

    /// Send a JSON request and decode the JSON response
    pub async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }

    /// Register a user and return its id
    pub async fn register(app: &Router, username: &str) -> Uuid {
        let (status, body) = send(
            app,
            Method::POST,
            "/auth/register",
            None,
            Some(json!({
                "firstName": "Test",
                "lastName": "User",
                "username": username,
                "email": format!("{username}@example.com"),
                "password": TEST_PASSWORD,
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {body}");

        body["user"]["id"].as_str().unwrap().parse().unwrap()
    }

    /// Log in and return the session token
    pub async fn login(app: &Router, identifier: &str) -> String {
        let (status, body) = send(
            app,
            Method::POST,
            "/auth/login",
            None,
            Some(json!({ "identifier": identifier, "password": TEST_PASSWORD })),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");

        body["token"].as_str().unwrap().to_string()
    }

    /// Register and log in a fresh user
    pub async fn signed_in_user(app: &Router) -> (Uuid, String) {
        let username = unique_username();
        let id = register(app, &username).await;
        let token = login(app, &username).await;
        (id, token)
    }

    /// Register a fresh user, promote it and log in
    pub async fn signed_in_admin(app: &Router, state: &AppState) -> (Uuid, String) {
        let username = unique_username();
        let id = register(app, &username).await;
        UserRepository::update_role(state.db(), &id, Role::Admin)
            .await
            .unwrap();
        let token = login(app, &username).await;
        (id, token)
    }

    /// Create a blog as the given user and return its id
    pub async fn create_blog(app: &Router, token: &str, category_id: Option<Uuid>) -> Uuid {
        let (status, body) = send(
            app,
            Method::POST,
            "/blogs/create",
            Some(token),
            Some(json!({
                "title": "Original title",
                "synopsis": "A short synopsis",
                "content": "# Heading\n\nBody text",
                "categoryId": category_id,
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "create blog failed: {body}");

        body["blogId"].as_str().unwrap().parse().unwrap()
    }
}
