//! Test helpers for web API integration tests.

#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{json, Value};

use quill::config::Config;
use quill::db::{NewUser, UserRepository};
use quill::posts::{GroupRepository, NewGroup, NewPost, PostRepository};
use quill::web::WebServer;
use quill::Database;

/// Create a test configuration.
pub fn test_config(page_size: u64) -> Config {
    let mut config = Config::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.port = 0;
    config.web.jwt_secret = "test-secret-key-for-testing-only".to_string();
    config.pagination.page_size = page_size;
    config
}

/// Create a test server with an in-memory database.
pub async fn create_test_server() -> (TestServer, Database) {
    create_test_server_with_page_size(10).await
}

/// Create a test server with an in-memory database and a custom page size.
pub async fn create_test_server_with_page_size(page_size: u64) -> (TestServer, Database) {
    let config = test_config(page_size);

    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");

    let router = WebServer::new(&config, db.clone()).router();

    let server = TestServer::new(router).expect("Failed to create test server");

    (server, db)
}

/// Register a test user via the API and return the response body.
pub async fn register_user(server: &TestServer, username: &str, password: &str) -> Value {
    let response = server
        .post("/auth/register")
        .json(&json!({
            "username": username,
            "password": password
        }))
        .await;

    response.json::<Value>()
}

/// Register and log in a test user, returning the access token.
pub async fn register_and_login(server: &TestServer, username: &str, password: &str) -> String {
    register_user(server, username, password).await;

    let response = server
        .post("/auth/login")
        .json(&json!({
            "username": username,
            "password": password
        }))
        .await;

    let body: Value = response.json();
    body["data"]["access_token"]
        .as_str()
        .expect("login response has no access token")
        .to_string()
}

/// Create a user directly in the database (cannot log in).
///
/// Skips the slow Argon2 hash; use for authors that only appear in
/// listings.
pub async fn create_user_direct(db: &Database, username: &str) -> i64 {
    UserRepository::new(db.pool())
        .create(&NewUser::new(username, "unusable-hash"))
        .await
        .expect("Failed to create test user")
        .id
}

/// Create a group directly in the database.
pub async fn create_group(db: &Database, title: &str, slug: &str) -> i64 {
    GroupRepository::new(db.pool())
        .create(&NewGroup::new(title, slug, format!("{title} group")))
        .await
        .expect("Failed to create test group")
        .id
}

/// Create a post directly in the database.
pub async fn create_post(db: &Database, author_id: i64, text: &str, group_id: Option<i64>) -> i64 {
    PostRepository::new(db.pool())
        .create(&NewPost::new(text, author_id, group_id))
        .await
        .expect("Failed to create test post")
        .id
}
