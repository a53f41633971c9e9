use axum::body::Body;
use axum::http::Request;
use http_body_util::BodyExt;
use photogram::config::cors::CorsConfig;
use photogram::config::jwt::JwtConfig;
use photogram::router::init_router;
use photogram::state::AppState;
use photogram::utils::password::hash_password;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "test-secret-key-for-integration-tests";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        token_expiry: 259_200,
    }
}

pub fn setup_test_app(pool: PgPool) -> axum::Router {
    let state = AppState {
        db: pool,
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
    };
    init_router(state)
}

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Inserts a user directly, bypassing the register endpoint.
pub async fn create_test_user(pool: &PgPool, username: &str, email: &str, password: &str) -> TestUser {
    let hashed = hash_password(password).unwrap();

    let id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (username, email, password, age)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind(username)
    .bind(email)
    .bind(&hashed)
    .bind(20)
    .fetch_one(pool)
    .await
    .unwrap();

    TestUser {
        id,
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[allow(dead_code)]
pub async fn create_test_photo(pool: &PgPool, user_id: Uuid, title: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO photos (title, caption, photo_url, user_id)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind(title)
    .bind("test caption")
    .bind("https://example.com/photo.jpg")
    .bind(user_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Logs in through the API and returns the bearer token.
pub async fn get_auth_token(app: axum::Router, email: &str, password: &str) -> String {
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "email": email,
                "password": password
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    body["data"]["token"].as_str().unwrap().to_string()
}

pub fn generate_unique_username() -> String {
    format!("user-{}", Uuid::new_v4())
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}
