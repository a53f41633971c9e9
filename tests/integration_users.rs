mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{
    create_test_user, generate_unique_email, generate_unique_username, get_auth_token,
    setup_test_app,
};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "./migrations")]
async fn test_profile_requires_auth(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let request = Request::builder()
        .method("GET")
        .uri("/api/users/profile")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_profile_rejects_non_bearer_scheme(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let request = Request::builder()
        .method("GET")
        .uri("/api/users/profile")
        .header("Authorization", "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_profile_rejects_garbage_token(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let request = Request::builder()
        .method("GET")
        .uri("/api/users/profile")
        .header("Authorization", "Bearer not.a.token")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_profile(pool: PgPool) {
    let username = generate_unique_username();
    let email = generate_unique_email();
    let user = create_test_user(&pool, &username, &email, "testpass123").await;

    let app = setup_test_app(pool.clone());
    let token = get_auth_token(app.clone(), &email, "testpass123").await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/users/profile")
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(body["data"]["id"], user.id.to_string());
    assert_eq!(body["data"]["username"], username);
    assert!(body["data"].get("password").is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_partial_update_keeps_unset_fields(pool: PgPool) {
    let username = generate_unique_username();
    let email = generate_unique_email();
    let user = create_test_user(&pool, &username, &email, "testpass123").await;

    let app = setup_test_app(pool.clone());
    let token = get_auth_token(app.clone(), &email, "testpass123").await;

    // Only age is sent; username and email must survive.
    let request = Request::builder()
        .method("PUT")
        .uri(format!("/api/users/{}", user.id))
        .header("Authorization", format!("Bearer {}", token))
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&json!({"age": 33})).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(body["data"]["age"], 33);
    assert_eq!(body["data"]["username"], username);
    assert_eq!(body["data"]["email"], email);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_other_user_forbidden(pool: PgPool) {
    let email = generate_unique_email();
    create_test_user(&pool, &generate_unique_username(), &email, "testpass123").await;
    let victim = create_test_user(
        &pool,
        &generate_unique_username(),
        &generate_unique_email(),
        "testpass123",
    )
    .await;

    let app = setup_test_app(pool.clone());
    let token = get_auth_token(app.clone(), &email, "testpass123").await;

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/api/users/{}", victim.id))
        .header("Authorization", format!("Bearer {}", token))
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&json!({"age": 99})).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_malformed_user_id(pool: PgPool) {
    let email = generate_unique_email();
    create_test_user(&pool, &generate_unique_username(), &email, "testpass123").await;

    let app = setup_test_app(pool.clone());
    let token = get_auth_token(app.clone(), &email, "testpass123").await;

    let request = Request::builder()
        .method("PUT")
        .uri("/api/users/not-a-uuid")
        .header("Authorization", format!("Bearer {}", token))
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&json!({"age": 30})).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_duplicate_username_conflict(pool: PgPool) {
    let taken = generate_unique_username();
    create_test_user(&pool, &taken, &generate_unique_email(), "testpass123").await;

    let email = generate_unique_email();
    let user = create_test_user(&pool, &generate_unique_username(), &email, "testpass123").await;

    let app = setup_test_app(pool.clone());
    let token = get_auth_token(app.clone(), &email, "testpass123").await;

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/api/users/{}", user.id))
        .header("Authorization", format!("Bearer {}", token))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({"username": taken})).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["data"]["error"], "Username already exists");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_own_account(pool: PgPool) {
    let email = generate_unique_email();
    let user = create_test_user(&pool, &generate_unique_username(), &email, "testpass123").await;

    let app = setup_test_app(pool.clone());
    let token = get_auth_token(app.clone(), &email, "testpass123").await;

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/users/{}", user.id))
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Credentials no longer work.
    let login = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "email": email,
                "password": "testpass123"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(login).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_other_user_forbidden(pool: PgPool) {
    let email = generate_unique_email();
    create_test_user(&pool, &generate_unique_username(), &email, "testpass123").await;
    let victim = create_test_user(
        &pool,
        &generate_unique_username(),
        &generate_unique_email(),
        "testpass123",
    )
    .await;

    let app = setup_test_app(pool.clone());
    let token = get_auth_token(app.clone(), &email, "testpass123").await;

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/users/{}", victim.id))
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
