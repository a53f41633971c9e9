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
use uuid::Uuid;

#[sqlx::test(migrations = "./migrations")]
async fn test_create_social_media(pool: PgPool) {
    let email = generate_unique_email();
    let user = create_test_user(&pool, &generate_unique_username(), &email, "testpass123").await;

    let app = setup_test_app(pool.clone());
    let token = get_auth_token(app.clone(), &email, "testpass123").await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/socialmedias")
        .header("Authorization", format!("Bearer {}", token))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "Instagram",
                "social_media_url": "https://instagram.com/someone"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(body["data"]["name"], "Instagram");
    assert_eq!(body["data"]["user_id"], user.id.to_string());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_social_media_invalid_url(pool: PgPool) {
    let email = generate_unique_email();
    create_test_user(&pool, &generate_unique_username(), &email, "testpass123").await;

    let app = setup_test_app(pool.clone());
    let token = get_auth_token(app.clone(), &email, "testpass123").await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/socialmedias")
        .header("Authorization", format!("Bearer {}", token))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "Instagram",
                "social_media_url": "not a url"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_social_media_lifecycle(pool: PgPool) {
    let email = generate_unique_email();
    let user = create_test_user(&pool, &generate_unique_username(), &email, "testpass123").await;

    let record_id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO social_media (name, social_media_url, user_id)
         VALUES ($1, $2, $3)
         RETURNING id",
    )
    .bind("Twitter")
    .bind("https://twitter.com/someone")
    .bind(user.id)
    .fetch_one(&pool)
    .await
    .unwrap();

    let app = setup_test_app(pool.clone());
    let token = get_auth_token(app.clone(), &email, "testpass123").await;

    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/socialmedias/{}", record_id))
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/api/socialmedias/{}", record_id))
        .header("Authorization", format!("Bearer {}", token))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "Mastodon",
                "social_media_url": "https://mastodon.social/@someone"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["data"]["name"], "Mastodon");

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/socialmedias/{}", record_id))
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/socialmedias/{}", record_id))
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_social_media_not_found(pool: PgPool) {
    let email = generate_unique_email();
    create_test_user(&pool, &generate_unique_username(), &email, "testpass123").await;

    let app = setup_test_app(pool.clone());
    let token = get_auth_token(app.clone(), &email, "testpass123").await;

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/socialmedias/{}", Uuid::new_v4()))
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
