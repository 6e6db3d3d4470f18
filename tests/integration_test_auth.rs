mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::TestApp;
use serde_json::json;
use tower::ServiceExt;

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn register(app: &TestApp, name: &str, email: &str, password: &str) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("POST").uri("/registro")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "nombre": name, "email": email, "password": password
            }).to_string())).unwrap()
    ).await.unwrap()
}

async fn login(app: &TestApp, email: &str, password: &str) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("POST").uri("/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "email": email, "password": password
            }).to_string())).unwrap()
    ).await.unwrap()
}

#[tokio::test]
async fn test_register_then_login_returns_display_name() {
    let app = TestApp::new().await;

    let res = register(&app, "Ana", "ana@example.com", "s3cret").await;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(body_string(res).await, "Usuario registrado");

    let res = login(&app, "ana@example.com", "s3cret").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_string(res).await, "Bienvenido Ana");
}

#[tokio::test]
async fn test_login_wrong_password_is_invalid_credentials() {
    let app = TestApp::new().await;

    register(&app, "Ana", "ana@example.com", "s3cret").await;

    let res = login(&app, "ana@example.com", "wrong").await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // Wrong password must never be reported as an unknown user.
    let body = body_string(res).await;
    assert!(body.contains("Contraseña incorrecta"), "unexpected body: {}", body);
}

#[tokio::test]
async fn test_login_unknown_email_is_user_not_found() {
    let app = TestApp::new().await;

    let res = login(&app, "ghost@example.com", "whatever").await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let body = body_string(res).await;
    assert!(body.contains("Usuario no encontrado"), "unexpected body: {}", body);
}

#[tokio::test]
async fn test_password_is_stored_hashed() {
    let app = TestApp::new().await;

    register(&app, "Ana", "ana@example.com", "s3cret").await;

    let stored: String = sqlx::query_scalar("SELECT password_hash FROM users WHERE email = ?")
        .bind("ana@example.com")
        .fetch_one(&app.pool)
        .await
        .unwrap();

    assert_ne!(stored, "s3cret");
    assert!(stored.starts_with("$argon2"));
}

#[tokio::test]
async fn test_duplicate_email_registration_conflicts() {
    let app = TestApp::new().await;

    let res = register(&app, "Ana", "ana@example.com", "s3cret").await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = register(&app, "Otra", "ana@example.com", "other").await;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    // The first registration still wins at login.
    let res = login(&app, "ana@example.com", "s3cret").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_string(res).await, "Bienvenido Ana");
}
