mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_product(app: &TestApp, body: Value) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/productos")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())).unwrap()
    ).await.unwrap()
}

async fn list_products(app: &TestApp) -> Value {
    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/productos")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await
}

#[tokio::test]
async fn test_create_then_list_includes_submitted_fields() {
    let app = TestApp::new().await;

    let res = create_product(&app, json!({
        "nombre": "Coca Cola", "precio": 18.5, "stock": 24, "categoria": "Bebidas"
    })).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let products = list_products(&app).await;
    let arr = products.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["nombre"], "Coca Cola");
    assert_eq!(arr[0]["precio"], 18.5);
    assert_eq!(arr[0]["stock"], 24);
    assert_eq!(arr[0]["categoria"], "Bebidas");
}

#[tokio::test]
async fn test_partial_update_overwrites_only_sent_fields() {
    let app = TestApp::new().await;

    create_product(&app, json!({
        "nombre": "Coca Cola", "precio": 18.5, "stock": 24, "categoria": "Bebidas"
    })).await;

    let products = list_products(&app).await;
    let id = products[0]["id"].as_str().unwrap().to_string();

    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/productos/{}", id))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "stock": 10 }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let products = list_products(&app).await;
    assert_eq!(products[0]["stock"], 10);
    assert_eq!(products[0]["nombre"], "Coca Cola");
    assert_eq!(products[0]["precio"], 18.5);
}

#[tokio::test]
async fn test_update_unknown_id_is_404_and_leaves_rows_unchanged() {
    let app = TestApp::new().await;

    create_product(&app, json!({
        "nombre": "Coca Cola", "precio": 18.5, "stock": 24, "categoria": "Bebidas"
    })).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri("/api/productos/no-such-id")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "stock": 0 }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let products = list_products(&app).await;
    assert_eq!(products[0]["stock"], 24);
}

#[tokio::test]
async fn test_delete_removes_record_and_unknown_id_is_404() {
    let app = TestApp::new().await;

    create_product(&app, json!({
        "nombre": "Coca Cola", "precio": 18.5, "stock": 24, "categoria": "Bebidas"
    })).await;

    let products = list_products(&app).await;
    let id = products[0]["id"].as_str().unwrap().to_string();

    let res = app.router.clone().oneshot(
        Request::builder().method("DELETE").uri(format!("/api/productos/{}", id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let products = list_products(&app).await;
    assert!(products.as_array().unwrap().is_empty());

    let res = app.router.clone().oneshot(
        Request::builder().method("DELETE").uri(format!("/api/productos/{}", id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
