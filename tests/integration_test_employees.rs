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

#[tokio::test]
async fn test_employee_lifecycle() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/empleados")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "nombre": "Luis Pérez",
                "telefono": "555-0101",
                "rfc": "PELU800101XXX",
                "puesto": "Almacenista",
                "direccion": "Calle 1 #23",
                "fechaIngreso": "2024-01-15T09:00:00Z",
                "salario": 12500.0
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/empleados")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let employees = parse_body(res).await;
    let arr = employees.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["puesto"], "Almacenista");
    assert_eq!(arr[0]["rfc"], "PELU800101XXX");
    let id = arr[0]["id"].as_str().unwrap().to_string();

    // Raise the salary, leave everything else alone.
    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/empleados/{}", id))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"salario": 14000.0}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/empleados")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let employees = parse_body(res).await;
    assert_eq!(employees[0]["salario"], 14000.0);
    assert_eq!(employees[0]["nombre"], "Luis Pérez");

    let res = app.router.clone().oneshot(
        Request::builder().method("DELETE").uri(format!("/api/empleados/{}", id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/empleados")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let employees = parse_body(res).await;
    assert!(employees.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_employee_unknown_id_mutations_are_404() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri("/api/empleados/missing")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"salario": 1.0}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = app.router.clone().oneshot(
        Request::builder().method("DELETE").uri("/api/empleados/missing")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
