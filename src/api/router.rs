use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put, delete},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, auth, product, category, employee, supplier, client};
use tower_http::{
    cors::CorsLayer,
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/registro", post(auth::register))
        .route("/login", post(auth::login))

        // Products
        .route("/api/productos", get(product::list_products).post(product::create_product))
        .route("/api/productos/{id}", put(product::update_product).delete(product::delete_product))

        // Categories (list carries totalProductos)
        .route("/api/categorias", get(category::list_categories).post(category::create_category))
        .route("/api/categorias/{id}", put(category::update_category).delete(category::delete_category))

        // Employees
        .route("/api/empleados", get(employee::list_employees).post(employee::create_employee))
        .route("/api/empleados/{id}", put(employee::update_employee).delete(employee::delete_employee))

        // Suppliers
        .route("/api/proveedores", get(supplier::list_suppliers).post(supplier::create_supplier))
        .route("/api/proveedores/{id}", put(supplier::update_supplier).delete(supplier::delete_supplier))

        // Clients
        .route("/api/clientes", get(client::list_clients).post(client::create_client))
        .route("/api/clientes/{id}", put(client::update_client).delete(client::delete_client))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
