use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateProductRequest, UpdateProductRequest};
use crate::domain::models::product::Product;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let products = state.product_repo.list().await?;
    Ok(Json(products))
}

pub async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, AppError> {
    let product = Product::new(payload.name, payload.price, payload.stock, payload.category);
    let created = state.product_repo.create(&product).await?;

    info!("Created product: {}", created.id);
    Ok((StatusCode::CREATED, "Producto creado"))
}

pub async fn update_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut product = state.product_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Producto no encontrado".into()))?;

    if let Some(val) = payload.name { product.name = val; }
    if let Some(val) = payload.price { product.price = val; }
    if let Some(val) = payload.stock { product.stock = val; }
    if let Some(val) = payload.category { product.category = val; }

    state.product_repo.update(&product).await?;
    info!("Updated product: {}", id);
    Ok("Producto actualizado")
}

pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !state.product_repo.delete(&id).await? {
        return Err(AppError::NotFound("Producto no encontrado".into()));
    }

    info!("Deleted product: {}", id);
    Ok("Producto eliminado")
}
