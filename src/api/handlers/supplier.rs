use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateSupplierRequest, UpdateSupplierRequest};
use crate::domain::models::supplier::Supplier;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn list_suppliers(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let suppliers = state.supplier_repo.list().await?;
    Ok(Json(suppliers))
}

pub async fn create_supplier(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateSupplierRequest>,
) -> Result<impl IntoResponse, AppError> {
    let supplier = Supplier::new(payload.name, payload.phone, payload.email, payload.address, payload.category);
    let created = state.supplier_repo.create(&supplier).await?;

    info!("Created supplier: {}", created.id);
    Ok((StatusCode::CREATED, "Proveedor creado"))
}

pub async fn update_supplier(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateSupplierRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut supplier = state.supplier_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Proveedor no encontrado".into()))?;

    if let Some(val) = payload.name { supplier.name = val; }
    if let Some(val) = payload.phone { supplier.phone = val; }
    if let Some(val) = payload.email { supplier.email = val; }
    if let Some(val) = payload.address { supplier.address = val; }
    if let Some(val) = payload.category { supplier.category = val; }

    state.supplier_repo.update(&supplier).await?;
    info!("Updated supplier: {}", id);
    Ok("Proveedor actualizado")
}

pub async fn delete_supplier(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !state.supplier_repo.delete(&id).await? {
        return Err(AppError::NotFound("Proveedor no encontrado".into()));
    }

    info!("Deleted supplier: {}", id);
    Ok("Proveedor eliminado")
}
