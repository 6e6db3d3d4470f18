use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::domain::models::category::Category;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

/// Listing includes the per-category product count computed by the store.
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let categories = state.category_repo.list_with_counts().await?;
    Ok(Json(categories))
}

pub async fn create_category(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateCategoryRequest>,
) -> Result<impl IntoResponse, AppError> {
    let category = Category::new(payload.name, payload.description);
    let created = state.category_repo.create(&category).await?;

    info!("Created category: {}", created.id);
    Ok((StatusCode::CREATED, "Categoría creada"))
}

pub async fn update_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut category = state.category_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Categoría no encontrada".into()))?;

    // A rename silently orphans products still carrying the old name;
    // the association is by name string, not by id.
    if let Some(val) = payload.name { category.name = val; }
    if let Some(val) = payload.description { category.description = val; }

    state.category_repo.update(&category).await?;
    info!("Updated category: {}", id);
    Ok("Categoría actualizada")
}

pub async fn delete_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !state.category_repo.delete(&id).await? {
        return Err(AppError::NotFound("Categoría no encontrada".into()));
    }

    info!("Deleted category: {}", id);
    Ok("Categoría eliminada")
}
