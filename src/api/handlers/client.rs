use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateClientRequest, UpdateClientRequest};
use crate::domain::models::client::Client;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn list_clients(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let clients = state.client_repo.list().await?;
    Ok(Json(clients))
}

pub async fn create_client(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateClientRequest>,
) -> Result<impl IntoResponse, AppError> {
    let client = Client::new(payload.name, payload.phone, payload.address, payload.purchase_count, payload.total_spent);
    let created = state.client_repo.create(&client).await?;

    info!("Created client: {}", created.id);
    Ok((StatusCode::CREATED, "Cliente creado"))
}

pub async fn update_client(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateClientRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut client = state.client_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Cliente no encontrado".into()))?;

    if let Some(val) = payload.name { client.name = val; }
    if let Some(val) = payload.phone { client.phone = val; }
    if let Some(val) = payload.address { client.address = val; }
    if let Some(val) = payload.purchase_count { client.purchase_count = val; }
    if let Some(val) = payload.total_spent { client.total_spent = val; }

    state.client_repo.update(&client).await?;
    info!("Updated client: {}", id);
    Ok("Cliente actualizado")
}

pub async fn delete_client(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !state.client_repo.delete(&id).await? {
        return Err(AppError::NotFound("Cliente no encontrado".into()));
    }

    info!("Deleted client: {}", id);
    Ok("Cliente eliminado")
}
