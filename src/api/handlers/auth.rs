use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{LoginRequest, RegisterRequest};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let created = state.credential_service
        .register(payload.name, payload.email, &payload.password)
        .await?;

    info!("User registered: {}", created.id);
    Ok((StatusCode::CREATED, "Usuario registrado"))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let name = state.credential_service
        .authenticate(&payload.email, &payload.password)
        .await?;

    info!("User logged in: {}", payload.email);
    Ok(format!("Bienvenido {}", name))
}
