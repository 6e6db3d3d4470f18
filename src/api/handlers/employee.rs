use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateEmployeeRequest, UpdateEmployeeRequest};
use crate::domain::models::employee::{Employee, NewEmployeeParams};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn list_employees(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let employees = state.employee_repo.list().await?;
    Ok(Json(employees))
}

pub async fn create_employee(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateEmployeeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let employee = Employee::new(NewEmployeeParams {
        name: payload.name,
        phone: payload.phone,
        tax_id: payload.tax_id,
        position: payload.position,
        address: payload.address,
        hired_at: payload.hired_at,
        salary: payload.salary,
    });
    let created = state.employee_repo.create(&employee).await?;

    info!("Created employee: {}", created.id);
    Ok((StatusCode::CREATED, "Empleado creado"))
}

pub async fn update_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateEmployeeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut employee = state.employee_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Empleado no encontrado".into()))?;

    if let Some(val) = payload.name { employee.name = val; }
    if let Some(val) = payload.phone { employee.phone = val; }
    if let Some(val) = payload.tax_id { employee.tax_id = val; }
    if let Some(val) = payload.position { employee.position = val; }
    if let Some(val) = payload.address { employee.address = val; }
    if let Some(val) = payload.hired_at { employee.hired_at = Some(val); }
    if let Some(val) = payload.salary { employee.salary = val; }

    state.employee_repo.update(&employee).await?;
    info!("Updated employee: {}", id);
    Ok("Empleado actualizado")
}

pub async fn delete_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !state.employee_repo.delete(&id).await? {
        return Err(AppError::NotFound("Empleado no encontrado".into()));
    }

    info!("Deleted employee: {}", id);
    Ok("Empleado eliminado")
}
