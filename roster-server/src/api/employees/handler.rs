//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use shared::client::{EmployeeInput, EmployeeResponse, StatusUpdateRequest};

use crate::core::ServerState;
use crate::db::repository::{EmployeeRepository, RepoError};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};

/// Bridge repository errors into API errors
fn map_repo_err(err: RepoError) -> AppError {
    match err {
        RepoError::NotFound(_) => AppError::new(ErrorCode::EmployeeNotFound),
        RepoError::Duplicate(_) => AppError::new(ErrorCode::EmployeeEmailExists),
        RepoError::Validation(violations) => violations.into_app_error(),
        RepoError::Database(message) => AppError::database(message),
    }
}

/// List all employees, newest first
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<ApiResponse<Vec<EmployeeResponse>>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employees = repo.find_all().await.map_err(map_repo_err)?;

    Ok(ApiResponse::success(
        employees.into_iter().map(EmployeeResponse::from).collect(),
    ))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<EmployeeResponse>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo
        .find_by_id(&id)
        .await
        .map_err(map_repo_err)?
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound))?;

    Ok(ApiResponse::success(employee.into()))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeInput>,
) -> AppResult<(StatusCode, ApiResponse<EmployeeResponse>)> {
    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo.create(&payload).await.map_err(map_repo_err)?;

    tracing::info!(
        employee_id = employee.employee_id,
        email = %employee.email,
        "Employee created"
    );

    Ok((StatusCode::CREATED, ApiResponse::success(employee.into())))
}

/// Update an employee
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EmployeeInput>,
) -> AppResult<ApiResponse<EmployeeResponse>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo.update(&id, &payload).await.map_err(|e| match e {
        RepoError::Duplicate(_) => AppError::with_message(
            ErrorCode::EmployeeEmailExists,
            "Email already in use by another employee.",
        ),
        other => map_repo_err(other),
    })?;

    tracing::info!(id = %id, "Employee updated");

    Ok(ApiResponse::success(employee.into()))
}

/// Switch an employee between Active and Inactive
pub async fn set_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<StatusUpdateRequest>,
) -> AppResult<ApiResponse<EmployeeResponse>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo
        .set_status(&id, &payload.status)
        .await
        .map_err(map_repo_err)?;

    tracing::info!(id = %id, status = %payload.status, "Employee status changed");

    Ok(ApiResponse::success(employee.into()))
}

/// Delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    let repo = EmployeeRepository::new(state.get_db());
    let deleted = repo.delete(&id).await.map_err(map_repo_err)?;

    if !deleted {
        return Err(AppError::new(ErrorCode::EmployeeNotFound));
    }

    tracing::info!(id = %id, "Employee deleted");

    Ok(ApiResponse::ok_with_message("Employee deleted successfully"))
}
