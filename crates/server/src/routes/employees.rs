use axum::{extract::{Path, State}, http::StatusCode, Json};
use serde::Serialize;
use service::employee::{Employee, EmployeeInput, EmployeePatch, LookupKey};
use tracing::info;

use crate::errors::{JsonApiError, DECODE_ID_FAILED};
use crate::extract::JsonBody;
use crate::metrics;
use crate::state::ServerState;

#[derive(Serialize)]
pub struct EmployeeList { pub employees: Vec<Employee> }

#[derive(Serialize)]
pub struct EmployeeEnvelope { pub employee: Employee }

#[derive(Serialize)]
pub struct Created { pub created: String }

#[derive(Serialize)]
pub struct Updated { pub updated: String }

#[derive(Serialize)]
pub struct Deleted { pub deleted: String }

fn outcome<T, E>(op: &str, res: &Result<T, E>) {
    metrics::record(op, if res.is_ok() { "ok" } else { "not_found" });
}

fn parse_id(raw: &str) -> Result<i64, JsonApiError> {
    raw.parse::<i64>().map_err(|_| JsonApiError::bad_request(DECODE_ID_FAILED))
}

#[utoipa::path(
    post, path = "/employee", tag = "employees",
    request_body = crate::openapi::EmployeeInputDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Undecodable payload")
    )
)]
pub async fn create_employee(
    State(state): State<ServerState>,
    JsonBody(input): JsonBody<EmployeeInput>,
) -> (StatusCode, Json<Created>) {
    let id = state.employees.create(input).await;
    metrics::record("create", "ok");
    let created = format!("Employee with id {id} created successfully");
    (StatusCode::CREATED, Json(Created { created }))
}

#[utoipa::path(
    get, path = "/employees", tag = "employees",
    responses((status = 200, description = "All employees in creation order"))
)]
pub async fn list_employees(State(state): State<ServerState>) -> Json<EmployeeList> {
    let employees = state.employees.list().await;
    metrics::record("list", "ok");
    Json(EmployeeList { employees })
}

/// A positive integer token is an id; anything else is a name.
#[utoipa::path(
    get, path = "/employee/{token}", tag = "employees",
    params(
        ("token" = String, Path, description = "Employee id, or name when not a positive integer")
    ),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_employee(
    State(state): State<ServerState>,
    Path(token): Path<String>,
) -> Result<Json<EmployeeEnvelope>, JsonApiError> {
    let res = state.employees.resolve(&token).await;
    outcome("get", &res);
    Ok(Json(EmployeeEnvelope { employee: res? }))
}

#[utoipa::path(
    put, path = "/employee/{token}", tag = "employees",
    params(("token" = i64, Path, description = "Employee id")),
    request_body = crate::openapi::EmployeeInputDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Undecodable payload or id"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn replace_employee(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
    JsonBody(input): JsonBody<EmployeeInput>,
) -> Result<Json<Updated>, JsonApiError> {
    let id = parse_id(&raw_id)?;
    let res = state.employees.replace(id, input).await;
    outcome("replace", &res);
    res?;
    Ok(Json(Updated { updated: format!("Employee id {id} updated successfully") }))
}

#[utoipa::path(
    patch, path = "/employee/{token}", tag = "employees",
    params(("token" = i64, Path, description = "Employee id")),
    request_body = crate::openapi::EmployeePatchDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Undecodable payload or id"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn patch_employee(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
    JsonBody(patch): JsonBody<EmployeePatch>,
) -> Result<Json<Updated>, JsonApiError> {
    let id = parse_id(&raw_id)?;
    let res = state.employees.merge_update(id, patch).await;
    outcome("patch", &res);
    res?;
    Ok(Json(Updated { updated: format!("Employee id {id} updated successfully") }))
}

#[utoipa::path(
    delete, path = "/employee/{token}", tag = "employees",
    params(
        ("token" = String, Path, description = "Employee id, or name when not a positive integer")
    ),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_employee(
    State(state): State<ServerState>,
    Path(token): Path<String>,
) -> Result<Json<Deleted>, JsonApiError> {
    let res = state.employees.delete(&token).await;
    outcome("delete", &res);
    let deleted = match res? {
        LookupKey::Id(id) => format!("Employee with id {id} deleted successfully"),
        LookupKey::Name(name) => format!("Employee with name {name} deleted successfully"),
    };
    info!(%token, "delete employee request served");
    Ok(Json(Deleted { deleted }))
}
