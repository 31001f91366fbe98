use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct EmployeeDoc { pub id: i64, pub name: String, pub age: i64 }

/// Body of create and full replace. Missing fields become `""` / `0`.
#[derive(ToSchema)]
pub struct EmployeeInputDoc { pub name: String, pub age: i64 }

/// Body of partial update; only present fields are changed.
#[derive(ToSchema)]
pub struct EmployeePatchDoc { pub name: Option<String>, pub age: Option<i64> }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::employees::create_employee,
        crate::routes::employees::list_employees,
        crate::routes::employees::get_employee,
        crate::routes::employees::replace_employee,
        crate::routes::employees::patch_employee,
        crate::routes::employees::delete_employee,
    ),
    components(
        schemas(
            HealthResponse,
            EmployeeDoc,
            EmployeeInputDoc,
            EmployeePatchDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "employees")
    )
)]
pub struct ApiDoc;
