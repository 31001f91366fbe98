use async_trait::async_trait;

use crate::errors::ServiceError;

use super::domain::{Employee, EmployeeInput, EmployeePatch, LookupKey};

/// Trait abstraction for employee storage as seen by the HTTP layer.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn create(&self, input: EmployeeInput) -> i64;
    async fn list(&self) -> Vec<Employee>;
    async fn resolve(&self, token: &str) -> Result<Employee, ServiceError>;
    async fn replace(&self, id: i64, input: EmployeeInput) -> Result<(), ServiceError>;
    async fn merge_update(&self, id: i64, patch: EmployeePatch) -> Result<(), ServiceError>;
    async fn delete(&self, token: &str) -> Result<LookupKey, ServiceError>;
}
