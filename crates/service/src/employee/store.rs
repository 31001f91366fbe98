use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::errors::ServiceError;

use super::domain::{Employee, EmployeeInput, EmployeePatch, LookupKey};
use super::repository::EmployeeRepository;
use super::table::EmployeeTable;

/// Shared in-memory employee store.
///
/// Wraps an [`EmployeeTable`] in a single `RwLock`: lookups share the read
/// guard, every mutation takes the write guard. State lives as long as the
/// process; nothing is persisted.
#[derive(Clone, Default)]
pub struct EmployeeStore {
    inner: Arc<RwLock<EmployeeTable>>,
}

impl EmployeeStore {
    pub fn new() -> Arc<Self> { Arc::new(Self::default()) }

    /// Create a record and return its id.
    pub async fn create(&self, input: EmployeeInput) -> i64 {
        let mut table = self.inner.write().await;
        let id = table.create(input);
        info!(id, "employee created");
        id
    }

    /// Snapshot of all records in store order.
    pub async fn list(&self) -> Vec<Employee> {
        let table = self.inner.read().await;
        table.list_all().to_vec()
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Employee, ServiceError> {
        let table = self.inner.read().await;
        table.find_by_id(id).cloned().inspect_err(log_miss)
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Employee, ServiceError> {
        let table = self.inner.read().await;
        table.find_by_name(name).cloned().inspect_err(log_miss)
    }

    /// Look up by id-or-name token.
    pub async fn resolve(&self, token: &str) -> Result<Employee, ServiceError> {
        let table = self.inner.read().await;
        table.resolve(token).cloned().inspect_err(log_miss)
    }

    pub async fn replace(&self, id: i64, input: EmployeeInput) -> Result<(), ServiceError> {
        let mut table = self.inner.write().await;
        table.replace(id, input).inspect_err(log_miss)?;
        info!(id, "employee replaced");
        Ok(())
    }

    pub async fn merge_update(&self, id: i64, patch: EmployeePatch) -> Result<(), ServiceError> {
        let mut table = self.inner.write().await;
        table.merge_update(id, patch).inspect_err(log_miss)?;
        info!(id, "employee patched");
        Ok(())
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        let mut table = self.inner.write().await;
        table.delete_by_id(id).inspect_err(log_miss)?;
        info!(id, "employee deleted");
        Ok(())
    }

    pub async fn delete_by_name(&self, name: &str) -> Result<(), ServiceError> {
        let mut table = self.inner.write().await;
        table.delete_by_name(name).inspect_err(log_miss)?;
        info!(%name, "employee deleted");
        Ok(())
    }

    /// Delete by id-or-name token; returns the key that matched.
    pub async fn delete(&self, token: &str) -> Result<LookupKey, ServiceError> {
        let mut table = self.inner.write().await;
        let key = table.delete(token).inspect_err(log_miss)?;
        info!(%key, "employee deleted");
        Ok(key)
    }
}

fn log_miss(err: &ServiceError) {
    debug!(key = %err.key(), "employee lookup missed");
}

#[async_trait::async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn create(&self, input: EmployeeInput) -> i64 { self.create(input).await }
    async fn list(&self) -> Vec<Employee> { self.list().await }

    async fn resolve(&self, token: &str) -> Result<Employee, ServiceError> {
        self.resolve(token).await
    }

    async fn replace(&self, id: i64, input: EmployeeInput) -> Result<(), ServiceError> {
        self.replace(id, input).await
    }

    async fn merge_update(&self, id: i64, patch: EmployeePatch) -> Result<(), ServiceError> {
        self.merge_update(id, patch).await
    }

    async fn delete(&self, token: &str) -> Result<LookupKey, ServiceError> {
        self.delete(token).await
    }
}
