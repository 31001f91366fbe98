use std::sync::Arc;

use service::employee::{EmployeeRepository, EmployeeStore};

#[derive(Clone)]
pub struct ServerState {
    pub employees: Arc<dyn EmployeeRepository>,
}

impl ServerState {
    pub fn new(employees: Arc<dyn EmployeeRepository>) -> Self {
        Self { employees }
    }

    /// Fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(EmployeeStore::new())
    }
}
