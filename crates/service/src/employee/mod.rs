pub mod domain;
pub mod repository;
pub mod store;
pub mod table;

pub use domain::{Employee, EmployeeInput, EmployeePatch, LookupKey};
pub use repository::EmployeeRepository;
pub use store::EmployeeStore;
