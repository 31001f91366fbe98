//! Service layer owning the employee record store.
//! - Keeps lookup, id allocation and merge rules out of the HTTP layer.
//! - Exposes a repository trait so the transport only sees an abstract store.
//! - Provides a single error type for missing records.

pub mod errors;
pub mod employee;
