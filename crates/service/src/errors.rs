use thiserror::Error;

use crate::employee::domain::LookupKey;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("No record exists for {0}")]
    NotFound(LookupKey),
}

impl ServiceError {
    pub fn not_found_id(id: i64) -> Self { Self::NotFound(LookupKey::Id(id)) }

    pub fn not_found_name(name: &str) -> Self { Self::NotFound(LookupKey::Name(name.to_string())) }

    /// The key that failed to match.
    pub fn key(&self) -> &LookupKey {
        match self {
            ServiceError::NotFound(key) => key,
        }
    }
}
