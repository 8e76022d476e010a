pub mod certificates;
pub mod internships;
pub mod students;
pub mod tasks;

pub use certificates::*;
pub use internships::*;
pub use students::*;
pub use tasks::*;

use thiserror::Error;

use crate::store::StoreError;

/// Domain-operation failures, translated to HTTP status codes at the API
/// layer: `InvalidInput` → 400, `NotFound` → 404, `Store` → 500.
///
/// Idempotent duplicates (re-adding a student id, re-assigning a student to a
/// domain) are not errors; the operations report them as success-without-change
/// outcomes and skip the write.
#[derive(Debug, Error)]
pub enum OpError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl OpError {
    fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}
