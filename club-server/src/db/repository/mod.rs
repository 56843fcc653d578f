//! Repository Module
//!
//! CRUD operations over the SQLite tables, one module per table.
//! Repositories are free async functions taking `&SqlitePool` so side
//! effects stay observable and testable (the injected data-access context).

pub mod customer;
pub mod guest_onboarding;
pub mod membership_agreement;
pub mod quotation;
pub mod room;
pub mod service_item;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
