//! Error type definitions for the job board service

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Repository layer errors, including every database failure
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Validation errors
    #[error("{message}")]
    Validation { message: String },

    /// Resource not found errors.
    ///
    /// `message` is what clients see; `resource` and `id` are for logs.
    #[error("{message}")]
    NotFound {
        resource: String,
        id: String,
        message: String,
    },
}

/// Repository layer specific errors
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Database errors from SeaORM
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Constraint violations (unique, foreign key, etc.)
    #[error("Constraint violation: {constraint} - {message}")]
    ConstraintViolation { constraint: String, message: String },

    /// Record not found
    #[error("Record not found: {table} with {field} = {value}")]
    RecordNotFound {
        table: String,
        field: String,
        value: String,
    },
}

/// Convenience methods for creating common error types
impl AppError {
    /// Create a validation error with a custom message
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a not-found error carrying the message shown to clients
    pub fn not_found<R, I, M>(resource: R, id: I, message: M) -> Self
    where
        R: Into<String>,
        I: ToString,
        M: Into<String>,
    {
        Self::NotFound {
            resource: resource.into(),
            id: id.to_string(),
            message: message.into(),
        }
    }

    /// The single, unstructured message surfaced to GraphQL clients
    pub fn client_message(&self) -> String {
        self.to_string()
    }

    /// Whether the failure was caused by the caller rather than the backend
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::NotFound { .. })
    }
}

impl RepositoryError {
    /// Create a constraint-violation error
    pub fn constraint_violation<C: Into<String>, M: Into<String>>(constraint: C, message: M) -> Self {
        Self::ConstraintViolation {
            constraint: constraint.into(),
            message: message.into(),
        }
    }

    /// Create a record-not-found error
    pub fn record_not_found<T: Into<String>, F: Into<String>, V: ToString>(
        table: T,
        field: F,
        value: V,
    ) -> Self {
        Self::RecordNotFound {
            table: table.into(),
            field: field.into(),
            value: value.to_string(),
        }
    }
}
