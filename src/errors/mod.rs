//! Centralized error handling for the job board service
//!
//! Errors are split by layer so each layer reports failures in its own terms:
//!
//! - **Repository Errors**: SeaORM failures, missing rows, constraint violations
//! - **Application Errors**: validation and not-found failures
//!   raised by the service layer
//!
//! At the GraphQL boundary every error collapses into a single message string;
//! see [`AppError::client_message`].
//!
//! # Usage
//!
//! ```rust
//! use job_board::errors::{AppError, AppResult};
//!
//! fn example_function() -> AppResult<String> {
//!     Err(AppError::validation("Enter a valid email address."))
//! }
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for Repository Results
pub type RepositoryResult<T> = Result<T, RepositoryError>;
