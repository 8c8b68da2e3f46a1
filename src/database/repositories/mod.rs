//! SeaORM repository implementations
//!
//! Repositories speak in domain models (`crate::models`) and hide the entity
//! types. They enforce no business rules beyond what the schema does.

pub mod application;
pub mod job_post;

// Re-export for convenience
pub use application::ApplicationSeaOrmRepository;
pub use job_post::JobPostSeaOrmRepository;
