//! Business logic layer
//!
//! Services sit between the GraphQL resolvers and the repositories. They own
//! the active-posting rules and input normalization.

pub mod job_board;
pub mod validation;

pub use job_board::JobBoardService;
