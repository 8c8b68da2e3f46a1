//! GraphQL schema
//!
//! The schema exposes the job board through a query root and a mutation root.
//! Resolvers are thin: they pull [`JobBoardService`] out of the schema data,
//! call it, and wrap the result in an object type.
//!
//! Errors reach clients as a single message with no extensions or codes.

use async_graphql::{EmptySubscription, Schema};
use tracing::error;

use crate::config::GraphQlConfig;
use crate::errors::AppError;
use crate::services::JobBoardService;

pub mod mutation;
pub mod query;
pub mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

pub type JobBoardSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the executable schema around `service`
pub fn build_schema(service: JobBoardService, config: &GraphQlConfig) -> JobBoardSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(service)
        .limit_depth(config.depth_limit)
        .limit_complexity(config.complexity_limit)
        .finish()
}

/// The schema in SDL form; needs no database
pub fn sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

/// Map a service error to the message-only form GraphQL clients see
pub(crate) fn into_graphql_error(err: AppError) -> async_graphql::Error {
    if !err.is_client_error() {
        error!("GraphQL resolver failed: {}", err);
    }
    async_graphql::Error::new(err.client_message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RepositoryError;

    #[test]
    fn test_sdl_uses_camel_case_names() {
        let sdl = sdl();

        for field in [
            "allJobPosts: [JobPostType!]!",
            "jobPostById(id: Int!): JobPostType",
            "allApplications: [ApplicationType!]!",
            "applicationsByJob(jobId: Int!): [ApplicationType!]!",
            "deleteJobPost(jobId: Int!): DeleteJobPost!",
            "deleteApplication(applicationId: Int!): DeleteApplication!",
            "jobPost: JobPostType!",
            "postedAt: DateTime!",
            "isActive: Boolean!",
            "salary: Decimal",
        ] {
            assert!(sdl.contains(field), "missing `{field}` in:\n{sdl}");
        }
    }

    #[test]
    fn test_server_errors_surface_their_message() {
        let err = into_graphql_error(
            RepositoryError::Database(sea_orm::DbErr::Custom("disk I/O error".to_string())).into(),
        );
        assert_eq!(
            err.message,
            "Repository error: Database error: Custom Error: disk I/O error"
        );

        let err = into_graphql_error(AppError::validation("Enter a valid email address."));
        assert_eq!(err.message, "Enter a valid email address.");
    }
}
