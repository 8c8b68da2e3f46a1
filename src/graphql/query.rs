//! Read-only GraphQL queries
//!
//! Missing or inactive postings read as `null` or as an empty list, never as
//! an error.

use async_graphql::{Context, Object, Result};

use super::into_graphql_error;
use super::types::{ApplicationType, JobPostType};
use crate::services::JobBoardService;

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every active job post
    async fn all_job_posts(&self, ctx: &Context<'_>) -> Result<Vec<JobPostType>> {
        let service = ctx.data::<JobBoardService>()?;
        let job_posts = service
            .list_active_job_posts()
            .await
            .map_err(into_graphql_error)?;
        Ok(job_posts.into_iter().map(JobPostType::from).collect())
    }

    /// An active job post, or null
    async fn job_post_by_id(&self, ctx: &Context<'_>, id: i32) -> Result<Option<JobPostType>> {
        let service = ctx.data::<JobBoardService>()?;
        let job_post = service
            .get_active_job_post(id)
            .await
            .map_err(into_graphql_error)?;
        Ok(job_post.map(JobPostType::from))
    }

    /// Every application, including those against inactive postings
    async fn all_applications(&self, ctx: &Context<'_>) -> Result<Vec<ApplicationType>> {
        let service = ctx.data::<JobBoardService>()?;
        let applications = service
            .list_applications()
            .await
            .map_err(into_graphql_error)?;
        Ok(applications.into_iter().map(ApplicationType::from).collect())
    }

    /// Applications for an active job post
    async fn applications_by_job(
        &self,
        ctx: &Context<'_>,
        job_id: i32,
    ) -> Result<Vec<ApplicationType>> {
        let service = ctx.data::<JobBoardService>()?;
        let applications = service
            .list_applications_for_job(job_id)
            .await
            .map_err(into_graphql_error)?;
        Ok(applications.into_iter().map(ApplicationType::from).collect())
    }
}
