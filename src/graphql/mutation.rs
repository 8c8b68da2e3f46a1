//! GraphQL mutations

use async_graphql::{Context, Object, Result};
use tracing::debug;

use super::into_graphql_error;
use super::types::{
    ApplicationType, CreateApplicationPayload, CreateJobPostPayload, DeleteApplicationPayload,
    DeleteJobPostPayload, JobPostType,
};
use crate::models::{ApplicationCreateRequest, JobPostCreateRequest};
use crate::services::JobBoardService;
use crate::services::validation::normalize_salary;

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_job_post(
        &self,
        ctx: &Context<'_>,
        title: String,
        description: String,
        company: String,
        location: String,
        salary: Option<f64>,
    ) -> Result<CreateJobPostPayload> {
        let service = ctx.data::<JobBoardService>()?;
        let salary = salary
            .map(normalize_salary)
            .transpose()
            .map_err(into_graphql_error)?;

        let job_post = service
            .create_job_post(JobPostCreateRequest {
                title,
                description,
                company,
                location,
                salary,
            })
            .await
            .map_err(into_graphql_error)?;

        Ok(CreateJobPostPayload {
            job_post: JobPostType::from(job_post),
        })
    }

    async fn create_application(
        &self,
        ctx: &Context<'_>,
        job_id: i32,
        applicant_name: String,
        applicant_email: String,
        resume: Option<String>,
    ) -> Result<CreateApplicationPayload> {
        let service = ctx.data::<JobBoardService>()?;
        let application = service
            .create_application(ApplicationCreateRequest {
                job_post_id: job_id,
                applicant_name,
                applicant_email,
                resume,
            })
            .await
            .map_err(into_graphql_error)?;

        Ok(CreateApplicationPayload {
            application: ApplicationType::from(application),
        })
    }

    /// Delete a job post and every application submitted against it
    async fn delete_job_post(&self, ctx: &Context<'_>, job_id: i32) -> Result<DeleteJobPostPayload> {
        let service = ctx.data::<JobBoardService>()?;
        service
            .delete_job_post(job_id)
            .await
            .map_err(into_graphql_error)?;

        debug!(job_post_id = job_id, "deleteJobPost resolved");
        Ok(DeleteJobPostPayload { success: true })
    }

    async fn delete_application(
        &self,
        ctx: &Context<'_>,
        application_id: i32,
    ) -> Result<DeleteApplicationPayload> {
        let service = ctx.data::<JobBoardService>()?;
        service
            .delete_application(application_id)
            .await
            .map_err(into_graphql_error)?;

        Ok(DeleteApplicationPayload { success: true })
    }
}
