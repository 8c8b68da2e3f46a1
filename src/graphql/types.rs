//! GraphQL object types

use async_graphql::{Context, ID, Object, Result, SimpleObject};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::models::{Application, JobPost};
use crate::services::JobBoardService;
use crate::services::job_board::JOB_POST_NOT_FOUND_MESSAGE;

use super::into_graphql_error;

pub struct JobPostType(pub JobPost);

#[Object(name = "JobPostType")]
impl JobPostType {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn description(&self) -> &str {
        &self.0.description
    }

    async fn company(&self) -> &str {
        &self.0.company
    }

    async fn location(&self) -> &str {
        &self.0.location
    }

    async fn salary(&self) -> Option<Decimal> {
        self.0.salary
    }

    async fn posted_at(&self) -> DateTime<Utc> {
        self.0.posted_at
    }

    async fn is_active(&self) -> bool {
        self.0.is_active
    }
}

impl From<JobPost> for JobPostType {
    fn from(job_post: JobPost) -> Self {
        Self(job_post)
    }
}

pub struct ApplicationType(pub Application);

#[Object(name = "ApplicationType")]
impl ApplicationType {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    /// The owning posting, whether or not it is still active
    async fn job_post(&self, ctx: &Context<'_>) -> Result<JobPostType> {
        let service = ctx.data::<JobBoardService>()?;
        service
            .get_job_post(self.0.job_post_id)
            .await
            .map_err(into_graphql_error)?
            .map(JobPostType::from)
            .ok_or_else(|| async_graphql::Error::new(JOB_POST_NOT_FOUND_MESSAGE))
    }

    async fn applicant_name(&self) -> &str {
        &self.0.applicant_name
    }

    async fn applicant_email(&self) -> &str {
        &self.0.applicant_email
    }

    async fn resume(&self) -> &str {
        &self.0.resume
    }

    async fn applied_at(&self) -> DateTime<Utc> {
        self.0.applied_at
    }
}

impl From<Application> for ApplicationType {
    fn from(application: Application) -> Self {
        Self(application)
    }
}

#[derive(SimpleObject)]
#[graphql(name = "CreateJobPost")]
pub struct CreateJobPostPayload {
    pub job_post: JobPostType,
}

#[derive(SimpleObject)]
#[graphql(name = "CreateApplication")]
pub struct CreateApplicationPayload {
    pub application: ApplicationType,
}

#[derive(SimpleObject)]
#[graphql(name = "DeleteJobPost")]
pub struct DeleteJobPostPayload {
    pub success: bool,
}

#[derive(SimpleObject)]
#[graphql(name = "DeleteApplication")]
pub struct DeleteApplicationPayload {
    pub success: bool,
}
