//! Job board service
//!
//! Business rules on top of the job post and application repositories:
//! visibility of inactive postings, the active-posting requirement for new
//! applications, and the messages reported when a mutation fails.

use tracing::{debug, info, warn};

use crate::database::Database;
use crate::database::repositories::{ApplicationSeaOrmRepository, JobPostSeaOrmRepository};
use crate::errors::{AppError, AppResult, RepositoryError};
use crate::models::{Application, ApplicationCreateRequest, JobPost, JobPostCreateRequest};
use crate::services::validation::normalize_email;

pub const JOB_POST_NOT_AVAILABLE_MESSAGE: &str = "JobPost does not exist or is not active.";
pub const JOB_POST_NOT_FOUND_MESSAGE: &str = "JobPost with the given ID does not exist.";
pub const APPLICATION_NOT_FOUND_MESSAGE: &str = "Application with the given ID does not exist.";

/// Service for job posts and the applications submitted against them
#[derive(Clone)]
pub struct JobBoardService {
    job_post_repo: JobPostSeaOrmRepository,
    application_repo: ApplicationSeaOrmRepository,
}

impl JobBoardService {
    pub fn new(
        job_post_repo: JobPostSeaOrmRepository,
        application_repo: ApplicationSeaOrmRepository,
    ) -> Self {
        Self {
            job_post_repo,
            application_repo,
        }
    }

    /// Build the service with repositories sharing the database's connection
    pub fn from_database(database: &Database) -> Self {
        Self::new(
            JobPostSeaOrmRepository::new(database.connection()),
            ApplicationSeaOrmRepository::new(database.connection()),
        )
    }

    /// Active job posts only
    pub async fn list_active_job_posts(&self) -> AppResult<Vec<JobPost>> {
        Ok(self.job_post_repo.find_active().await?)
    }

    /// An active job post, or `None` when it is missing or inactive
    pub async fn get_active_job_post(&self, id: i32) -> AppResult<Option<JobPost>> {
        Ok(self.job_post_repo.find_active_by_id(id).await?)
    }

    /// A job post whatever its active flag; used to resolve an application's owner
    pub async fn get_job_post(&self, id: i32) -> AppResult<Option<JobPost>> {
        Ok(self.job_post_repo.find_by_id(id).await?)
    }

    pub async fn list_applications(&self) -> AppResult<Vec<Application>> {
        Ok(self.application_repo.find_all().await?)
    }

    /// Applications for an active job post; empty when the post is missing or inactive
    pub async fn list_applications_for_job(&self, job_post_id: i32) -> AppResult<Vec<Application>> {
        if self.job_post_repo.find_active_by_id(job_post_id).await?.is_none() {
            debug!(job_post_id, "Job post missing or inactive, no applications listed");
            return Ok(Vec::new());
        }

        Ok(self.application_repo.find_by_job_post(job_post_id).await?)
    }

    pub async fn create_job_post(&self, request: JobPostCreateRequest) -> AppResult<JobPost> {
        let job_post = self.job_post_repo.create(request).await?;
        info!(
            job_post_id = job_post.id,
            title = %job_post,
            company = %job_post.company,
            "Created job post"
        );
        Ok(job_post)
    }

    /// Submit an application against an active job post
    pub async fn create_application(
        &self,
        request: ApplicationCreateRequest,
    ) -> AppResult<Application> {
        let job_post = self
            .job_post_repo
            .find_active_by_id(request.job_post_id)
            .await?
            .ok_or_else(|| {
                warn!(
                    job_post_id = request.job_post_id,
                    "Rejected application for missing or inactive job post"
                );
                AppError::not_found(
                    "job_post",
                    request.job_post_id,
                    JOB_POST_NOT_AVAILABLE_MESSAGE,
                )
            })?;

        let applicant_email = normalize_email(&request.applicant_email)?;
        let job_post_id = request.job_post_id;
        let application = self
            .application_repo
            .create(ApplicationCreateRequest {
                applicant_email,
                ..request
            })
            .await
            .map_err(|err| match err {
                // The posting was deleted after the active check
                RepositoryError::ConstraintViolation { .. } => {
                    AppError::not_found("job_post", job_post_id, JOB_POST_NOT_AVAILABLE_MESSAGE)
                }
                other => other.into(),
            })?;

        info!(
            application_id = application.id,
            job_post_id = job_post.id,
            "Received application: {}",
            application.label(&job_post)
        );
        Ok(application)
    }

    /// Delete a job post, active or not, along with its applications
    pub async fn delete_job_post(&self, id: i32) -> AppResult<()> {
        if !self.job_post_repo.delete_with_applications(id).await? {
            return Err(AppError::not_found("job_post", id, JOB_POST_NOT_FOUND_MESSAGE));
        }

        info!(job_post_id = id, "Deleted job post and its applications");
        Ok(())
    }

    pub async fn delete_application(&self, id: i32) -> AppResult<()> {
        if !self.application_repo.delete(id).await? {
            return Err(AppError::not_found(
                "application",
                id,
                APPLICATION_NOT_FOUND_MESSAGE,
            ));
        }

        info!(application_id = id, "Deleted application");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::validation::INVALID_EMAIL_MESSAGE;
    use tracing_test::traced_test;

    async fn create_test_service() -> (Database, JobBoardService) {
        let database = Database::new_in_memory()
            .await
            .expect("Failed to create test database");
        let service = JobBoardService::from_database(&database);
        (database, service)
    }

    fn job_post_request(title: &str) -> JobPostCreateRequest {
        JobPostCreateRequest {
            title: title.to_string(),
            description: "Own the hiring pipeline".to_string(),
            company: "Acme".to_string(),
            location: "Berlin".to_string(),
            salary: None,
        }
    }

    fn application_request(job_post_id: i32, email: &str) -> ApplicationCreateRequest {
        ApplicationCreateRequest {
            job_post_id,
            applicant_name: "Grace Hopper".to_string(),
            applicant_email: email.to_string(),
            resume: Some("grace.pdf".to_string()),
        }
    }

    #[tokio::test]
    async fn test_created_job_post_is_listed() {
        let (_db, service) = create_test_service().await;

        let created = service.create_job_post(job_post_request("Engineer")).await.unwrap();
        assert!(created.is_active);

        let listed = service.list_active_job_posts().await.unwrap();
        assert_eq!(listed, vec![created.clone()]);

        let fetched = service.get_active_job_post(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_inactive_job_post_is_hidden_from_reads() {
        let (db, service) = create_test_service().await;
        let job_post = service.create_job_post(job_post_request("Retired")).await.unwrap();
        service
            .create_application(application_request(job_post.id, "grace@example.com"))
            .await
            .unwrap();

        JobPostSeaOrmRepository::new(db.connection())
            .set_active(job_post.id, false)
            .await
            .unwrap();

        assert!(service.list_active_job_posts().await.unwrap().is_empty());
        assert_eq!(service.get_active_job_post(job_post.id).await.unwrap(), None);
        assert!(service.list_applications_for_job(job_post.id).await.unwrap().is_empty());
        // Still reachable through its applications and still counted overall
        assert!(service.get_job_post(job_post.id).await.unwrap().is_some());
        assert_eq!(service.list_applications().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_job_post_reads_are_empty_not_errors() {
        let (_db, service) = create_test_service().await;

        assert_eq!(service.get_active_job_post(404).await.unwrap(), None);
        assert!(service.list_applications_for_job(404).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_application_requires_active_job_post() {
        let (db, service) = create_test_service().await;

        let err = service
            .create_application(application_request(404, "grace@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err.client_message(), JOB_POST_NOT_AVAILABLE_MESSAGE);

        let job_post = service.create_job_post(job_post_request("Paused")).await.unwrap();
        JobPostSeaOrmRepository::new(db.connection())
            .set_active(job_post.id, false)
            .await
            .unwrap();

        let err = service
            .create_application(application_request(job_post.id, "grace@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err.client_message(), JOB_POST_NOT_AVAILABLE_MESSAGE);
        assert!(service.list_applications().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_application_email_is_validated_and_trimmed() {
        let (_db, service) = create_test_service().await;
        let job_post = service.create_job_post(job_post_request("Engineer")).await.unwrap();

        let err = service
            .create_application(application_request(job_post.id, "grace-at-example"))
            .await
            .unwrap_err();
        assert_eq!(err.client_message(), INVALID_EMAIL_MESSAGE);

        let application = service
            .create_application(application_request(job_post.id, " grace@example.com "))
            .await
            .unwrap();
        assert_eq!(application.applicant_email, "grace@example.com");
        assert_eq!(application.job_post_id, job_post.id);
    }

    #[tokio::test]
    async fn test_missing_resume_is_stored_empty() {
        let (_db, service) = create_test_service().await;
        let job_post = service.create_job_post(job_post_request("Engineer")).await.unwrap();

        let application = service
            .create_application(ApplicationCreateRequest {
                resume: None,
                ..application_request(job_post.id, "grace@example.com")
            })
            .await
            .unwrap();
        assert_eq!(application.resume, "");
    }

    #[tokio::test]
    async fn test_delete_job_post_cascades_to_applications() {
        let (_db, service) = create_test_service().await;
        let doomed = service.create_job_post(job_post_request("Doomed")).await.unwrap();
        let kept = service.create_job_post(job_post_request("Kept")).await.unwrap();

        service
            .create_application(application_request(doomed.id, "a@example.com"))
            .await
            .unwrap();
        service
            .create_application(application_request(doomed.id, "b@example.com"))
            .await
            .unwrap();
        let survivor = service
            .create_application(application_request(kept.id, "c@example.com"))
            .await
            .unwrap();

        service.delete_job_post(doomed.id).await.unwrap();

        assert_eq!(service.list_applications().await.unwrap(), vec![survivor]);
        assert_eq!(service.get_job_post(doomed.id).await.unwrap(), None);

        let err = service.delete_job_post(doomed.id).await.unwrap_err();
        assert_eq!(err.client_message(), JOB_POST_NOT_FOUND_MESSAGE);
    }

    #[tokio::test]
    async fn test_inactive_job_post_can_still_be_deleted() {
        let (db, service) = create_test_service().await;
        let job_post = service.create_job_post(job_post_request("Paused")).await.unwrap();
        JobPostSeaOrmRepository::new(db.connection())
            .set_active(job_post.id, false)
            .await
            .unwrap();

        service.delete_job_post(job_post.id).await.unwrap();
        assert_eq!(service.get_job_post(job_post.id).await.unwrap(), None);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_mutations_are_logged() {
        let (_db, service) = create_test_service().await;
        let job_post = service.create_job_post(job_post_request("Engineer")).await.unwrap();
        service
            .create_application(application_request(job_post.id, "grace@example.com"))
            .await
            .unwrap();
        service.delete_job_post(job_post.id).await.unwrap();

        assert!(logs_contain("Created job post"));
        assert!(logs_contain("Received application: Grace Hopper - Engineer"));
        assert!(logs_contain("Deleted job post and its applications"));
    }

    #[tokio::test]
    async fn test_delete_application() {
        let (_db, service) = create_test_service().await;
        let job_post = service.create_job_post(job_post_request("Engineer")).await.unwrap();
        let application = service
            .create_application(application_request(job_post.id, "grace@example.com"))
            .await
            .unwrap();

        service.delete_application(application.id).await.unwrap();
        assert!(service.list_applications().await.unwrap().is_empty());

        let err = service.delete_application(application.id).await.unwrap_err();
        assert_eq!(err.client_message(), APPLICATION_NOT_FOUND_MESSAGE);
    }
}
