//! SeaORM-based application repository implementation

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    SqlErr,
};
use std::sync::Arc;

use crate::entities::{applications, prelude::Applications};
use crate::errors::{RepositoryError, RepositoryResult};
use crate::models::{Application, ApplicationCreateRequest};

/// SeaORM-based repository for application operations
#[derive(Clone)]
pub struct ApplicationSeaOrmRepository {
    connection: Arc<DatabaseConnection>,
}

impl ApplicationSeaOrmRepository {
    /// Create a new repository instance
    pub fn new(connection: Arc<DatabaseConnection>) -> Self {
        Self { connection }
    }

    /// Insert a new application.
    ///
    /// The owning job post must exist, otherwise the foreign key rejects the
    /// row with [`RepositoryError::ConstraintViolation`]. Callers are
    /// responsible for checking that it is active.
    pub async fn create(&self, request: ApplicationCreateRequest) -> RepositoryResult<Application> {
        let active_model = applications::ActiveModel {
            job_post_id: Set(request.job_post_id),
            applicant_name: Set(request.applicant_name),
            applicant_email: Set(request.applicant_email),
            resume: Set(request.resume.unwrap_or_default()),
            applied_at: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let model = active_model
            .insert(&*self.connection)
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::ForeignKeyConstraintViolation(message)) => {
                    RepositoryError::constraint_violation("fk_applications_job_post_id", message)
                }
                _ => RepositoryError::from(err),
            })?;
        Ok(model.into())
    }

    /// Find an application by ID
    pub async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Application>> {
        let model = Applications::find_by_id(id).one(&*self.connection).await?;
        Ok(model.map(Into::into))
    }

    /// Find every application, whatever the state of its job post
    pub async fn find_all(&self) -> RepositoryResult<Vec<Application>> {
        let models = Applications::find()
            .order_by_asc(applications::Column::Id)
            .all(&*self.connection)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    /// Find the applications submitted against a job post
    pub async fn find_by_job_post(&self, job_post_id: i32) -> RepositoryResult<Vec<Application>> {
        let models = Applications::find()
            .filter(applications::Column::JobPostId.eq(job_post_id))
            .order_by_asc(applications::Column::Id)
            .all(&*self.connection)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    /// Delete an application, returning `false` when it does not exist
    pub async fn delete(&self, id: i32) -> RepositoryResult<bool> {
        let result = Applications::delete_by_id(id)
            .exec(&*self.connection)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
