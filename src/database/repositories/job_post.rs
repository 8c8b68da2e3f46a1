//! SeaORM-based job post repository implementation

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use std::sync::Arc;
use tracing::debug;

use crate::entities::{applications, job_posts, prelude::*};
use crate::errors::{RepositoryError, RepositoryResult};
use crate::models::{JobPost, JobPostCreateRequest};

/// SeaORM-based repository for job post operations
#[derive(Clone)]
pub struct JobPostSeaOrmRepository {
    connection: Arc<DatabaseConnection>,
}

impl JobPostSeaOrmRepository {
    /// Create a new repository instance
    pub fn new(connection: Arc<DatabaseConnection>) -> Self {
        Self { connection }
    }

    /// Insert a new, active job post
    pub async fn create(&self, request: JobPostCreateRequest) -> RepositoryResult<JobPost> {
        let active_model = job_posts::ActiveModel {
            title: Set(request.title),
            description: Set(request.description),
            company: Set(request.company),
            location: Set(request.location),
            salary: Set(request.salary),
            posted_at: Set(chrono::Utc::now()),
            is_active: Set(true),
            ..Default::default()
        };

        let model = active_model.insert(&*self.connection).await?;
        Ok(model.into())
    }

    /// Find a job post by ID regardless of its active flag
    pub async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<JobPost>> {
        let model = JobPosts::find_by_id(id).one(&*self.connection).await?;
        Ok(model.map(Into::into))
    }

    /// Find a job post by ID only if it is active
    pub async fn find_active_by_id(&self, id: i32) -> RepositoryResult<Option<JobPost>> {
        let model = JobPosts::find_by_id(id)
            .filter(job_posts::Column::IsActive.eq(true))
            .one(&*self.connection)
            .await?;
        Ok(model.map(Into::into))
    }

    /// Find all active job posts
    pub async fn find_active(&self) -> RepositoryResult<Vec<JobPost>> {
        let models = JobPosts::find()
            .filter(job_posts::Column::IsActive.eq(true))
            .order_by_asc(job_posts::Column::Id)
            .all(&*self.connection)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    /// Administrative toggle for retiring a posting without deleting it
    pub async fn set_active(&self, id: i32, is_active: bool) -> RepositoryResult<JobPost> {
        let existing = JobPosts::find_by_id(id)
            .one(&*self.connection)
            .await?
            .ok_or_else(|| RepositoryError::record_not_found("job_posts", "id", id))?;

        let mut active_model: job_posts::ActiveModel = existing.into();
        active_model.is_active = Set(is_active);

        let updated = active_model.update(&*self.connection).await?;
        Ok(updated.into())
    }

    /// Delete a job post together with all of its applications.
    ///
    /// Returns `false` when no job post has the given ID.
    pub async fn delete_with_applications(&self, id: i32) -> RepositoryResult<bool> {
        let txn = self.connection.begin().await?;

        let removed_applications = Applications::delete_many()
            .filter(applications::Column::JobPostId.eq(id))
            .exec(&txn)
            .await?;

        let result = JobPosts::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(false);
        }

        txn.commit().await?;

        debug!(
            job_post_id = id,
            applications_removed = removed_applications.rows_affected,
            "Deleted job post"
        );
        Ok(true)
    }
}
