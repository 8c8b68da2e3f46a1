use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create tables in order of dependencies
        self.create_job_posts_table(manager).await?;
        self.create_applications_table(manager).await?;

        self.create_indexes(manager).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Applications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(JobPosts::Table).to_owned())
            .await?;

        Ok(())
    }
}

impl Migration {
    fn create_id_column(&self, column: impl IntoIden) -> ColumnDef {
        let mut col = ColumnDef::new(column);
        col.integer().not_null().auto_increment().primary_key();
        col
    }

    fn create_timestamp_column(&self, column: impl IntoIden) -> ColumnDef {
        let mut col = ColumnDef::new(column);
        col.timestamp_with_time_zone().not_null();
        col
    }

    async fn create_job_posts_table(&self, manager: &SchemaManager<'_>) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JobPosts::Table)
                    .if_not_exists()
                    .col(self.create_id_column(JobPosts::Id))
                    .col(ColumnDef::new(JobPosts::Title).string_len(255).not_null())
                    .col(ColumnDef::new(JobPosts::Description).text().not_null())
                    .col(ColumnDef::new(JobPosts::Company).string_len(255).not_null())
                    .col(ColumnDef::new(JobPosts::Location).string_len(255).not_null())
                    .col(ColumnDef::new(JobPosts::Salary).decimal_len(10, 2).null())
                    .col(self.create_timestamp_column(JobPosts::PostedAt))
                    .col(
                        ColumnDef::new(JobPosts::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn create_applications_table(&self, manager: &SchemaManager<'_>) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Applications::Table)
                    .if_not_exists()
                    .col(self.create_id_column(Applications::Id))
                    .col(ColumnDef::new(Applications::JobPostId).integer().not_null())
                    .col(
                        ColumnDef::new(Applications::ApplicantName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Applications::ApplicantEmail)
                            .string_len(254)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Applications::Resume).string_len(255).not_null())
                    .col(self.create_timestamp_column(Applications::AppliedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_applications_job_post_id")
                            .from(Applications::Table, Applications::JobPostId)
                            .to(JobPosts::Table, JobPosts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn create_indexes(&self, manager: &SchemaManager<'_>) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_job_posts_is_active")
                    .table(JobPosts::Table)
                    .col(JobPosts::IsActive)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_applications_job_post_id")
                    .table(Applications::Table)
                    .col(Applications::JobPostId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum JobPosts {
    Table,
    Id,
    Title,
    Description,
    Company,
    Location,
    Salary,
    PostedAt,
    IsActive,
}

#[derive(DeriveIden)]
enum Applications {
    Table,
    Id,
    JobPostId,
    ApplicantName,
    ApplicantEmail,
    Resume,
    AppliedAt,
}
