use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "applications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub job_post_id: i32,
    pub applicant_name: String,
    pub applicant_email: String,
    pub resume: String,
    pub applied_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::job_posts::Entity",
        from = "Column::JobPostId",
        to = "super::job_posts::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    JobPost,
}

impl Related<super::job_posts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobPost.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
