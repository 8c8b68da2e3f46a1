pub use super::applications::Entity as Applications;
pub use super::job_posts::Entity as JobPosts;
