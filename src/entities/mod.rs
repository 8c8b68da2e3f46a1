//! SeaORM entity definitions
//!
//! One module per table. Domain code should go through `crate::models`;
//! these types mirror the database schema created by
//! `crate::database::migrations`.

pub mod prelude;

pub mod applications;
pub mod job_posts;
