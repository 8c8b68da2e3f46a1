//! SeaORM migrations
//!
//! Migrations are database-agnostic and run on SQLite, PostgreSQL and MySQL.
//! Names follow `mYYYYMMDD_HHMMSS_description`; `tests/migration_name_guard.rs`
//! enforces it.

use sea_orm_migration::prelude::*;

pub mod m20250301_000001_create_job_board_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250301_000001_create_job_board_tables::Migration)]
    }
}
