use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::{applications, job_posts};

/// A job listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPost {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub salary: Option<Decimal>,
    /// Set once on insert
    pub posted_at: DateTime<Utc>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPostCreateRequest {
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub salary: Option<Decimal>,
}

/// A candidate's submission against a [`JobPost`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: i32,
    pub job_post_id: i32,
    pub applicant_name: String,
    pub applicant_email: String,
    /// File name or path placeholder; empty when none was supplied
    pub resume: String,
    pub applied_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationCreateRequest {
    pub job_post_id: i32,
    pub applicant_name: String,
    pub applicant_email: String,
    pub resume: Option<String>,
}

impl From<job_posts::Model> for JobPost {
    fn from(model: job_posts::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            company: model.company,
            location: model.location,
            salary: model.salary,
            posted_at: model.posted_at,
            is_active: model.is_active,
        }
    }
}

impl From<applications::Model> for Application {
    fn from(model: applications::Model) -> Self {
        Self {
            id: model.id,
            job_post_id: model.job_post_id,
            applicant_name: model.applicant_name,
            applicant_email: model.applicant_email,
            resume: model.resume,
            applied_at: model.applied_at,
        }
    }
}

impl std::fmt::Display for JobPost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

impl Application {
    /// Human readable label, e.g. `Ada Lovelace - Backend Engineer`
    pub fn label(&self, job_post: &JobPost) -> String {
        format!("{} - {}", self.applicant_name, job_post.title)
    }
}
