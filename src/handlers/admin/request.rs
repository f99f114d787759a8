//! Request bodies for the admin endpoints

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_CATEGORY_NAME_LENGTH, MAX_PROBLEM_TITLE_LENGTH};

/// Body of `PUT /admin/users/{id}/role`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRoleRequest {
    #[validate(length(min = 1))]
    pub role: String,
}

/// Body of `POST /admin/problems`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProblemRequest {
    #[validate(length(min = 1, max = MAX_PROBLEM_TITLE_LENGTH))]
    pub title: String,

    pub difficulty: String,

    pub points: i32,

    /// Display string like "42%"; defaults to "0%"
    pub acceptance: Option<String>,

    pub tags: Option<Vec<String>>,

    #[validate(length(min = 1))]
    pub statement: String,

    pub input_format: Option<String>,
    pub output_format: Option<String>,
    pub constraints: Option<String>,
    pub sample_input: Option<String>,
    pub sample_output: Option<String>,
}

/// Body of `PUT /admin/problems/{id}`. Everything optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProblemRequest {
    #[validate(length(min = 1, max = MAX_PROBLEM_TITLE_LENGTH))]
    pub title: Option<String>,

    pub difficulty: Option<String>,
    pub points: Option<i32>,
    pub acceptance: Option<String>,
    pub tags: Option<Vec<String>>,
    pub statement: Option<String>,
    pub input_format: Option<String>,
    pub output_format: Option<String>,
    pub constraints: Option<String>,
    pub sample_input: Option<String>,
    pub sample_output: Option<String>,
}

/// Body of `POST /admin/problems/{id}/test-cases`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTestCaseRequest {
    #[validate(length(min = 1))]
    pub input_data: String,

    #[validate(length(min = 1))]
    pub expected_output: String,

    /// Hidden cases never reach non-admin callers
    pub is_hidden: Option<bool>,

    /// Grading order; defaults to the end of the list
    pub position: Option<i32>,
}

/// Body of `POST /admin/contests`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateContestRequest {
    #[validate(length(min = 1, max = MAX_PROBLEM_TITLE_LENGTH))]
    pub title: String,

    pub description: Option<String>,
    pub rules: Option<String>,
    pub prizes: Option<String>,

    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Body of `PUT /admin/contests/{id}`. Everything optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateContestRequest {
    #[validate(length(min = 1, max = MAX_PROBLEM_TITLE_LENGTH))]
    pub title: Option<String>,

    pub description: Option<String>,
    pub rules: Option<String>,
    pub prizes: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

/// Body of `POST /admin/forum/categories`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = MAX_CATEGORY_NAME_LENGTH))]
    pub name: String,
}
