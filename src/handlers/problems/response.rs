//! Response bodies for the problem endpoints

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Problem, TestCase};

/// Full problem statement
#[derive(Debug, Serialize)]
pub struct ProblemResponse {
    pub id: Uuid,
    pub title: String,
    pub difficulty: String,
    pub points: i32,
    pub acceptance: String,
    pub tags: Vec<String>,
    pub statement: String,
    pub input_format: String,
    pub output_format: String,
    pub constraints: String,
    pub sample_input: Option<String>,
    pub sample_output: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Problem> for ProblemResponse {
    fn from(p: Problem) -> Self {
        Self {
            id: p.id,
            title: p.title,
            difficulty: p.difficulty,
            points: p.points,
            acceptance: p.acceptance,
            tags: p.tags,
            statement: p.statement,
            input_format: p.input_format,
            output_format: p.output_format,
            constraints: p.constraints,
            sample_input: p.sample_input,
            sample_output: p.sample_output,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Trimmed problem row for list views, no statement body
#[derive(Debug, Serialize)]
pub struct ProblemSummary {
    pub id: Uuid,
    pub title: String,
    pub difficulty: String,
    pub points: i32,
    pub acceptance: String,
    pub tags: Vec<String>,
}

impl From<Problem> for ProblemSummary {
    fn from(p: Problem) -> Self {
        Self {
            id: p.id,
            title: p.title,
            difficulty: p.difficulty,
            points: p.points,
            acceptance: p.acceptance,
            tags: p.tags,
        }
    }
}

/// Page of problems plus paging info
#[derive(Debug, Serialize)]
pub struct ProblemsListResponse {
    pub problems: Vec<ProblemSummary>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

/// Test case response. Non-admin callers only ever receive visible
/// cases, so the data fields carry no redaction logic here.
#[derive(Debug, Serialize)]
pub struct TestCaseResponse {
    pub id: Uuid,
    pub problem_id: Uuid,
    pub input_data: String,
    pub expected_output: String,
    pub is_hidden: bool,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

impl From<TestCase> for TestCaseResponse {
    fn from(tc: TestCase) -> Self {
        Self {
            id: tc.id,
            problem_id: tc.problem_id,
            input_data: tc.input_data,
            expected_output: tc.expected_output,
            is_hidden: tc.is_hidden,
            position: tc.position,
            created_at: tc.created_at,
        }
    }
}

/// Test cases for one problem
#[derive(Debug, Serialize)]
pub struct TestCasesListResponse {
    pub test_cases: Vec<TestCaseResponse>,
    pub total: i64,
}
