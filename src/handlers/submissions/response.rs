//! Response bodies for the submission endpoints

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    models::{Submission, User},
    services::{CaseOutcome, GradedSubmission},
};

/// Submission row without the source code
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub problem_id: Option<Uuid>,
    pub language: String,
    pub passed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Submission> for SubmissionResponse {
    fn from(s: &Submission) -> Self {
        Self {
            id: s.id,
            user_id: s.user_id,
            problem_id: s.problem_id,
            language: s.language.clone(),
            passed: s.passed,
            created_at: s.created_at,
        }
    }
}

/// Submission with its source, for the owner or an admin
#[derive(Debug, Serialize)]
pub struct SubmissionDetailResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub problem_id: Option<Uuid>,
    pub language: String,
    pub code: String,
    pub passed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Submission> for SubmissionDetailResponse {
    fn from(s: Submission) -> Self {
        Self {
            id: s.id,
            user_id: s.user_id,
            problem_id: s.problem_id,
            language: s.language,
            code: s.code,
            passed: s.passed,
            created_at: s.created_at,
        }
    }
}

/// Per-case verdict. Hidden cases expose nothing but pass/fail.
#[derive(Debug, Serialize)]
pub struct CaseResultResponse {
    pub test_case_id: Uuid,
    pub passed: bool,
    pub hidden: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stderr: Option<String>,
}

impl From<CaseOutcome> for CaseResultResponse {
    fn from(c: CaseOutcome) -> Self {
        Self {
            test_case_id: c.test_case_id,
            passed: c.passed,
            hidden: c.hidden,
            input: c.input,
            expected_output: c.expected_output,
            actual_output: c.actual_output,
            stderr: c.stderr,
        }
    }
}

/// Progression snapshot returned when a submission passes
#[derive(Debug, Serialize)]
pub struct ProgressionResponse {
    pub xp: i32,
    pub level: i32,
    pub streak: i32,
    pub xp_percentage: f64,
}

impl From<&User> for ProgressionResponse {
    fn from(user: &User) -> Self {
        Self {
            xp: user.xp,
            level: user.level,
            streak: user.streak,
            xp_percentage: user.xp_percentage(),
        }
    }
}

/// Full grading outcome for a fresh submission
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub submission: SubmissionResponse,
    pub passed: bool,
    pub awarded_xp: i32,
    pub cases: Vec<CaseResultResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progression: Option<ProgressionResponse>,
}

impl From<GradedSubmission> for SubmitResponse {
    fn from(g: GradedSubmission) -> Self {
        Self {
            submission: SubmissionResponse::from(&g.submission),
            passed: g.passed,
            awarded_xp: g.awarded_xp,
            cases: g.cases.into_iter().map(Into::into).collect(),
            progression: g.progressed_user.as_ref().map(Into::into),
        }
    }
}

/// Page of submissions plus paging info
#[derive(Debug, Serialize)]
pub struct SubmissionsListResponse {
    pub submissions: Vec<SubmissionResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}
