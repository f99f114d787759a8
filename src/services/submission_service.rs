//! Submission intake and grading.
//!
//! Grading happens inline in the request: every test case is executed
//! against the external judge before the submission row is written, so a
//! row only ever exists fully graded. A judge outage fails the request
//! and records nothing.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{ProblemRepository, SubmissionRepository, UserRepository},
    error::{AppError, AppResult},
    judge::{outputs_match, ExecutionRequest, JudgeClient},
    middleware::auth::AuthenticatedUser,
    models::{Submission, TestCase, User},
    services::ProgressionService,
    utils::validation,
};

/// Per-case grading detail. Hidden cases report only pass/fail.
#[derive(Debug, Clone)]
pub struct CaseOutcome {
    pub test_case_id: Uuid,
    pub passed: bool,
    pub hidden: bool,
    pub input: Option<String>,
    pub expected_output: Option<String>,
    pub actual_output: Option<String>,
    pub stderr: Option<String>,
}

impl CaseOutcome {
    fn graded(case: &TestCase, passed: bool, stdout: &str, stderr: &str) -> Self {
        if case.is_hidden {
            Self {
                test_case_id: case.id,
                passed,
                hidden: true,
                input: None,
                expected_output: None,
                actual_output: None,
                stderr: None,
            }
        } else {
            Self {
                test_case_id: case.id,
                passed,
                hidden: false,
                input: Some(case.input_data.clone()),
                expected_output: Some(case.expected_output.clone()),
                actual_output: Some(stdout.to_string()),
                stderr: (!stderr.is_empty()).then(|| stderr.to_string()),
            }
        }
    }
}

/// Everything the submit endpoint needs to answer with.
#[derive(Debug, Clone)]
pub struct GradedSubmission {
    pub submission: Submission,
    pub passed: bool,
    pub cases: Vec<CaseOutcome>,
    pub awarded_xp: i32,
    /// Present when progression changed, carrying the fresh xp/level/streak.
    pub progressed_user: Option<User>,
}

pub struct SubmissionService;

impl SubmissionService {
    /// Grade and record a submission.
    pub async fn submit(
        pool: &PgPool,
        judge: &dyn JudgeClient,
        actor: &AuthenticatedUser,
        problem_id: &Uuid,
        language: &str,
        code: &str,
    ) -> AppResult<GradedSubmission> {
        validation::validate_language(language)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        validation::validate_source_code(code)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let problem = ProblemRepository::find_by_id(pool, problem_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))?;

        let cases = ProblemRepository::get_test_cases(pool, problem_id).await?;
        if cases.is_empty() {
            return Err(AppError::InvalidInput(
                "Problem has no test cases to grade against".to_string(),
            ));
        }

        // Must be read before the new row lands, or every accept would
        // look like a repeat and award nothing
        let already_solved =
            SubmissionRepository::has_passed(pool, &actor.id, problem_id).await?;

        let mut outcomes = Vec::with_capacity(cases.len());
        let mut all_passed = true;

        for case in &cases {
            let run = judge
                .execute(&ExecutionRequest {
                    language: language.to_string(),
                    code: code.to_string(),
                    stdin: case.input_data.clone(),
                })
                .await?;

            let passed = run.ran_cleanly() && outputs_match(&run.stdout, &case.expected_output);
            all_passed &= passed;
            outcomes.push(CaseOutcome::graded(case, passed, &run.stdout, &run.stderr));
        }

        let submission = SubmissionRepository::create(
            pool,
            &actor.id,
            problem_id,
            language,
            code,
            all_passed,
        )
        .await?;

        let (awarded_xp, progressed_user) = if all_passed {
            let user = UserRepository::find_by_id(pool, &actor.id)
                .await?
                .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
            let xp_before = user.xp;

            let updated =
                ProgressionService::record_accept(pool, &user, problem.points, already_solved)
                    .await?;

            (updated.xp - xp_before, Some(updated))
        } else {
            (0, None)
        };

        Ok(GradedSubmission {
            submission,
            passed: all_passed,
            cases: outcomes,
            awarded_xp,
            progressed_user,
        })
    }

    /// Get a submission. Source access is decided by the handler; this
    /// only resolves existence.
    pub async fn get_submission(pool: &PgPool, id: &Uuid) -> AppResult<Submission> {
        SubmissionRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))
    }

    /// List submissions, newest first
    pub async fn list_submissions(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        user_id: Option<&Uuid>,
        problem_id: Option<&Uuid>,
    ) -> AppResult<(Vec<Submission>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        SubmissionRepository::list(pool, offset, limit, user_id, problem_id).await
    }
}
