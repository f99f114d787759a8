//! Problem bank operations

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::MAX_TEST_CASE_SIZE,
    db::repositories::ProblemRepository,
    error::{AppError, AppResult},
    models::{Problem, TestCase},
    utils::validation,
};

pub struct ProblemService;

impl ProblemService {
    /// List problems with pagination and filters
    pub async fn list_problems(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        search: Option<&str>,
        difficulty: Option<&str>,
        tag: Option<&str>,
    ) -> AppResult<(Vec<Problem>, i64)> {
        if let Some(d) = difficulty {
            validation::validate_difficulty(d).map_err(|e| AppError::Validation(e.to_string()))?;
        }

        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        ProblemRepository::list(pool, offset, limit, search, difficulty, tag).await
    }

    /// Fetch one problem, 404 when absent
    pub async fn get_problem(pool: &PgPool, id: &Uuid) -> AppResult<Problem> {
        ProblemRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))
    }

    /// Test cases for a problem. Hidden cases only reach admin callers.
    pub async fn list_test_cases(
        pool: &PgPool,
        problem_id: &Uuid,
        include_hidden: bool,
    ) -> AppResult<Vec<TestCase>> {
        Self::get_problem(pool, problem_id).await?;

        if include_hidden {
            ProblemRepository::get_test_cases(pool, problem_id).await
        } else {
            ProblemRepository::get_visible_test_cases(pool, problem_id).await
        }
    }

    /// Create a problem (admin)
    #[allow(clippy::too_many_arguments)]
    pub async fn create_problem(
        pool: &PgPool,
        title: &str,
        difficulty: &str,
        points: i32,
        acceptance: &str,
        tags: &[String],
        statement: &str,
        input_format: &str,
        output_format: &str,
        constraints: &str,
        sample_input: Option<&str>,
        sample_output: Option<&str>,
    ) -> AppResult<Problem> {
        let title = validation::validate_title(title)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        validation::validate_difficulty(difficulty)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if points < 0 {
            return Err(AppError::Validation("Points cannot be negative".to_string()));
        }
        if statement.trim().is_empty() {
            return Err(AppError::Validation("Statement cannot be empty".to_string()));
        }

        ProblemRepository::create(
            pool,
            &title,
            difficulty,
            points,
            acceptance,
            tags,
            statement,
            input_format,
            output_format,
            constraints,
            sample_input,
            sample_output,
        )
        .await
    }

    /// Update a problem (admin)
    #[allow(clippy::too_many_arguments)]
    pub async fn update_problem(
        pool: &PgPool,
        id: &Uuid,
        title: Option<&str>,
        difficulty: Option<&str>,
        points: Option<i32>,
        acceptance: Option<&str>,
        tags: Option<&[String]>,
        statement: Option<&str>,
        input_format: Option<&str>,
        output_format: Option<&str>,
        constraints: Option<&str>,
        sample_input: Option<&str>,
        sample_output: Option<&str>,
    ) -> AppResult<Problem> {
        Self::get_problem(pool, id).await?;

        let title = match title {
            Some(t) => Some(
                validation::validate_title(t).map_err(|e| AppError::Validation(e.to_string()))?,
            ),
            None => None,
        };
        if let Some(d) = difficulty {
            validation::validate_difficulty(d).map_err(|e| AppError::Validation(e.to_string()))?;
        }
        if let Some(p) = points {
            if p < 0 {
                return Err(AppError::Validation("Points cannot be negative".to_string()));
            }
        }

        ProblemRepository::update(
            pool,
            id,
            title.as_deref(),
            difficulty,
            points,
            acceptance,
            tags,
            statement,
            input_format,
            output_format,
            constraints,
            sample_input,
            sample_output,
        )
        .await
    }

    /// Delete a problem (admin). Test cases cascade; the submission
    /// ledger keeps its rows with a nulled problem link.
    pub async fn delete_problem(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        Self::get_problem(pool, id).await?;
        ProblemRepository::delete(pool, id).await
    }

    /// Attach a test case to a problem (admin)
    pub async fn add_test_case(
        pool: &PgPool,
        problem_id: &Uuid,
        input_data: &str,
        expected_output: &str,
        is_hidden: bool,
        position: i32,
    ) -> AppResult<TestCase> {
        Self::get_problem(pool, problem_id).await?;

        if input_data.len() > MAX_TEST_CASE_SIZE || expected_output.len() > MAX_TEST_CASE_SIZE {
            return Err(AppError::Validation(
                "Test case data exceeds maximum size".to_string(),
            ));
        }

        ProblemRepository::create_test_case(
            pool,
            problem_id,
            input_data,
            expected_output,
            is_hidden,
            position,
        )
        .await
    }

    /// Remove a test case (admin)
    pub async fn delete_test_case(
        pool: &PgPool,
        problem_id: &Uuid,
        case_id: &Uuid,
    ) -> AppResult<()> {
        Self::get_problem(pool, problem_id).await?;

        if !ProblemRepository::delete_test_case(pool, problem_id, case_id).await? {
            return Err(AppError::NotFound("Test case not found".to_string()));
        }

        Ok(())
    }
}
