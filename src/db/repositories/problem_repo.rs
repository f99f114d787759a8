//! SQL for problems and their test cases

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Problem, TestCase},
};

/// Repository for problem and test-case database operations
pub struct ProblemRepository;

impl ProblemRepository {
    /// Insert a problem authored by the given admin
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
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
        let problem = sqlx::query_as::<_, Problem>(
            r#"
            INSERT INTO problems (
                title, difficulty, points, acceptance, tags, statement,
                input_format, output_format, constraints, sample_input, sample_output
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(difficulty)
        .bind(points)
        .bind(acceptance)
        .bind(tags)
        .bind(statement)
        .bind(input_format)
        .bind(output_format)
        .bind(constraints)
        .bind(sample_input)
        .bind(sample_output)
        .fetch_one(pool)
        .await?;

        Ok(problem)
    }

    /// Fetch by primary key
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Problem>> {
        let problem = sqlx::query_as::<_, Problem>(r#"SELECT * FROM problems WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(problem)
    }

    /// Update problem fields. `None` keeps the current value.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
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
        let problem = sqlx::query_as::<_, Problem>(
            r#"
            UPDATE problems
            SET
                title = COALESCE($2, title),
                difficulty = COALESCE($3, difficulty),
                points = COALESCE($4, points),
                acceptance = COALESCE($5, acceptance),
                tags = COALESCE($6, tags),
                statement = COALESCE($7, statement),
                input_format = COALESCE($8, input_format),
                output_format = COALESCE($9, output_format),
                constraints = COALESCE($10, constraints),
                sample_input = COALESCE($11, sample_input),
                sample_output = COALESCE($12, sample_output),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(difficulty)
        .bind(points)
        .bind(acceptance)
        .bind(tags)
        .bind(statement)
        .bind(input_format)
        .bind(output_format)
        .bind(constraints)
        .bind(sample_input)
        .bind(sample_output)
        .fetch_one(pool)
        .await?;

        Ok(problem)
    }

    /// Delete problem. Test cases cascade; submission rows keep their
    /// history with a nulled problem link.
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM problems WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// One page of problems, filterable by difficulty, tag, and title search
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        search: Option<&str>,
        difficulty: Option<&str>,
        tag: Option<&str>,
    ) -> AppResult<(Vec<Problem>, i64)> {
        let search_pattern = search.map(|s| format!("%{}%", s));

        let problems = sqlx::query_as::<_, Problem>(
            r#"
            SELECT * FROM problems
            WHERE
                ($1::text IS NULL OR title ILIKE $1)
                AND ($2::text IS NULL OR difficulty = $2)
                AND ($3::text IS NULL OR $3 = ANY(tags))
            ORDER BY created_at DESC
            OFFSET $4 LIMIT $5
            "#,
        )
        .bind(&search_pattern)
        .bind(difficulty)
        .bind(tag)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM problems
            WHERE
                ($1::text IS NULL OR title ILIKE $1)
                AND ($2::text IS NULL OR difficulty = $2)
                AND ($3::text IS NULL OR $3 = ANY(tags))
            "#,
        )
        .bind(&search_pattern)
        .bind(difficulty)
        .bind(tag)
        .fetch_one(pool)
        .await?;

        Ok((problems, count))
    }

    /// Attach a test case to a problem
    pub async fn create_test_case(
        pool: &PgPool,
        problem_id: &Uuid,
        input_data: &str,
        expected_output: &str,
        is_hidden: bool,
        position: i32,
    ) -> AppResult<TestCase> {
        let test_case = sqlx::query_as::<_, TestCase>(
            r#"
            INSERT INTO test_cases (problem_id, input_data, expected_output, is_hidden, position)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(problem_id)
        .bind(input_data)
        .bind(expected_output)
        .bind(is_hidden)
        .bind(position)
        .fetch_one(pool)
        .await?;

        Ok(test_case)
    }

    /// All test cases for a problem, grading order
    pub async fn get_test_cases(pool: &PgPool, problem_id: &Uuid) -> AppResult<Vec<TestCase>> {
        let test_cases = sqlx::query_as::<_, TestCase>(
            r#"SELECT * FROM test_cases WHERE problem_id = $1 ORDER BY position ASC, created_at ASC"#,
        )
        .bind(problem_id)
        .fetch_all(pool)
        .await?;

        Ok(test_cases)
    }

    /// Only the test cases students may see
    pub async fn get_visible_test_cases(
        pool: &PgPool,
        problem_id: &Uuid,
    ) -> AppResult<Vec<TestCase>> {
        let test_cases = sqlx::query_as::<_, TestCase>(
            r#"
            SELECT * FROM test_cases
            WHERE problem_id = $1 AND is_hidden = false
            ORDER BY position ASC, created_at ASC
            "#,
        )
        .bind(problem_id)
        .fetch_all(pool)
        .await?;

        Ok(test_cases)
    }

    /// Delete test case. Scoped to the problem so a mismatched pair
    /// deletes nothing; returns whether a row went away.
    pub async fn delete_test_case(pool: &PgPool, problem_id: &Uuid, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM test_cases WHERE id = $1 AND problem_id = $2"#)
            .bind(id)
            .bind(problem_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM problems"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
