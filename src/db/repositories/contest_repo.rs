//! SQL for contests and their registrations

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::{error::AppResult, models::Contest};

/// Contest joined with its registration count, for listings.
#[derive(Debug, Clone, FromRow)]
pub struct ContestSummaryRow {
    #[sqlx(flatten)]
    pub contest: Contest,
    pub participants: i64,
}

/// SQL for the contests and contest_registrations tables
pub struct ContestRepository;

impl ContestRepository {
    /// Insert a contest created by the given admin
    pub async fn create(
        pool: &PgPool,
        title: &str,
        description: &str,
        rules: &str,
        prizes: &str,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> AppResult<Contest> {
        let contest = sqlx::query_as::<_, Contest>(
            r#"
            INSERT INTO contests (title, description, rules, prizes, start_time, end_time)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(rules)
        .bind(prizes)
        .bind(start_time)
        .bind(end_time)
        .fetch_one(pool)
        .await?;

        Ok(contest)
    }

    /// Fetch by primary key
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Contest>> {
        let contest = sqlx::query_as::<_, Contest>(r#"SELECT * FROM contests WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(contest)
    }

    /// Update contest fields. `None` keeps the current value.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        title: Option<&str>,
        description: Option<&str>,
        rules: Option<&str>,
        prizes: Option<&str>,
        start_time: Option<DateTime<Utc>>,
        end_time: Option<DateTime<Utc>>,
    ) -> AppResult<Contest> {
        let contest = sqlx::query_as::<_, Contest>(
            r#"
            UPDATE contests
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                rules = COALESCE($4, rules),
                prizes = COALESCE($5, prizes),
                start_time = COALESCE($6, start_time),
                end_time = COALESCE($7, end_time),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(rules)
        .bind(prizes)
        .bind(start_time)
        .bind(end_time)
        .fetch_one(pool)
        .await?;

        Ok(contest)
    }

    /// Drop a contest; registrations cascade
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM contests WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// List contests with registration counts, ordered by start time
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<ContestSummaryRow>, i64)> {
        let contests = sqlx::query_as::<_, ContestSummaryRow>(
            r#"
            SELECT c.*, COUNT(r.id) AS participants
            FROM contests c
            LEFT JOIN contest_registrations r ON r.contest_id = c.id
            GROUP BY c.id
            ORDER BY c.start_time ASC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM contests"#)
            .fetch_one(pool)
            .await?;

        Ok((contests, count))
    }

    /// Register a user. Returns false when the unique constraint absorbed a
    /// duplicate registration.
    pub async fn register(pool: &PgPool, contest_id: &Uuid, user_id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO contest_registrations (contest_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT (contest_id, user_id) DO NOTHING
            "#,
        )
        .bind(contest_id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Remove a registration, reporting whether one existed
    pub async fn unregister(pool: &PgPool, contest_id: &Uuid, user_id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM contest_registrations WHERE contest_id = $1 AND user_id = $2"#)
            .bind(contest_id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Membership probe used before accepting contest activity
    pub async fn is_registered(pool: &PgPool, contest_id: &Uuid, user_id: &Uuid) -> AppResult<bool> {
        let registered: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM contest_registrations
                WHERE contest_id = $1 AND user_id = $2
            )
            "#,
        )
        .bind(contest_id)
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(registered)
    }

    /// Participant count, derived from the registration rows
    pub async fn participant_count(pool: &PgPool, contest_id: &Uuid) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM contest_registrations WHERE contest_id = $1"#)
                .bind(contest_id)
                .fetch_one(pool)
                .await?;

        Ok(count)
    }

    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM contests"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
