//! SQL for the users table

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::{error::AppResult, models::User};

/// Lightweight projection used when recomputing ranks for every user.
#[derive(Debug, Clone, FromRow)]
pub struct RankingRow {
    pub id: Uuid,
    pub college: String,
    pub xp: i32,
    pub created_at: DateTime<Utc>,
}

/// One user's freshly computed rank pair.
#[derive(Debug, Clone, Copy)]
pub struct RankAssignment {
    pub user_id: Uuid,
    pub global_rank: i32,
    pub college_rank: i32,
}

/// All methods take the pool and stay stateless.
pub struct UserRepository;

impl UserRepository {
    /// Create a new user. Progression fields (xp, streak, level, placeholder
    /// ranks) come from the column defaults.
    pub async fn create(
        pool: &PgPool,
        username: &str,
        email: &str,
        password_hash: &str,
        display_name: Option<&str>,
        college: &str,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password_hash, display_name, college)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .bind(display_name)
        .bind(college)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Fetch by primary key
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    pub async fn find_by_username(pool: &PgPool, username: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE username = $1"#)
            .bind(username)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    pub async fn find_by_email(pool: &PgPool, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE email = $1"#)
            .bind(email)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Login lookup: the identifier may be a username or an email
    pub async fn find_by_identifier(pool: &PgPool, identifier: &str) -> AppResult<Option<User>> {
        let user =
            sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE username = $1 OR email = $1"#)
                .bind(identifier)
                .fetch_optional(pool)
                .await?;

        Ok(user)
    }

    /// Update profile fields. `None` keeps the current value.
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        username: Option<&str>,
        email: Option<&str>,
        display_name: Option<&str>,
        college: Option<&str>,
        password_hash: Option<&str>,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET
                username = COALESCE($2, username),
                email = COALESCE($3, email),
                display_name = COALESCE($4, display_name),
                college = COALESCE($5, college),
                password_hash = COALESCE($6, password_hash),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(username)
        .bind(email)
        .bind(display_name)
        .bind(college)
        .bind(password_hash)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Swap the role string, returning the updated row
    pub async fn update_role(pool: &PgPool, id: &Uuid, role: &str) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"UPDATE users SET role = $2, updated_at = NOW() WHERE id = $1 RETURNING *"#,
        )
        .bind(id)
        .bind(role)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Persist the progression outcome of an accepted submission.
    pub async fn record_acceptance(
        pool: &PgPool,
        id: &Uuid,
        xp: i32,
        level: i32,
        streak: i32,
        last_accepted_at: NaiveDate,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET xp = $2, level = $3, streak = $4, last_accepted_at = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(xp)
        .bind(level)
        .bind(streak)
        .bind(last_accepted_at)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// One page of users, with optional search and role filters
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        search: Option<&str>,
        role: Option<&str>,
    ) -> AppResult<(Vec<User>, i64)> {
        let search_pattern = search.map(|s| format!("%{}%", s));

        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT * FROM users
            WHERE ($1::text IS NULL OR username ILIKE $1 OR display_name ILIKE $1 OR college ILIKE $1)
              AND ($2::text IS NULL OR role = $2)
            ORDER BY created_at DESC
            OFFSET $3 LIMIT $4
            "#,
        )
        .bind(&search_pattern)
        .bind(role)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM users
            WHERE ($1::text IS NULL OR username ILIKE $1 OR display_name ILIKE $1 OR college ILIKE $1)
              AND ($2::text IS NULL OR role = $2)
            "#,
        )
        .bind(&search_pattern)
        .bind(role)
        .fetch_one(pool)
        .await?;

        Ok((users, count))
    }

    /// Every user in rank order: xp descending, earlier signup wins ties.
    pub async fn ranking_rows(pool: &PgPool) -> AppResult<Vec<RankingRow>> {
        let rows = sqlx::query_as::<_, RankingRow>(
            r#"
            SELECT id, college, xp, created_at FROM users
            ORDER BY xp DESC, created_at ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// Apply a batch of rank assignments in a single transaction so readers
    /// never observe a half-applied recomputation.
    pub async fn apply_ranks(pool: &PgPool, assignments: &[RankAssignment]) -> AppResult<()> {
        let mut tx = pool.begin().await?;

        for assignment in assignments {
            sqlx::query(
                r#"
                UPDATE users
                SET global_rank = $2, college_rank = $3, updated_at = NOW()
                WHERE id = $1
                "#,
            )
            .bind(assignment.user_id)
            .bind(assignment.global_rank)
            .bind(assignment.college_rank)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Count users holding a given role
    pub async fn count_by_role(pool: &PgPool, role: &str) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM users WHERE role = $1"#)
            .bind(role)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
