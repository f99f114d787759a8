//! SQL for categories, threads, replies, and votes
//!
//! Cross-request invariants live here, in the SQL: one vote per
//! (reply, user) via `ON CONFLICT` upsert, atomic view counts via
//! `SET views = views + 1`, and reply scores recomputed with `SUM`
//! on every read.

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{ForumCategory, ForumReply, ForumThread, ForumVote},
};

/// Reply joined with its current score.
#[derive(Debug, Clone, FromRow)]
pub struct ReplyWithScore {
    #[sqlx(flatten)]
    pub reply: ForumReply,
    pub score: i64,
}

/// Thread joined with its reply count, for listings.
#[derive(Debug, Clone, FromRow)]
pub struct ThreadSummaryRow {
    #[sqlx(flatten)]
    pub thread: ForumThread,
    pub reply_count: i64,
}

pub struct ForumRepository;

impl ForumRepository {
    // ----- categories -----

    /// Create a category. Duplicate names surface as a unique violation.
    pub async fn create_category(pool: &PgPool, name: &str) -> AppResult<ForumCategory> {
        let category = sqlx::query_as::<_, ForumCategory>(
            r#"
            INSERT INTO forum_categories (name)
            VALUES ($1)
            RETURNING *
            "#,
        )
        .bind(name)
        .fetch_one(pool)
        .await?;

        Ok(category)
    }

    /// List all categories
    pub async fn list_categories(pool: &PgPool) -> AppResult<Vec<ForumCategory>> {
        let categories =
            sqlx::query_as::<_, ForumCategory>(r#"SELECT * FROM forum_categories ORDER BY name"#)
                .fetch_all(pool)
                .await?;

        Ok(categories)
    }

    /// Find category by ID
    pub async fn find_category(pool: &PgPool, id: &Uuid) -> AppResult<Option<ForumCategory>> {
        let category =
            sqlx::query_as::<_, ForumCategory>(r#"SELECT * FROM forum_categories WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(category)
    }

    /// Delete a category. Threads keep existing with a nulled category link.
    pub async fn delete_category(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM forum_categories WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    // ----- threads -----

    /// Create a thread (status open, zero views)
    pub async fn create_thread(
        pool: &PgPool,
        title: &str,
        content: &str,
        author_id: &Uuid,
        category_id: Option<&Uuid>,
    ) -> AppResult<ForumThread> {
        let thread = sqlx::query_as::<_, ForumThread>(
            r#"
            INSERT INTO forum_threads (title, content, author_id, category_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(author_id)
        .bind(category_id)
        .fetch_one(pool)
        .await?;

        Ok(thread)
    }

    /// Find thread by ID without touching the view counter
    pub async fn find_thread(pool: &PgPool, id: &Uuid) -> AppResult<Option<ForumThread>> {
        let thread = sqlx::query_as::<_, ForumThread>(r#"SELECT * FROM forum_threads WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(thread)
    }

    /// Fetch a thread for display, bumping its view counter in the same
    /// statement. Concurrent reads each get counted; no read-modify-write.
    pub async fn find_thread_and_bump_views(
        pool: &PgPool,
        id: &Uuid,
    ) -> AppResult<Option<ForumThread>> {
        let thread = sqlx::query_as::<_, ForumThread>(
            r#"
            UPDATE forum_threads
            SET views = views + 1
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(thread)
    }

    /// List threads with reply counts, newest first
    pub async fn list_threads(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        category_id: Option<&Uuid>,
    ) -> AppResult<(Vec<ThreadSummaryRow>, i64)> {
        let threads = sqlx::query_as::<_, ThreadSummaryRow>(
            r#"
            SELECT t.*, COUNT(r.id) AS reply_count
            FROM forum_threads t
            LEFT JOIN forum_replies r ON r.thread_id = t.id
            WHERE ($1::uuid IS NULL OR t.category_id = $1)
            GROUP BY t.id
            ORDER BY t.created_at DESC
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(category_id)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM forum_threads
            WHERE ($1::uuid IS NULL OR category_id = $1)
            "#,
        )
        .bind(category_id)
        .fetch_one(pool)
        .await?;

        Ok((threads, count))
    }

    /// Set thread status (open/closed)
    pub async fn set_thread_status(
        pool: &PgPool,
        id: &Uuid,
        status: &str,
    ) -> AppResult<ForumThread> {
        let thread = sqlx::query_as::<_, ForumThread>(
            r#"
            UPDATE forum_threads
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_one(pool)
        .await?;

        Ok(thread)
    }

    /// Delete a thread. Replies and their votes cascade.
    pub async fn delete_thread(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM forum_threads WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    // ----- replies -----

    /// Create a reply
    pub async fn create_reply(
        pool: &PgPool,
        thread_id: &Uuid,
        author_id: &Uuid,
        content: &str,
    ) -> AppResult<ForumReply> {
        let reply = sqlx::query_as::<_, ForumReply>(
            r#"
            INSERT INTO forum_replies (thread_id, author_id, content)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(thread_id)
        .bind(author_id)
        .bind(content)
        .fetch_one(pool)
        .await?;

        Ok(reply)
    }

    /// Find reply by ID
    pub async fn find_reply(pool: &PgPool, id: &Uuid) -> AppResult<Option<ForumReply>> {
        let reply = sqlx::query_as::<_, ForumReply>(r#"SELECT * FROM forum_replies WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(reply)
    }

    /// All replies for a thread in posting order, each with its score
    /// summed from the vote ledger at read time.
    pub async fn list_replies_with_scores(
        pool: &PgPool,
        thread_id: &Uuid,
    ) -> AppResult<Vec<ReplyWithScore>> {
        let replies = sqlx::query_as::<_, ReplyWithScore>(
            r#"
            SELECT r.*, COALESCE(SUM(v.value), 0)::BIGINT AS score
            FROM forum_replies r
            LEFT JOIN forum_votes v ON v.reply_id = r.id
            WHERE r.thread_id = $1
            GROUP BY r.id
            ORDER BY r.created_at ASC
            "#,
        )
        .bind(thread_id)
        .fetch_all(pool)
        .await?;

        Ok(replies)
    }

    /// Delete a reply. Its votes cascade.
    pub async fn delete_reply(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM forum_replies WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    // ----- votes -----

    /// Cast or change a vote in one atomic statement. The unique index on
    /// (reply_id, user_id) makes concurrent casts collapse into the upsert;
    /// recasting the same value touches nothing and returns None.
    pub async fn cast_vote(
        pool: &PgPool,
        reply_id: &Uuid,
        user_id: &Uuid,
        value: i16,
    ) -> AppResult<Option<ForumVote>> {
        let vote = sqlx::query_as::<_, ForumVote>(
            r#"
            INSERT INTO forum_votes (reply_id, user_id, value)
            VALUES ($1, $2, $3)
            ON CONFLICT (reply_id, user_id) DO UPDATE
            SET value = EXCLUDED.value, updated_at = NOW()
            WHERE forum_votes.value <> EXCLUDED.value
            RETURNING *
            "#,
        )
        .bind(reply_id)
        .bind(user_id)
        .bind(value)
        .fetch_optional(pool)
        .await?;

        Ok(vote)
    }

    /// The caller's current vote on a reply, if any
    pub async fn find_vote(
        pool: &PgPool,
        reply_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<Option<ForumVote>> {
        let vote = sqlx::query_as::<_, ForumVote>(
            r#"SELECT * FROM forum_votes WHERE reply_id = $1 AND user_id = $2"#,
        )
        .bind(reply_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(vote)
    }

    /// Current score of a reply, summed from the vote ledger
    pub async fn reply_score(pool: &PgPool, reply_id: &Uuid) -> AppResult<i64> {
        let score: i64 = sqlx::query_scalar(
            r#"SELECT COALESCE(SUM(value), 0)::BIGINT FROM forum_votes WHERE reply_id = $1"#,
        )
        .bind(reply_id)
        .fetch_one(pool)
        .await?;

        Ok(score)
    }

    // ----- counts -----

    /// Count total threads
    pub async fn count_threads(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM forum_threads"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// Count total replies
    pub async fn count_replies(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM forum_replies"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
