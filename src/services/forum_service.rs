//! Discussion threads, replies, and voting.
//!
//! Thread and reply lifecycle, the vote upsert, and moderation rules.
//! Scores are never stored; every read sums the vote ledger.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::thread_statuses,
    db::repositories::{
        forum_repo::{ReplyWithScore, ThreadSummaryRow},
        ForumRepository,
    },
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    models::{ForumCategory, ForumReply, ForumThread, VoteValue},
    utils::validation,
};

/// Forum service for business logic
pub struct ForumService;

impl ForumService {
    // ----- categories -----

    /// Create a category (admin)
    pub async fn create_category(pool: &PgPool, name: &str) -> AppResult<ForumCategory> {
        let name = validation::validate_category_name(name)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        ForumRepository::create_category(pool, &name)
            .await
            .map_err(|e| match e {
                AppError::AlreadyExists(_) => {
                    AppError::AlreadyExists("Category name already exists".to_string())
                }
                other => other,
            })
    }

    /// List all categories
    pub async fn list_categories(pool: &PgPool) -> AppResult<Vec<ForumCategory>> {
        ForumRepository::list_categories(pool).await
    }

    /// Delete a category (admin). Its threads stay, uncategorized.
    pub async fn delete_category(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        ForumRepository::find_category(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

        ForumRepository::delete_category(pool, id).await
    }

    // ----- threads -----

    /// Open a new thread
    pub async fn create_thread(
        pool: &PgPool,
        author: &AuthenticatedUser,
        title: &str,
        content: &str,
        category_id: Option<&Uuid>,
    ) -> AppResult<ForumThread> {
        let title = validation::validate_title(title)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        validation::validate_forum_body(content)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if let Some(category_id) = category_id {
            ForumRepository::find_category(pool, category_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;
        }

        ForumRepository::create_thread(pool, &title, content, &author.id, category_id).await
    }

    /// Fetch a thread with its replies and scores. Each call counts as a
    /// view; the increment rides the same statement as the read.
    pub async fn get_thread(
        pool: &PgPool,
        id: &Uuid,
    ) -> AppResult<(ForumThread, Vec<ReplyWithScore>)> {
        let thread = ForumRepository::find_thread_and_bump_views(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Thread not found".to_string()))?;

        let replies = ForumRepository::list_replies_with_scores(pool, id).await?;

        Ok((thread, replies))
    }

    /// List threads, newest first
    pub async fn list_threads(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        category_id: Option<&Uuid>,
    ) -> AppResult<(Vec<ThreadSummaryRow>, i64)> {
        if let Some(category_id) = category_id {
            ForumRepository::find_category(pool, category_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;
        }

        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        ForumRepository::list_threads(pool, offset, limit, category_id).await
    }

    /// Close a thread. Author or admin.
    pub async fn close_thread(
        pool: &PgPool,
        actor: &AuthenticatedUser,
        id: &Uuid,
    ) -> AppResult<ForumThread> {
        let thread = Self::require_thread(pool, id).await?;

        if !actor.can_act_on(&thread.author_id) {
            return Err(AppError::Forbidden(
                "Only the author or an admin can close a thread".to_string(),
            ));
        }

        ForumRepository::set_thread_status(pool, id, thread_statuses::CLOSED).await
    }

    /// Reopen a closed thread. Admin only.
    pub async fn reopen_thread(
        pool: &PgPool,
        actor: &AuthenticatedUser,
        id: &Uuid,
    ) -> AppResult<ForumThread> {
        if !actor.is_admin() {
            return Err(AppError::Forbidden(
                "Only an admin can reopen a thread".to_string(),
            ));
        }

        Self::require_thread(pool, id).await?;
        ForumRepository::set_thread_status(pool, id, thread_statuses::OPEN).await
    }

    /// Delete a thread with its replies and votes. Author or admin.
    pub async fn delete_thread(
        pool: &PgPool,
        actor: &AuthenticatedUser,
        id: &Uuid,
    ) -> AppResult<()> {
        let thread = Self::require_thread(pool, id).await?;

        if !actor.can_act_on(&thread.author_id) {
            return Err(AppError::Forbidden(
                "Only the author or an admin can delete a thread".to_string(),
            ));
        }

        ForumRepository::delete_thread(pool, id).await
    }

    // ----- replies -----

    /// Reply to an open thread. A closed thread is treated as absent on
    /// this path, not merely rejected.
    pub async fn post_reply(
        pool: &PgPool,
        author: &AuthenticatedUser,
        thread_id: &Uuid,
        content: &str,
    ) -> AppResult<ForumReply> {
        validation::validate_forum_body(content)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let thread = Self::require_thread(pool, thread_id).await?;
        if thread.is_closed() {
            return Err(AppError::NotFound("Thread not found".to_string()));
        }

        ForumRepository::create_reply(pool, thread_id, &author.id, content).await
    }

    /// Delete a reply with its votes. Author or admin.
    pub async fn delete_reply(
        pool: &PgPool,
        actor: &AuthenticatedUser,
        id: &Uuid,
    ) -> AppResult<()> {
        let reply = ForumRepository::find_reply(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reply not found".to_string()))?;

        if !actor.can_act_on(&reply.author_id) {
            return Err(AppError::Forbidden(
                "Only the author or an admin can delete a reply".to_string(),
            ));
        }

        ForumRepository::delete_reply(pool, id).await
    }

    // ----- votes -----

    /// Cast or change a vote on a reply, returning the reply's score
    /// recomputed after the cast. Recasting the same value changes
    /// nothing.
    pub async fn cast_vote(
        pool: &PgPool,
        actor: &AuthenticatedUser,
        reply_id: &Uuid,
        value: i16,
    ) -> AppResult<(VoteValue, i64)> {
        let value = VoteValue::from_i16(value)
            .ok_or_else(|| AppError::Validation("Vote value must be +1 or -1".to_string()))?;

        ForumRepository::find_reply(pool, reply_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reply not found".to_string()))?;

        ForumRepository::cast_vote(pool, reply_id, &actor.id, value.as_i16()).await?;

        let score = ForumRepository::reply_score(pool, reply_id).await?;

        Ok((value, score))
    }

    async fn require_thread(pool: &PgPool, id: &Uuid) -> AppResult<ForumThread> {
        ForumRepository::find_thread(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Thread not found".to_string()))
    }
}
