//! Forum response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    db::repositories::forum_repo::{ReplyWithScore, ThreadSummaryRow},
    models::{ForumCategory, ForumReply, ForumThread},
};

/// Category response
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<ForumCategory> for CategoryResponse {
    fn from(c: ForumCategory) -> Self {
        Self {
            id: c.id,
            name: c.name,
            created_at: c.created_at,
        }
    }
}

/// Categories list response
#[derive(Debug, Serialize)]
pub struct CategoriesListResponse {
    pub categories: Vec<CategoryResponse>,
}

/// Full thread payload
#[derive(Debug, Serialize)]
pub struct ThreadResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
    pub category_id: Option<Uuid>,
    pub status: String,
    pub views: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ForumThread> for ThreadResponse {
    fn from(t: ForumThread) -> Self {
        Self {
            id: t.id,
            title: t.title,
            content: t.content,
            author_id: t.author_id,
            category_id: t.category_id,
            status: t.status,
            views: t.views,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

/// Thread entry for list views; body text is omitted
#[derive(Debug, Serialize)]
pub struct ThreadSummaryResponse {
    pub id: Uuid,
    pub title: String,
    pub author_id: Uuid,
    pub category_id: Option<Uuid>,
    pub status: String,
    pub views: i64,
    pub reply_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ThreadSummaryRow> for ThreadSummaryResponse {
    fn from(row: ThreadSummaryRow) -> Self {
        Self {
            id: row.thread.id,
            title: row.thread.title,
            author_id: row.thread.author_id,
            category_id: row.thread.category_id,
            status: row.thread.status,
            views: row.thread.views,
            reply_count: row.reply_count,
            created_at: row.thread.created_at,
            updated_at: row.thread.updated_at,
        }
    }
}

/// Threads list response
#[derive(Debug, Serialize)]
pub struct ThreadsListResponse {
    pub threads: Vec<ThreadSummaryResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

/// Reply with its live score
#[derive(Debug, Serialize)]
pub struct ReplyResponse {
    pub id: Uuid,
    pub thread_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    /// Sum of current vote values, recomputed on every read
    pub score: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ReplyWithScore> for ReplyResponse {
    fn from(row: ReplyWithScore) -> Self {
        Self {
            id: row.reply.id,
            thread_id: row.reply.thread_id,
            author_id: row.reply.author_id,
            content: row.reply.content,
            score: row.score,
            created_at: row.reply.created_at,
            updated_at: row.reply.updated_at,
        }
    }
}

impl ReplyResponse {
    /// A reply that has not been voted on yet
    pub fn fresh(reply: ForumReply) -> Self {
        Self {
            id: reply.id,
            thread_id: reply.thread_id,
            author_id: reply.author_id,
            content: reply.content,
            score: 0,
            created_at: reply.created_at,
            updated_at: reply.updated_at,
        }
    }
}

/// Thread with its reply tree
#[derive(Debug, Serialize)]
pub struct ThreadDetailResponse {
    pub thread: ThreadResponse,
    pub replies: Vec<ReplyResponse>,
}

/// Outcome of a vote
#[derive(Debug, Serialize)]
pub struct VoteResponse {
    pub reply_id: Uuid,
    pub value: i16,
    /// Score of the reply after this vote landed
    pub score: i64,
}
