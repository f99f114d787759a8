//! Forum request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::constants::{MAX_FORUM_BODY_LENGTH, MAX_THREAD_TITLE_LENGTH};

/// Open a new thread
#[derive(Debug, Deserialize, Validate)]
pub struct CreateThreadRequest {
    #[validate(length(min = 1, max = MAX_THREAD_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(min = 1, max = MAX_FORUM_BODY_LENGTH))]
    pub content: String,

    pub category_id: Option<Uuid>,
}

/// Reply to a thread
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReplyRequest {
    #[validate(length(min = 1, max = MAX_FORUM_BODY_LENGTH))]
    pub content: String,
}

/// Cast or change a vote on a reply
#[derive(Debug, Deserialize)]
pub struct CastVoteRequest {
    /// +1 or -1; anything else is rejected
    pub value: i16,
}

/// List threads query parameters
#[derive(Debug, Deserialize)]
pub struct ListThreadsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub category_id: Option<Uuid>,
}
