//! Request bodies for the submission endpoints

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Body of `POST /submissions`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSubmissionRequest {
    /// The problem being attempted
    pub problem_id: Uuid,

    /// Language identifier, must be one of the supported set
    #[validate(length(min = 1, max = 20))]
    pub language: String,

    #[validate(length(min = 1, max = 65536))] // 64 KB cap
    pub code: String,
}

/// Query parameters for `GET /submissions`.
#[derive(Debug, Deserialize)]
pub struct ListSubmissionsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub problem_id: Option<Uuid>,
    /// Only honored for admin callers; everyone else sees their own
    pub user_id: Option<Uuid>,
}
