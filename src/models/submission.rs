use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One row per judged attempt. The ledger is append-only: resubmission
/// inserts a new row, and `problem_id` is nulled if the problem goes away.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Submission {
    pub id: Uuid,
    pub user_id: Uuid,
    pub problem_id: Option<Uuid>,
    pub language: String,
    #[serde(skip_serializing)]
    pub code: String,
    pub passed: bool,
    pub created_at: DateTime<Utc>,
}
