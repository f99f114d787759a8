//! Response bodies for the contest endpoints

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Contest, ContestStatus};

/// Contest with its derived schedule fields
#[derive(Debug, Serialize)]
pub struct ContestResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub rules: String,
    pub prizes: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Derived from the clock on every read, never stored
    pub status: ContestStatus,
    pub duration: String,
    pub participants: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContestResponse {
    pub fn from_parts(contest: Contest, participants: i64) -> Self {
        let status = contest.status();
        let duration = contest.duration();
        Self {
            id: contest.id,
            title: contest.title,
            description: contest.description,
            rules: contest.rules,
            prizes: contest.prizes,
            start_time: contest.start_time,
            end_time: contest.end_time,
            status,
            duration,
            participants,
            created_at: contest.created_at,
            updated_at: contest.updated_at,
        }
    }
}

/// Upcoming and past contests in one listing
#[derive(Debug, Serialize)]
pub struct ContestsListResponse {
    pub contests: Vec<ContestResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

/// Registration state for the calling user
#[derive(Debug, Serialize)]
pub struct RegistrationStatusResponse {
    pub contest_id: Uuid,
    pub registered: bool,
}

/// Simple acknowledgement
#[derive(Debug, Serialize)]
pub struct ContestMessageResponse {
    pub message: String,
}
