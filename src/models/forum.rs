use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::thread_statuses;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ForumCategory {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreadStatus {
    Open,
    Closed,
}

impl ThreadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreadStatus::Open => thread_statuses::OPEN,
            ThreadStatus::Closed => thread_statuses::CLOSED,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            thread_statuses::OPEN => Some(ThreadStatus::Open),
            thread_statuses::CLOSED => Some(ThreadStatus::Closed),
            _ => None,
        }
    }
}

impl std::fmt::Display for ThreadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ForumThread {
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

impl ForumThread {
    pub fn is_closed(&self) -> bool {
        self.status == thread_statuses::CLOSED
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ForumReply {
    pub id: Uuid,
    pub thread_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Direction of a vote. The wire and storage representation is the signed
/// unit value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteValue {
    Up,
    Down,
}

impl VoteValue {
    pub fn as_i16(&self) -> i16 {
        match self {
            VoteValue::Up => 1,
            VoteValue::Down => -1,
        }
    }

    pub fn from_i16(value: i16) -> Option<Self> {
        match value {
            1 => Some(VoteValue::Up),
            -1 => Some(VoteValue::Down),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ForumVote {
    pub id: Uuid,
    pub reply_id: Uuid,
    pub user_id: Uuid,
    pub value: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vote_value_maps_to_signed_units() {
        assert_eq!(VoteValue::Up.as_i16(), 1);
        assert_eq!(VoteValue::Down.as_i16(), -1);
    }

    #[test]
    fn vote_value_rejects_anything_but_signed_units() {
        assert_eq!(VoteValue::from_i16(1), Some(VoteValue::Up));
        assert_eq!(VoteValue::from_i16(-1), Some(VoteValue::Down));
        assert_eq!(VoteValue::from_i16(0), None);
        assert_eq!(VoteValue::from_i16(2), None);
        assert_eq!(VoteValue::from_i16(-5), None);
    }

    #[test]
    fn thread_status_round_trips_through_str() {
        for s in [ThreadStatus::Open, ThreadStatus::Closed] {
            assert_eq!(ThreadStatus::parse(s.as_str()), Some(s));
        }
        assert_eq!(ThreadStatus::parse("archived"), None);
    }
}
