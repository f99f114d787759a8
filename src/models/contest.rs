use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Derived from the time window at read time. There is no stored status
/// column, so a contest can never report a stale phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContestStatus {
    Upcoming,
    Active,
    Ended,
}

impl ContestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContestStatus::Upcoming => "upcoming",
            ContestStatus::Active => "active",
            ContestStatus::Ended => "ended",
        }
    }
}

impl std::fmt::Display for ContestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Contest {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub rules: String,
    pub prizes: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contest {
    pub fn status(&self) -> ContestStatus {
        self.status_at(Utc::now())
    }

    pub fn status_at(&self, now: DateTime<Utc>) -> ContestStatus {
        if now < self.start_time {
            ContestStatus::Upcoming
        } else if now < self.end_time {
            ContestStatus::Active
        } else {
            ContestStatus::Ended
        }
    }

    /// Whole-hour span rendered as "N Hours". Sub-hour remainders are
    /// truncated and multi-day spans stay in hours, e.g. "26 Hours".
    pub fn duration(&self) -> String {
        let hours = (self.end_time - self.start_time).num_hours();
        format!("{hours} Hours")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContestRegistration {
    pub id: Uuid,
    pub contest_id: Uuid,
    pub user_id: Uuid,
    pub registered_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn contest(start: DateTime<Utc>, end: DateTime<Utc>) -> Contest {
        Contest {
            id: Uuid::new_v4(),
            title: "Weekly Sprint".to_string(),
            description: String::new(),
            rules: String::new(),
            prizes: String::new(),
            start_time: start,
            end_time: end,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn status_follows_the_time_window() {
        let now = Utc::now();
        let c = contest(now + Duration::hours(1), now + Duration::hours(3));
        assert_eq!(c.status_at(now), ContestStatus::Upcoming);
        assert_eq!(c.status_at(now + Duration::hours(2)), ContestStatus::Active);
        assert_eq!(c.status_at(now + Duration::hours(4)), ContestStatus::Ended);
    }

    #[test]
    fn status_boundaries_are_inclusive_start_exclusive_end() {
        let now = Utc::now();
        let c = contest(now, now + Duration::hours(2));
        assert_eq!(c.status_at(now), ContestStatus::Active);
        assert_eq!(c.status_at(now + Duration::hours(2)), ContestStatus::Ended);
    }

    #[test]
    fn duration_truncates_to_whole_hours() {
        let now = Utc::now();
        assert_eq!(contest(now, now + Duration::minutes(59)).duration(), "0 Hours");
        assert_eq!(contest(now, now + Duration::minutes(90)).duration(), "1 Hours");
        assert_eq!(contest(now, now + Duration::hours(2)).duration(), "2 Hours");
    }

    #[test]
    fn duration_reports_multi_day_spans_in_hours() {
        let now = Utc::now();
        let c = contest(now, now + Duration::hours(26));
        assert_eq!(c.duration(), "26 Hours");
    }
}
