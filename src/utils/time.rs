//! Date helpers

use chrono::{NaiveDate, Utc};

/// Current UTC calendar date. Streak accounting runs on UTC days.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}
