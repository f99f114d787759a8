//! Progression rules: XP awards, level derivation, daily streaks.
//!
//! All transition logic is pure and synchronous; persistence happens in
//! one repository call once the outcome is known.

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::{
    constants::XP_PER_LEVEL, db::repositories::UserRepository, error::AppResult, models::User,
    utils::time::today_utc,
};

/// Result of applying an accepted submission to a user's progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressionUpdate {
    pub xp: i32,
    pub level: i32,
    pub streak: i32,
    /// Points actually granted; zero when the problem was already solved.
    pub awarded: i32,
}

pub struct ProgressionService;

impl ProgressionService {
    /// Level grows by one per thousand xp, starting at 1.
    pub fn level_for_xp(xp: i32) -> i32 {
        xp.max(0) / XP_PER_LEVEL + 1
    }

    /// Streak transition for an accept on `today`.
    ///
    /// Consecutive-day accepts extend the streak, a same-day accept keeps
    /// it, anything else (gaps, clock weirdness, first ever accept)
    /// restarts at 1.
    pub fn next_streak(
        last_accepted: Option<NaiveDate>,
        today: NaiveDate,
        current_streak: i32,
    ) -> i32 {
        match last_accepted {
            Some(last) if last == today => current_streak,
            Some(last) if last.succ_opt() == Some(today) => current_streak + 1,
            _ => 1,
        }
    }

    /// Compute the progression outcome of an accepted submission.
    pub fn apply_accept(
        user: &User,
        problem_points: i32,
        already_solved: bool,
        today: NaiveDate,
    ) -> ProgressionUpdate {
        let awarded = if already_solved {
            0
        } else {
            problem_points.max(0)
        };
        let xp = user.xp + awarded;

        ProgressionUpdate {
            xp,
            level: Self::level_for_xp(xp),
            streak: Self::next_streak(user.last_accepted_at, today, user.streak),
            awarded,
        }
    }

    /// Apply and persist the progression outcome of an accepted submission.
    ///
    /// `already_solved` must reflect the state before the triggering
    /// submission row was inserted, otherwise every accept looks repeated.
    pub async fn record_accept(
        pool: &PgPool,
        user: &User,
        problem_points: i32,
        already_solved: bool,
    ) -> AppResult<User> {
        let today = today_utc();
        let update = Self::apply_accept(user, problem_points, already_solved, today);

        if update.awarded == 0 && update.streak == user.streak && user.last_accepted_at == Some(today)
        {
            // Nothing moved; skip the write
            return Ok(user.clone());
        }

        UserRepository::record_acceptance(
            pool,
            &user.id,
            update.xp,
            update.level,
            update.streak,
            today,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn user(xp: i32, streak: i32, last_accepted: Option<NaiveDate>) -> User {
        User {
            id: Uuid::new_v4(),
            username: "solver".to_string(),
            email: "solver@example.com".to_string(),
            password_hash: "hash".to_string(),
            display_name: None,
            role: "student".to_string(),
            college: "CampusCode Institute".to_string(),
            streak,
            college_rank: 500,
            global_rank: 9999,
            level: ProgressionService::level_for_xp(xp),
            xp,
            last_accepted_at: last_accepted,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn level_steps_every_thousand_xp() {
        assert_eq!(ProgressionService::level_for_xp(0), 1);
        assert_eq!(ProgressionService::level_for_xp(100), 1);
        assert_eq!(ProgressionService::level_for_xp(999), 1);
        assert_eq!(ProgressionService::level_for_xp(1000), 2);
        assert_eq!(ProgressionService::level_for_xp(2500), 3);
        assert_eq!(ProgressionService::level_for_xp(-10), 1);
    }

    #[test]
    fn streak_extends_on_consecutive_days() {
        let today = date(2025, 9, 10);
        assert_eq!(
            ProgressionService::next_streak(Some(date(2025, 9, 9)), today, 4),
            5
        );
    }

    #[test]
    fn streak_unchanged_on_same_day() {
        let today = date(2025, 9, 10);
        assert_eq!(ProgressionService::next_streak(Some(today), today, 4), 4);
    }

    #[test]
    fn streak_resets_after_a_gap() {
        let today = date(2025, 9, 10);
        assert_eq!(
            ProgressionService::next_streak(Some(date(2025, 9, 7)), today, 9),
            1
        );
    }

    #[test]
    fn streak_starts_at_one_with_no_history() {
        let today = date(2025, 9, 10);
        assert_eq!(ProgressionService::next_streak(None, today, 3), 1);
    }

    #[test]
    fn streak_resets_when_dates_run_backwards() {
        let today = date(2025, 9, 10);
        assert_eq!(
            ProgressionService::next_streak(Some(date(2025, 9, 11)), today, 6),
            1
        );
    }

    #[test]
    fn streak_handles_month_boundaries() {
        let today = date(2025, 10, 1);
        assert_eq!(
            ProgressionService::next_streak(Some(date(2025, 9, 30)), today, 2),
            3
        );
    }

    #[test]
    fn first_accept_awards_problem_points() {
        let u = user(100, 1, None);
        let update = ProgressionService::apply_accept(&u, 40, false, date(2025, 9, 10));

        assert_eq!(update.awarded, 40);
        assert_eq!(update.xp, 140);
        assert_eq!(update.level, 1);
        assert_eq!(update.streak, 1);
    }

    #[test]
    fn repeat_accept_awards_nothing() {
        let u = user(140, 2, Some(date(2025, 9, 9)));
        let update = ProgressionService::apply_accept(&u, 40, true, date(2025, 9, 10));

        assert_eq!(update.awarded, 0);
        assert_eq!(update.xp, 140);
        assert_eq!(update.streak, 3);
    }

    #[test]
    fn level_bumps_when_award_crosses_threshold() {
        let u = user(980, 1, Some(date(2025, 9, 10)));
        let update = ProgressionService::apply_accept(&u, 40, false, date(2025, 9, 10));

        assert_eq!(update.xp, 1020);
        assert_eq!(update.level, 2);
    }

    #[test]
    fn negative_point_values_award_nothing() {
        let u = user(100, 1, None);
        let update = ProgressionService::apply_accept(&u, -5, false, date(2025, 9, 10));
        assert_eq!(update.awarded, 0);
        assert_eq!(update.xp, 100);
    }
}
