//! Contest lifecycle and registration

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{contest_repo::ContestSummaryRow, ContestRepository},
    error::{AppError, AppResult},
    models::{Contest, ContestStatus},
    utils::validation,
};

/// Contest reads go through here so status derivation stays in one place.
pub struct ContestService;

impl ContestService {
    /// List contests ordered by start time
    pub async fn list_contests(
        pool: &PgPool,
        page: u32,
        per_page: u32,
    ) -> AppResult<(Vec<ContestSummaryRow>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        ContestRepository::list(pool, offset, limit).await
    }

    /// Get contest by ID with its registration count
    pub async fn get_contest(pool: &PgPool, id: &Uuid) -> AppResult<(Contest, i64)> {
        let contest = ContestRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contest not found".to_string()))?;
        let participants = ContestRepository::participant_count(pool, id).await?;

        Ok((contest, participants))
    }

    /// Current registration count
    pub async fn participant_count(pool: &PgPool, contest_id: &Uuid) -> AppResult<i64> {
        ContestRepository::participant_count(pool, contest_id).await
    }

    /// Create a contest (admin)
    pub async fn create_contest(
        pool: &PgPool,
        title: &str,
        description: &str,
        rules: &str,
        prizes: &str,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> AppResult<Contest> {
        let title = validation::validate_title(title)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        Self::validate_window(start_time, end_time)?;

        ContestRepository::create(pool, &title, description, rules, prizes, start_time, end_time)
            .await
    }

    /// Update a contest (admin). The resulting window is revalidated even
    /// when only one endpoint moves.
    #[allow(clippy::too_many_arguments)]
    pub async fn update_contest(
        pool: &PgPool,
        id: &Uuid,
        title: Option<&str>,
        description: Option<&str>,
        rules: Option<&str>,
        prizes: Option<&str>,
        start_time: Option<DateTime<Utc>>,
        end_time: Option<DateTime<Utc>>,
    ) -> AppResult<Contest> {
        let existing = ContestRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contest not found".to_string()))?;

        let effective_start = start_time.unwrap_or(existing.start_time);
        let effective_end = end_time.unwrap_or(existing.end_time);
        Self::validate_window(effective_start, effective_end)?;

        let title = match title {
            Some(t) => Some(
                validation::validate_title(t).map_err(|e| AppError::Validation(e.to_string()))?,
            ),
            None => None,
        };

        ContestRepository::update(
            pool,
            id,
            title.as_deref(),
            description,
            rules,
            prizes,
            start_time,
            end_time,
        )
        .await
    }

    /// Delete a contest (admin)
    pub async fn delete_contest(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        ContestRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contest not found".to_string()))?;
        ContestRepository::delete(pool, id).await
    }

    /// Register the user for a contest
    pub async fn register(pool: &PgPool, contest_id: &Uuid, user_id: &Uuid) -> AppResult<()> {
        let contest = ContestRepository::find_by_id(pool, contest_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contest not found".to_string()))?;

        if contest.status() == ContestStatus::Ended {
            return Err(AppError::Validation(
                "Contest has already ended".to_string(),
            ));
        }

        if !ContestRepository::register(pool, contest_id, user_id).await? {
            return Err(AppError::Conflict(
                "Already registered for this contest".to_string(),
            ));
        }

        Ok(())
    }

    /// Remove the user's registration
    pub async fn unregister(pool: &PgPool, contest_id: &Uuid, user_id: &Uuid) -> AppResult<()> {
        ContestRepository::find_by_id(pool, contest_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contest not found".to_string()))?;

        ContestRepository::unregister(pool, contest_id, user_id).await
    }

    /// Whether the user is registered
    pub async fn is_registered(
        pool: &PgPool,
        contest_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<bool> {
        ContestRepository::is_registered(pool, contest_id, user_id).await
    }

    fn validate_window(start: DateTime<Utc>, end: DateTime<Utc>) -> AppResult<()> {
        if start >= end {
            return Err(AppError::Validation(
                "Contest must end after it starts".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn window_must_run_forward() {
        let now = Utc::now();
        assert!(ContestService::validate_window(now, now + Duration::hours(2)).is_ok());
        assert!(ContestService::validate_window(now, now).is_err());
        assert!(ContestService::validate_window(now + Duration::hours(2), now).is_err());
    }
}
