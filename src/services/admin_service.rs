//! Moderation and platform administration

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::roles,
    db::repositories::{
        ContestRepository, ForumRepository, ProblemRepository, SubmissionRepository,
        UserRepository,
    },
    error::{AppError, AppResult},
    handlers::admin::response::PlatformStatsResponse,
    models::User,
    services::{RankingService, XpRankProvider},
    utils::validation,
};

/// Admin service for platform management
pub struct AdminService;

impl AdminService {
    /// Platform-wide counters for the admin dashboard. The counts are
    /// independent, so they run concurrently against the pool.
    pub async fn platform_stats(pool: &PgPool) -> AppResult<PlatformStatsResponse> {
        let (students, problems, contests, submissions, threads, replies) = futures::try_join!(
            UserRepository::count_by_role(pool, roles::STUDENT),
            ProblemRepository::count(pool),
            ContestRepository::count(pool),
            SubmissionRepository::count(pool),
            ForumRepository::count_threads(pool),
            ForumRepository::count_replies(pool),
        )?;

        Ok(PlatformStatsResponse {
            students,
            problems,
            contests,
            submissions,
            threads,
            replies,
        })
    }

    /// Change a user's role
    pub async fn update_user_role(pool: &PgPool, user_id: &Uuid, role: &str) -> AppResult<User> {
        validation::validate_role(role).map_err(|e| AppError::Validation(e.to_string()))?;

        UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        UserRepository::update_role(pool, user_id, role).await
    }

    /// Recompute all ranks with the default provider. Returns how many
    /// users were reranked.
    pub async fn recompute_ranks(pool: &PgPool) -> AppResult<usize> {
        RankingService::recompute_all(pool, &XpRankProvider).await
    }
}
