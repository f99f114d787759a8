//! Response bodies for the admin endpoints

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::User;

/// Platform-wide counters for the admin dashboard
#[derive(Debug, Serialize)]
pub struct PlatformStatsResponse {
    pub students: i64,
    pub problems: i64,
    pub contests: i64,
    pub submissions: i64,
    pub threads: i64,
    pub replies: i64,
}

/// Admin user view, including the email address
#[derive(Debug, Serialize)]
pub struct AdminUserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
    pub role: String,
    pub college: String,
    pub level: i32,
    pub xp: i32,
    pub streak: i32,
    pub global_rank: i32,
    pub college_rank: i32,
    pub created_at: DateTime<Utc>,
}

impl From<User> for AdminUserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            display_name: user.display_name,
            role: user.role,
            college: user.college,
            level: user.level,
            xp: user.xp,
            streak: user.streak,
            global_rank: user.global_rank,
            college_rank: user.college_rank,
            created_at: user.created_at,
        }
    }
}

/// Page of users for the admin listing
#[derive(Debug, Serialize)]
pub struct AdminUsersListResponse {
    pub users: Vec<AdminUserResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

/// Outcome of a rank recomputation run
#[derive(Debug, Serialize)]
pub struct RecomputeRanksResponse {
    /// How many users received fresh ranks
    pub updated: usize,
}
