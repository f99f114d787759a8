//! Response bodies for the user endpoints

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::User;

/// Full public profile, including progression state
#[derive(Debug, Serialize)]
pub struct UserProfileResponse {
    pub id: Uuid,
    pub username: String,
    pub display_name: Option<String>,
    pub role: String,
    pub college: String,
    pub level: i32,
    pub xp: i32,
    /// Progress toward the display cap, 0.0 to 100.0
    pub xp_percentage: f64,
    pub streak: i32,
    pub global_rank: i32,
    pub college_rank: i32,
    pub solved_count: i64,
    pub created_at: DateTime<Utc>,
}

impl UserProfileResponse {
    pub fn from_parts(user: User, solved_count: i64) -> Self {
        let xp_percentage = user.xp_percentage();
        Self {
            id: user.id,
            username: user.username,
            display_name: user.display_name,
            role: user.role,
            college: user.college,
            level: user.level,
            xp: user.xp,
            xp_percentage,
            streak: user.streak,
            global_rank: user.global_rank,
            college_rank: user.college_rank,
            solved_count,
            created_at: user.created_at,
        }
    }
}

/// Compact user entry for list views
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub username: String,
    pub display_name: Option<String>,
    pub college: String,
    pub level: i32,
    pub xp: i32,
    pub global_rank: i32,
    pub college_rank: i32,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            display_name: user.display_name,
            college: user.college,
            level: user.level,
            xp: user.xp,
            global_rank: user.global_rank,
            college_rank: user.college_rank,
        }
    }
}

/// Page of users plus paging info
#[derive(Debug, Serialize)]
pub struct UsersListResponse {
    pub users: Vec<UserSummary>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}
