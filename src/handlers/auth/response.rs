//! Response bodies for the auth endpoints

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{models::User, services::IssuedTokens};

/// Login response: the signed-in user plus both tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

impl AuthResponse {
    pub fn new(user: User, tokens: IssuedTokens) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: tokens.expires_in,
            user: user.into(),
        }
    }
}

/// User as embedded in auth responses
#[derive(Debug, Serialize)]
pub struct UserResponse {
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

impl From<User> for UserResponse {
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

/// Returned by `POST /auth/register` with a 201
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserResponse,
}

/// Fresh token pair from `POST /auth/refresh`.
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl From<IssuedTokens> for RefreshResponse {
    fn from(tokens: IssuedTokens) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: tokens.expires_in,
        }
    }
}

/// Acknowledgment from `POST /auth/logout`.
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// Body of `GET /auth/me`.
#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub user: UserResponse,
    /// Progress toward the display cap, 0.0 to 100.0
    pub xp_percentage: f64,
}
