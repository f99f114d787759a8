//! Profile reads and updates

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{SubmissionRepository, UserRepository},
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    models::User,
    services::AuthService,
    utils::validation,
};

pub struct UserService;

impl UserService {
    pub async fn get_user_by_id(pool: &PgPool, id: &Uuid) -> AppResult<User> {
        UserRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// A user together with how many problems they have solved
    pub async fn profile_stats(pool: &PgPool, id: &Uuid) -> AppResult<(User, i64)> {
        let user = Self::get_user_by_id(pool, id).await?;
        let solved = SubmissionRepository::count_solved(pool, id).await?;
        Ok((user, solved))
    }

    /// Distinct problems this user has passed
    pub async fn solved_count(pool: &PgPool, id: &Uuid) -> AppResult<i64> {
        SubmissionRepository::count_solved(pool, id).await
    }

    /// Page through users, optionally narrowed by search text or role
    pub async fn list_users(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        search: Option<&str>,
        role: Option<&str>,
    ) -> AppResult<(Vec<User>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        UserRepository::list(pool, offset, limit, search, role).await
    }

    /// Update a profile. Only the owner or an admin may touch it; a
    /// password change additionally proves the current password.
    #[allow(clippy::too_many_arguments)]
    pub async fn update_user(
        pool: &PgPool,
        actor: &AuthenticatedUser,
        target_id: &Uuid,
        username: Option<&str>,
        email: Option<&str>,
        display_name: Option<&str>,
        college: Option<&str>,
        current_password: Option<&str>,
        new_password: Option<&str>,
    ) -> AppResult<User> {
        if !actor.can_act_on(target_id) {
            return Err(AppError::Forbidden(
                "Cannot update other users' profiles".to_string(),
            ));
        }

        let user = Self::get_user_by_id(pool, target_id).await?;

        // Username changes re-run the signup uniqueness rules
        if let Some(new_username) = username {
            if new_username != user.username {
                validation::validate_username(new_username)
                    .map_err(|e| AppError::Validation(e.to_string()))?;

                if UserRepository::find_by_username(pool, new_username)
                    .await?
                    .is_some()
                {
                    return Err(AppError::AlreadyExists(
                        "Username already taken".to_string(),
                    ));
                }
            }
        }

        if let Some(new_email) = email {
            if new_email != user.email {
                validation::validate_email(new_email)
                    .map_err(|e| AppError::Validation(e.to_string()))?;

                if UserRepository::find_by_email(pool, new_email).await?.is_some() {
                    return Err(AppError::AlreadyExists(
                        "Email already registered".to_string(),
                    ));
                }
            }
        }

        let password_hash = if let Some(new_pwd) = new_password {
            let current_pwd = current_password
                .ok_or_else(|| AppError::Validation("Current password required".to_string()))?;

            if !AuthService::verify_password(current_pwd, &user.password_hash)? {
                return Err(AppError::InvalidCredentials);
            }

            validation::validate_password(new_pwd)
                .map_err(|e| AppError::Validation(e.to_string()))?;

            Some(AuthService::hash_password(new_pwd)?)
        } else {
            None
        };

        UserRepository::update(
            pool,
            target_id,
            username,
            email,
            display_name,
            college,
            password_hash.as_deref(),
        )
        .await
    }
}
