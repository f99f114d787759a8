//! Accounts and sessions
//!
//! Access tokens are stateless JWTs. Refresh tokens are opaque random
//! strings; only their SHA-256 digest reaches Redis, so a dumped Redis
//! instance cannot be replayed into sessions.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    config::Config,
    constants::{DEFAULT_COLLEGE, REFRESH_TOKEN_LENGTH},
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    models::User,
    utils::{
        crypto::{generate_secure_token, hash_string},
        validation,
    },
};

/// JWT claims
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub username: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    fn for_user(user: &User, ttl_hours: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: user.id.to_string(),
            username: user.username.clone(),
            role: user.role.clone(),
            exp: (now + Duration::hours(ttl_hours)).timestamp(),
            iat: now.timestamp(),
        }
    }
}

/// A freshly issued access/refresh token pair
#[derive(Debug)]
pub struct IssuedTokens {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
}

pub struct AuthService;

impl AuthService {
    /// Create an account. The password is hashed before anything touches the database.
    pub async fn register(
        pool: &PgPool,
        username: &str,
        email: &str,
        password: &str,
        display_name: Option<&str>,
        college: Option<&str>,
    ) -> AppResult<User> {
        validation::validate_username(username)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        validation::validate_email(email).map_err(|e| AppError::Validation(e.to_string()))?;
        validation::validate_password(password)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if UserRepository::find_by_username(pool, username)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists("Username already taken".to_string()));
        }
        if UserRepository::find_by_email(pool, email).await?.is_some() {
            return Err(AppError::AlreadyExists(
                "Email already registered".to_string(),
            ));
        }

        let password_hash = Self::hash_password(password)?;

        UserRepository::create(
            pool,
            username,
            email,
            &password_hash,
            display_name,
            college.unwrap_or(DEFAULT_COLLEGE),
        )
        .await
    }

    /// Login with username or email
    pub async fn login(
        pool: &PgPool,
        mut redis: ConnectionManager,
        config: &Config,
        identifier: &str,
        password: &str,
    ) -> AppResult<(User, IssuedTokens)> {
        let user = UserRepository::find_by_identifier(pool, identifier)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !Self::verify_password(password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        let tokens = Self::open_session(&mut redis, config, &user).await?;

        Ok((user, tokens))
    }

    /// Rotate a refresh token into a fresh pair. The presented token is
    /// dead after this call succeeds.
    pub async fn refresh_token(
        pool: &PgPool,
        mut redis: ConnectionManager,
        config: &Config,
        refresh_token: &str,
    ) -> AppResult<IssuedTokens> {
        let digest = hash_string(refresh_token);
        let (key, user_id) = Self::find_session(&mut redis, &digest)
            .await?
            .ok_or(AppError::InvalidToken)?;

        let user = UserRepository::find_by_id(pool, &user_id)
            .await?
            .ok_or(AppError::InvalidToken)?;

        redis.del::<_, ()>(&key).await?;

        Self::open_session(&mut redis, config, &user).await
    }

    /// Logout. `all_sessions` revokes every refresh token the user
    /// holds; otherwise the client simply discards its copy.
    pub async fn logout(
        mut redis: ConnectionManager,
        user_id: &Uuid,
        all_sessions: bool,
    ) -> AppResult<()> {
        if all_sessions {
            let pattern = format!("refresh_token:{user_id}:*");
            let keys: Vec<String> = redis::cmd("KEYS")
                .arg(&pattern)
                .query_async(&mut redis)
                .await?;

            for key in keys {
                redis.del::<_, ()>(&key).await?;
            }
        }

        Ok(())
    }

    /// Verify a JWT and extract its claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(data.claims)
    }

    /// Hash a password with Argon2
    pub fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
    }

    /// Check a password against a stored hash
    pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {e}")))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }

    /// Issue a token pair and record the refresh digest in Redis
    async fn open_session(
        redis: &mut ConnectionManager,
        config: &Config,
        user: &User,
    ) -> AppResult<IssuedTokens> {
        let claims = Claims::for_user(user, config.jwt.expiry_hours);
        let access_token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {e}")))?;

        let refresh_token = generate_secure_token(REFRESH_TOKEN_LENGTH);
        let key = format!("refresh_token:{}:{}", user.id, hash_string(&refresh_token));
        let ttl = (config.jwt.refresh_token_expiry_days * 24 * 60 * 60) as u64;
        redis.set_ex::<_, _, ()>(&key, "1", ttl).await?;

        Ok(IssuedTokens {
            access_token,
            refresh_token,
            expires_in: config.jwt.expiry_hours * 3600,
        })
    }

    /// Look up a session by refresh-token digest. Returns the full key
    /// and the user it belongs to.
    async fn find_session(
        redis: &mut ConnectionManager,
        digest: &str,
    ) -> AppResult<Option<(String, Uuid)>> {
        let pattern = format!("refresh_token:*:{digest}");
        let keys: Vec<String> = redis::cmd("KEYS")
            .arg(&pattern)
            .query_async(redis)
            .await?;

        let Some(key) = keys.into_iter().next() else {
            return Ok(None);
        };

        let user_id = key
            .split(':')
            .nth(1)
            .and_then(|part| Uuid::parse_str(part).ok());

        Ok(user_id.map(|id| (key, id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_round_trip() {
        let hash = AuthService::hash_password("Sup3rSecret").unwrap();
        assert!(AuthService::verify_password("Sup3rSecret", &hash).unwrap());
        assert!(!AuthService::verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn hashing_salts_each_password() {
        let first = AuthService::hash_password("Sup3rSecret").unwrap();
        let second = AuthService::hash_password("Sup3rSecret").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn verify_token_rejects_garbage() {
        assert!(AuthService::verify_token("not-a-jwt", "secret").is_err());
    }

    #[test]
    fn claims_round_trip_through_a_signed_token() {
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            username: "alice".to_string(),
            role: "student".to_string(),
            exp: (Utc::now() + Duration::hours(1)).timestamp(),
            iat: Utc::now().timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"unit-test-secret"),
        )
        .unwrap();

        let decoded = AuthService::verify_token(&token, "unit-test-secret").unwrap();
        assert_eq!(decoded.sub, claims.sub);
        assert_eq!(decoded.username, "alice");
        assert_eq!(decoded.role, "student");
    }

    #[test]
    fn expired_tokens_map_to_token_expired() {
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            username: "alice".to_string(),
            role: "student".to_string(),
            exp: (Utc::now() - Duration::hours(2)).timestamp(),
            iat: (Utc::now() - Duration::hours(3)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"unit-test-secret"),
        )
        .unwrap();

        let got = AuthService::verify_token(&token, "unit-test-secret");
        assert!(matches!(got, Err(AppError::TokenExpired)));
    }
}
