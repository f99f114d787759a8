//! Bearer-token authentication.
//!
//! Verifies the bearer token once, parses the role into its typed form,
//! and stores the result in request extensions. Handlers state their
//! requirement through the extractor they take: `AuthenticatedUser` for
//! any signed-in caller, `AdminUser` when the admin capability is
//! required, `OptionalAuth` when anonymous access is fine.

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::{error::AppError, models::Role, services::AuthService, state::AppState};

/// Identity attached to the request once its token checks out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub username: String,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Owner-or-admin check used by forum moderation paths.
    pub fn can_act_on(&self, owner_id: &Uuid) -> bool {
        self.id == *owner_id || self.is_admin()
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// Proof that the caller holds the admin capability. Extraction fails
/// with Forbidden for any other role, so admin handlers never inspect
/// the role themselves.
pub struct AdminUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = AuthenticatedUser::from_request_parts(parts, state).await?;
        if user.is_admin() {
            Ok(AdminUser(user))
        } else {
            Err(AppError::Forbidden(
                "Administrator access required".to_string(),
            ))
        }
    }
}

/// The caller's identity when present, `None` for anonymous requests.
pub struct OptionalAuth(pub Option<AuthenticatedUser>);

impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuth(
            parts.extensions.get::<AuthenticatedUser>().cloned(),
        ))
    }
}

/// Rejects the request unless it carries a valid bearer token.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    let Some(auth_header) = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    else {
        debug!(path = %path, "auth failed: no Authorization header");
        return Err(AppError::Unauthorized);
    };

    let Some(token) = auth_header.strip_prefix("Bearer ") else {
        debug!(path = %path, "auth failed: expected 'Bearer <token>'");
        return Err(AppError::Unauthorized);
    };

    let claims = AuthService::verify_token(token, &state.config().jwt.secret).map_err(|e| {
        debug!(path = %path, error = ?e, "auth failed: token rejected");
        e
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
        debug!(path = %path, sub = %claims.sub, "auth failed: malformed subject");
        AppError::InvalidToken
    })?;

    let user = AuthenticatedUser {
        id: user_id,
        username: claims.username,
        role: Role::parse(&claims.role),
    };

    debug!(path = %path, user_id = %user.id, role = %user.role, "authenticated");

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Like [`auth_middleware`] but anonymous requests pass through untouched.
pub async fn optional_auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    if let Some(token) = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
    {
        if let Ok(claims) = AuthService::verify_token(token, &state.config().jwt.secret) {
            if let Ok(user_id) = Uuid::parse_str(&claims.sub) {
                let user = AuthenticatedUser {
                    id: user_id,
                    username: claims.username,
                    role: Role::parse(&claims.role),
                };
                request.extensions_mut().insert(user);
            }
        }
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student() -> AuthenticatedUser {
        AuthenticatedUser {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            role: Role::Student,
        }
    }

    #[test]
    fn owner_or_admin_gate() {
        let user = student();
        let own_id = user.id;
        let other_id = Uuid::new_v4();

        assert!(user.can_act_on(&own_id));
        assert!(!user.can_act_on(&other_id));

        let admin = AuthenticatedUser {
            role: Role::Admin,
            ..student()
        };
        assert!(admin.can_act_on(&other_id));
    }
}
