//! Handlers for registration, login, and session management

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::{AuthService, UserService},
    state::AppState,
};

use super::{
    request::{LoginRequest, LogoutRequest, RefreshTokenRequest, RegisterRequest},
    response::{
        AuthResponse, CurrentUserResponse, LogoutResponse, RefreshResponse, RegisterResponse,
        UserResponse,
    },
};

/// Create an account and return it with a 201
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    payload.validate()?;

    let user = AuthService::register(
        state.db(),
        &payload.username,
        &payload.email,
        &payload.password,
        payload.display_name.as_deref(),
        payload.college.as_deref(),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            user: user.into(),
        }),
    ))
}

/// Verify credentials and issue a token pair
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    payload.validate()?;

    let (user, tokens) = AuthService::login(
        state.db(),
        state.redis(),
        state.config(),
        &payload.identifier,
        &payload.password,
    )
    .await?;

    Ok(Json(AuthResponse::new(user, tokens)))
}

/// Trade a refresh token for a fresh pair
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(payload): Json<RefreshTokenRequest>,
) -> AppResult<Json<RefreshResponse>> {
    let tokens = AuthService::refresh_token(
        state.db(),
        state.redis(),
        state.config(),
        &payload.refresh_token,
    )
    .await?;

    Ok(Json(tokens.into()))
}

/// Logout, optionally revoking every session
pub async fn logout(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(body): Json<Option<LogoutRequest>>,
) -> AppResult<Json<LogoutResponse>> {
    let everywhere = body.and_then(|b| b.all_sessions).unwrap_or(false);

    AuthService::logout(state.redis(), &auth_user.id, everywhere).await?;

    Ok(Json(LogoutResponse {
        message: "Logged out".to_string(),
    }))
}

/// Current authenticated user with progression detail
pub async fn get_current_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<CurrentUserResponse>> {
    let user = UserService::get_user_by_id(state.db(), &auth_user.id).await?;
    let xp_percentage = user.xp_percentage();

    Ok(Json(CurrentUserResponse {
        user: UserResponse::from(user),
        xp_percentage,
    }))
}
