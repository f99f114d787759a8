//! Handlers for contests and registration

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::ContestService,
    state::AppState,
};

use super::{
    request::ListContestsQuery,
    response::{
        ContestMessageResponse, ContestResponse, ContestsListResponse, RegistrationStatusResponse,
    },
};

/// List contests ordered by start time
pub async fn list_contests(
    State(state): State<AppState>,
    Query(query): Query<ListContestsQuery>,
) -> AppResult<Json<ContestsListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);

    let (rows, total) = ContestService::list_contests(state.db(), page, per_page).await?;

    Ok(Json(ContestsListResponse {
        contests: rows
            .into_iter()
            .map(|row| ContestResponse::from_parts(row.contest, row.participants))
            .collect(),
        total,
        page,
        per_page,
    }))
}

/// Fetch one contest with its derived status
pub async fn get_contest(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ContestResponse>> {
    let (contest, participants) = ContestService::get_contest(state.db(), &id).await?;

    Ok(Json(ContestResponse::from_parts(contest, participants)))
}

/// Register the calling user for a contest
pub async fn register_for_contest(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<(StatusCode, Json<ContestMessageResponse>)> {
    ContestService::register(state.db(), &id, &auth_user.id).await?;

    Ok((
        StatusCode::CREATED,
        Json(ContestMessageResponse {
            message: "Registered for contest".to_string(),
        }),
    ))
}

/// Remove the calling user's registration
pub async fn unregister_from_contest(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ContestMessageResponse>> {
    ContestService::unregister(state.db(), &id, &auth_user.id).await?;

    Ok(Json(ContestMessageResponse {
        message: "Unregistered from contest".to_string(),
    }))
}

/// Whether the calling user is registered
pub async fn registration_status(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<RegistrationStatusResponse>> {
    let registered = ContestService::is_registered(state.db(), &id, &auth_user.id).await?;

    Ok(Json(RegistrationStatusResponse {
        contest_id: id,
        registered,
    }))
}
