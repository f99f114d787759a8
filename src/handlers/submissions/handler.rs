//! Handlers for submitting and reviewing code

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::SubmissionService,
    state::AppState,
};

use super::{
    request::{CreateSubmissionRequest, ListSubmissionsQuery},
    response::{SubmissionDetailResponse, SubmissionsListResponse, SubmitResponse},
};

/// Submit code for a problem. Grading runs inline against the judge;
/// the response carries the verdict and any progression change.
pub async fn create_submission(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateSubmissionRequest>,
) -> AppResult<(StatusCode, Json<SubmitResponse>)> {
    payload.validate()?;

    let graded = SubmissionService::submit(
        state.db(),
        state.judge().as_ref(),
        &auth_user,
        &payload.problem_id,
        &payload.language,
        &payload.code,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(graded.into())))
}

/// List submissions. Students see their own; admins may filter by user.
pub async fn list_submissions(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ListSubmissionsQuery>,
) -> AppResult<Json<SubmissionsListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);

    let filter_user_id = if auth_user.is_admin() {
        query.user_id
    } else {
        Some(auth_user.id)
    };

    let (submissions, total) = SubmissionService::list_submissions(
        state.db(),
        page,
        per_page,
        filter_user_id.as_ref(),
        query.problem_id.as_ref(),
    )
    .await?;

    Ok(Json(SubmissionsListResponse {
        submissions: submissions.iter().map(Into::into).collect(),
        total,
        page,
        per_page,
    }))
}

/// Get a submission with its source code (owner or admin)
pub async fn get_submission(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SubmissionDetailResponse>> {
    let submission = SubmissionService::get_submission(state.db(), &id).await?;

    if !auth_user.can_act_on(&submission.user_id) {
        return Err(AppError::Forbidden(
            "Cannot view other users' submissions".to_string(),
        ));
    }

    Ok(Json(submission.into()))
}
