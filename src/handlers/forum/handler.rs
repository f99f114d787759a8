//! Handlers for threads, replies, and votes

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::ForumService,
    state::AppState,
};

use super::{
    request::{CastVoteRequest, CreateReplyRequest, CreateThreadRequest, ListThreadsQuery},
    response::{
        CategoriesListResponse, ReplyResponse, ThreadDetailResponse, ThreadResponse,
        ThreadsListResponse, VoteResponse,
    },
};

/// List all categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<CategoriesListResponse>> {
    let categories = ForumService::list_categories(state.db()).await?;

    Ok(Json(CategoriesListResponse {
        categories: categories.into_iter().map(Into::into).collect(),
    }))
}

/// List threads, optionally within one category
pub async fn list_threads(
    State(state): State<AppState>,
    Query(query): Query<ListThreadsQuery>,
) -> AppResult<Json<ThreadsListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);

    let (threads, total) =
        ForumService::list_threads(state.db(), page, per_page, query.category_id.as_ref()).await?;

    Ok(Json(ThreadsListResponse {
        threads: threads.into_iter().map(Into::into).collect(),
        total,
        page,
        per_page,
    }))
}

/// Open a new thread
pub async fn create_thread(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateThreadRequest>,
) -> AppResult<(StatusCode, Json<ThreadResponse>)> {
    payload.validate()?;

    let thread = ForumService::create_thread(
        state.db(),
        &auth_user,
        &payload.title,
        &payload.content,
        payload.category_id.as_ref(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(thread.into())))
}

/// Read a thread with its replies. Each read counts as a view.
pub async fn get_thread(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ThreadDetailResponse>> {
    let (thread, replies) = ForumService::get_thread(state.db(), &id).await?;

    Ok(Json(ThreadDetailResponse {
        thread: thread.into(),
        replies: replies.into_iter().map(Into::into).collect(),
    }))
}

/// Delete a thread (author or admin)
pub async fn delete_thread(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    ForumService::delete_thread(state.db(), &auth_user, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Reply to an open thread
pub async fn post_reply(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreateReplyRequest>,
) -> AppResult<(StatusCode, Json<ReplyResponse>)> {
    payload.validate()?;

    let reply = ForumService::post_reply(state.db(), &auth_user, &id, &payload.content).await?;

    Ok((StatusCode::CREATED, Json(ReplyResponse::fresh(reply))))
}

/// Close a thread (author or admin)
pub async fn close_thread(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ThreadResponse>> {
    let thread = ForumService::close_thread(state.db(), &auth_user, &id).await?;
    Ok(Json(thread.into()))
}

/// Reopen a closed thread (admin only)
pub async fn reopen_thread(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ThreadResponse>> {
    let thread = ForumService::reopen_thread(state.db(), &auth_user, &id).await?;
    Ok(Json(thread.into()))
}

/// Delete a reply (author or admin)
pub async fn delete_reply(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    ForumService::delete_reply(state.db(), &auth_user, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Vote on a reply. Casting the opposite value moves the vote; casting
/// the same value again changes nothing.
pub async fn cast_vote(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<CastVoteRequest>,
) -> AppResult<Json<VoteResponse>> {
    let (value, score) = ForumService::cast_vote(state.db(), &auth_user, &id, payload.value).await?;

    Ok(Json(VoteResponse {
        reply_id: id,
        value: value.as_i16(),
        score,
    }))
}
