//! Handlers for the admin surface

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
    handlers::{
        contests::response::ContestResponse,
        forum::response::CategoryResponse,
        problems::response::{ProblemResponse, TestCaseResponse},
        users::request::ListUsersQuery,
    },
    middleware::auth::AdminUser,
    services::{AdminService, ContestService, ForumService, ProblemService, UserService},
    state::AppState,
};

use super::{
    request::{
        CreateCategoryRequest, CreateContestRequest, CreateProblemRequest, CreateTestCaseRequest,
        UpdateContestRequest, UpdateProblemRequest, UpdateUserRoleRequest,
    },
    response::{
        AdminUserResponse, AdminUsersListResponse, PlatformStatsResponse, RecomputeRanksResponse,
    },
};

/// Full user listing, emails and roles included
pub async fn list_all_users(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Query(query): Query<ListUsersQuery>,
) -> AppResult<Json<AdminUsersListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);

    let (users, total) = UserService::list_users(
        state.db(),
        page,
        per_page,
        query.search.as_deref(),
        query.role.as_deref(),
    )
    .await?;

    Ok(Json(AdminUsersListResponse {
        users: users.into_iter().map(Into::into).collect(),
        total,
        page,
        per_page,
    }))
}

/// Change a user's role
pub async fn update_user_role(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRoleRequest>,
) -> AppResult<Json<AdminUserResponse>> {
    payload.validate()?;

    let user = AdminService::update_user_role(state.db(), &id, &payload.role).await?;

    Ok(Json(user.into()))
}

/// Platform-wide counters
pub async fn get_platform_stats(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
) -> AppResult<Json<PlatformStatsResponse>> {
    let stats = AdminService::platform_stats(state.db()).await?;
    Ok(Json(stats))
}

/// Recompute every user's global and college rank
pub async fn recompute_ranks(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
) -> AppResult<Json<RecomputeRanksResponse>> {
    let updated = AdminService::recompute_ranks(state.db()).await?;
    Ok(Json(RecomputeRanksResponse { updated }))
}

/// Create a problem
pub async fn create_problem(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Json(payload): Json<CreateProblemRequest>,
) -> AppResult<(StatusCode, Json<ProblemResponse>)> {
    payload.validate()?;

    let problem = ProblemService::create_problem(
        state.db(),
        &payload.title,
        &payload.difficulty,
        payload.points,
        payload.acceptance.as_deref().unwrap_or("0%"),
        payload.tags.as_deref().unwrap_or(&[]),
        &payload.statement,
        payload.input_format.as_deref().unwrap_or(""),
        payload.output_format.as_deref().unwrap_or(""),
        payload.constraints.as_deref().unwrap_or(""),
        payload.sample_input.as_deref(),
        payload.sample_output.as_deref(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(problem.into())))
}

/// Patch problem fields, omitted ones unchanged
pub async fn update_problem(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProblemRequest>,
) -> AppResult<Json<ProblemResponse>> {
    payload.validate()?;

    let problem = ProblemService::update_problem(
        state.db(),
        &id,
        payload.title.as_deref(),
        payload.difficulty.as_deref(),
        payload.points,
        payload.acceptance.as_deref(),
        payload.tags.as_deref(),
        payload.statement.as_deref(),
        payload.input_format.as_deref(),
        payload.output_format.as_deref(),
        payload.constraints.as_deref(),
        payload.sample_input.as_deref(),
        payload.sample_output.as_deref(),
    )
    .await?;

    Ok(Json(problem.into()))
}

/// Delete a problem. Its test cases go with it; submissions stay.
pub async fn delete_problem(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    ProblemService::delete_problem(state.db(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Attach a test case to a problem
pub async fn add_test_case(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreateTestCaseRequest>,
) -> AppResult<(StatusCode, Json<TestCaseResponse>)> {
    payload.validate()?;

    let test_case = ProblemService::add_test_case(
        state.db(),
        &id,
        &payload.input_data,
        &payload.expected_output,
        payload.is_hidden.unwrap_or(false),
        payload.position.unwrap_or(0),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(test_case.into())))
}

/// Remove a test case
pub async fn delete_test_case(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path((problem_id, case_id)): Path<(Uuid, Uuid)>,
) -> AppResult<StatusCode> {
    ProblemService::delete_test_case(state.db(), &problem_id, &case_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Create a contest
pub async fn create_contest(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Json(payload): Json<CreateContestRequest>,
) -> AppResult<(StatusCode, Json<ContestResponse>)> {
    payload.validate()?;

    let contest = ContestService::create_contest(
        state.db(),
        &payload.title,
        payload.description.as_deref().unwrap_or(""),
        payload.rules.as_deref().unwrap_or(""),
        payload.prizes.as_deref().unwrap_or(""),
        payload.start_time,
        payload.end_time,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ContestResponse::from_parts(contest, 0)),
    ))
}

/// Patch contest fields, omitted ones unchanged
pub async fn update_contest(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateContestRequest>,
) -> AppResult<Json<ContestResponse>> {
    payload.validate()?;

    let contest = ContestService::update_contest(
        state.db(),
        &id,
        payload.title.as_deref(),
        payload.description.as_deref(),
        payload.rules.as_deref(),
        payload.prizes.as_deref(),
        payload.start_time,
        payload.end_time,
    )
    .await?;

    let participants = ContestService::participant_count(state.db(), &id).await?;

    Ok(Json(ContestResponse::from_parts(contest, participants)))
}

/// Drop a contest and its registrations
pub async fn delete_contest(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    ContestService::delete_contest(state.db(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Create a forum category
pub async fn create_category(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Json(payload): Json<CreateCategoryRequest>,
) -> AppResult<(StatusCode, Json<CategoryResponse>)> {
    payload.validate()?;

    let category = ForumService::create_category(state.db(), &payload.name).await?;

    Ok((StatusCode::CREATED, Json(category.into())))
}

/// Delete a forum category. Threads keep existing, uncategorized.
pub async fn delete_category(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    ForumService::delete_category(state.db(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
