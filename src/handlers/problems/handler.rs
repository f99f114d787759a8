//! Handlers for browsing the problem bank

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::{
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::AppResult,
    middleware::auth::OptionalAuth,
    services::ProblemService,
    state::AppState,
};

use super::{
    request::ListProblemsQuery,
    response::{ProblemResponse, ProblemsListResponse, TestCasesListResponse},
};

/// Browse the problem bank, paginated and filterable by difficulty
pub async fn list_problems(
    State(state): State<AppState>,
    Query(query): Query<ListProblemsQuery>,
) -> AppResult<Json<ProblemsListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);

    let (problems, total) = ProblemService::list_problems(
        state.db(),
        page,
        per_page,
        query.search.as_deref(),
        query.difficulty.as_deref(),
        query.tag.as_deref(),
    )
    .await?;

    Ok(Json(ProblemsListResponse {
        problems: problems.into_iter().map(Into::into).collect(),
        total,
        page,
        per_page,
    }))
}

/// Fetch one problem by id
pub async fn get_problem(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ProblemResponse>> {
    let problem = ProblemService::get_problem(state.db(), &id).await?;
    Ok(Json(problem.into()))
}

/// List test cases for a problem. Hidden cases only appear for admins.
pub async fn list_test_cases(
    State(state): State<AppState>,
    OptionalAuth(auth_user): OptionalAuth,
    Path(id): Path<Uuid>,
) -> AppResult<Json<TestCasesListResponse>> {
    let include_hidden = auth_user.as_ref().map(|u| u.is_admin()).unwrap_or(false);

    let cases = ProblemService::list_test_cases(state.db(), &id, include_hidden).await?;
    let total = cases.len() as i64;

    Ok(Json(TestCasesListResponse {
        test_cases: cases.into_iter().map(Into::into).collect(),
        total,
    }))
}
